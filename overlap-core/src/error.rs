/// Rejected shape construction. Raised by the shape constructors (and by deserialization, which goes
/// through them); the overlap predicate and clustering never see an invalid shape.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidShape {
    #[error("Non-finite {field}: {value}")]
    NonFinite {
        field: &'static str,
        value: f64,
    },

    #[error("Radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("Regular polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),

    #[error("Polygon needs at least 3 distinct vertices, got {0}")]
    TooFewVertices(usize),

    #[error("Polygon edge length {0} is within vertex tolerance")]
    EdgeTooShort(f64),
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Circle resolution must be at least 3, got {0}")]
    CircleResolution(usize),

    #[error("Palette must contain at least one color")]
    EmptyPalette,
}
