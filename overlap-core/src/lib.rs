#[cfg_attr(not(test), allow(unused_imports))]
#[macro_use]
extern crate approx;

// Organized modules
pub mod analysis;
pub mod geometry;

pub use geometry::circle;
pub use geometry::hull;
pub use geometry::irregular;
pub use geometry::r2;
pub use geometry::regular;
pub use geometry::shape;

pub use analysis::cluster;
pub use analysis::overlap;
pub use analysis::palette;
pub use analysis::union_find;

pub mod config;
pub mod error;
pub mod scene;

// Re-export key types for external use
pub use config::Config;
pub use error::{ConfigError, InvalidShape};
pub use overlap::{overlaps, Overlaps};
pub use scene::{Entry, Group, Scene};
pub use shape::{Kind, Shape};
pub use r2::R2;

/// Parse a log level string into LevelFilter; empty or missing means `info`.
pub fn parse_log_level(level: Option<&str>) -> Result<log::LevelFilter, log::ParseLevelError> {
    match level {
        Some("") | None => Ok(log::LevelFilter::Info),
        Some(level) => level.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn log_levels() {
        assert_eq!(parse_log_level(None), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("")), Ok(log::LevelFilter::Info));
        assert_eq!(parse_log_level(Some("debug")), Ok(log::LevelFilter::Debug));
        assert_eq!(parse_log_level(Some("WARN")), Ok(log::LevelFilter::Warn));
        assert!(parse_log_level(Some("loud")).is_err());
    }
}
