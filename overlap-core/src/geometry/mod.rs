pub mod circle;
pub mod hull;
pub mod irregular;
pub mod r2;
pub mod regular;
pub mod shape;

use crate::error::InvalidShape;
use r2::R2;

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64, InvalidShape> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidShape::NonFinite { field, value })
    }
}

pub(crate) fn check_center(c: R2<f64>) -> Result<R2<f64>, InvalidShape> {
    check_finite("center.x", c.x)?;
    check_finite("center.y", c.y)?;
    Ok(c)
}

pub(crate) fn check_radius(r: f64) -> Result<f64, InvalidShape> {
    if check_finite("radius", r)? <= 0. {
        Err(InvalidShape::NonPositiveRadius(r))
    } else {
        Ok(r)
    }
}
