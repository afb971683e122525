
use crate::r2::R2;

pub(super) fn pts(coords: &[(f64, f64)]) -> Vec<R2<f64>> {
    coords.iter().map(|&(x, y)| R2::new(x, y)).collect()
}

/// Axis-aligned square with lower-left corner `(x, y)`, counter-clockwise.
pub(super) fn square(x: f64, y: f64, side: f64) -> Vec<R2<f64>> {
    pts(&[(x, y), (x + side, y), (x + side, y + side), (x, y + side)])
}
