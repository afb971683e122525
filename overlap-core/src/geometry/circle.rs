use std::{f64::consts::PI, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{error::InvalidShape, r2::R2};

use super::{check_center, check_radius};

/// Number of boundary points used when a circle has to be treated as a polygon.
pub const DEFAULT_RESOLUTION: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleSpec")]
pub struct Circle {
    #[serde(rename = "center")]
    pub c: R2<f64>,
    #[serde(rename = "radius")]
    pub r: f64,
}

#[derive(Deserialize)]
struct CircleSpec {
    center: R2<f64>,
    radius: f64,
}

impl TryFrom<CircleSpec> for Circle {
    type Error = InvalidShape;
    fn try_from(CircleSpec { center, radius }: CircleSpec) -> Result<Self, Self::Error> {
        Circle::new(center, radius)
    }
}

impl Circle {
    pub fn new(c: R2<f64>, r: f64) -> Result<Circle, InvalidShape> {
        Ok(Circle { c: check_center(c)?, r: check_radius(r)? })
    }

    /// `n` points sampled uniformly by angle, starting at angle 0. A new list on every call.
    pub fn vertices(&self, n: usize) -> Vec<R2<f64>> {
        (0..n)
            .map(|i| self.c.polar(self.r, 2. * PI * (i as f64) / (n as f64)))
            .collect()
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({:.3}, {:.3}, {:.3})", self.c.x, self.c.y, self.r)
    }
}
