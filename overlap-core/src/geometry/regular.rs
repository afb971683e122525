use std::{f64::consts::PI, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{error::InvalidShape, hull, r2::R2};

use super::{check_center, check_finite, check_radius};

/// Regular `n`-gon inscribed in the circle of radius `r` around `c`, with its first vertex at angle `t`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegularPolygonSpec")]
pub struct RegularPolygon {
    #[serde(rename = "center")]
    pub c: R2<f64>,
    #[serde(rename = "radius")]
    pub r: f64,
    #[serde(rename = "sides")]
    pub n: usize,
    #[serde(rename = "rotationAngle")]
    pub t: f64,
    vertices: Vec<R2<f64>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegularPolygonSpec {
    center: R2<f64>,
    radius: f64,
    sides: usize,
    #[serde(default)]
    rotation_angle: f64,
}

impl TryFrom<RegularPolygonSpec> for RegularPolygon {
    type Error = InvalidShape;
    fn try_from(spec: RegularPolygonSpec) -> Result<Self, Self::Error> {
        RegularPolygon::new(spec.center, spec.radius, spec.sides, spec.rotation_angle)
    }
}

impl RegularPolygon {
    pub fn new(c: R2<f64>, r: f64, n: usize, t: f64) -> Result<RegularPolygon, InvalidShape> {
        let c = check_center(c)?;
        let r = check_radius(r)?;
        let t = check_finite("rotationAngle", t)?;
        if n < 3 {
            return Err(InvalidShape::TooFewSides(n));
        }
        let step = 2. * PI / (n as f64);
        let edge = 2. * r * (step / 2.).sin();
        if edge <= hull::VERTEX_TOLERANCE {
            return Err(InvalidShape::EdgeTooShort(edge));
        }
        let vertices: Vec<R2<f64>> = (0..n).map(|i| c.polar(r, step * (i as f64) + t)).collect();
        // Far from the origin, rounding can still merge vertices that are distinct in exact arithmetic
        if hull::dedup_consecutive(vertices.clone()).len() < n {
            return Err(InvalidShape::EdgeTooShort(edge));
        }
        Ok(RegularPolygon { c, r, n, t, vertices })
    }

    pub fn vertices(&self) -> &[R2<f64>] {
        &self.vertices
    }
}

impl Display for RegularPolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}({:.3}, {:.3}, {:.3}, {:.3})", self.n, self.c.x, self.c.y, self.r, self.t)
    }
}
