use std::borrow::Cow;

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

use crate::{circle::{self, Circle}, error::InvalidShape, irregular::IrregularPolygon, r2::R2, regular::RegularPolygon};

#[derive(Debug, Display, Clone, From, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    Circle(Circle),
    RegularPolygon(RegularPolygon),
    IrregularPolygon(IrregularPolygon),
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    #[display(fmt = "circle")]
    Circle,
    #[display(fmt = "regularPolygon")]
    RegularPolygon,
    #[display(fmt = "irregularPolygon")]
    IrregularPolygon,
}

impl Kind {
    pub fn is_polygon(&self) -> bool {
        !matches!(self, Kind::Circle)
    }
}

pub fn circle(cx: f64, cy: f64, r: f64) -> Result<Shape, InvalidShape> {
    Ok(Shape::Circle(Circle::new(R2 { x: cx, y: cy }, r)?))
}
pub fn regular(cx: f64, cy: f64, r: f64, sides: usize, rotation: f64) -> Result<Shape, InvalidShape> {
    Ok(Shape::RegularPolygon(RegularPolygon::new(R2 { x: cx, y: cy }, r, sides, rotation)?))
}
pub fn irregular(cx: f64, cy: f64, r: f64, vertices: Vec<R2<f64>>) -> Result<Shape, InvalidShape> {
    Ok(Shape::IrregularPolygon(IrregularPolygon::new(R2 { x: cx, y: cy }, r, vertices)?))
}

impl Shape {
    pub fn kind(&self) -> Kind {
        match self {
            Shape::Circle(_) => Kind::Circle,
            Shape::RegularPolygon(_) => Kind::RegularPolygon,
            Shape::IrregularPolygon(_) => Kind::IrregularPolygon,
        }
    }

    pub fn center(&self) -> R2<f64> {
        match self {
            Shape::Circle(c) => c.c,
            Shape::RegularPolygon(p) => p.c,
            Shape::IrregularPolygon(p) => p.c,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.r,
            Shape::RegularPolygon(p) => p.r,
            Shape::IrregularPolygon(p) => p.r,
        }
    }

    /// Stored vertex list, for the polygon variants.
    pub fn polygon(&self) -> Option<&[R2<f64>]> {
        match self {
            Shape::Circle(_) => None,
            Shape::RegularPolygon(p) => Some(p.vertices()),
            Shape::IrregularPolygon(p) => Some(p.vertices()),
        }
    }

    /// Boundary as an ordered vertex list. Polygons borrow their stored vertices; circles are sampled at
    /// `resolution` points.
    pub fn vertices(&self, resolution: usize) -> Cow<'_, [R2<f64>]> {
        match self {
            Shape::Circle(c) => Cow::Owned(c.vertices(resolution)),
            Shape::RegularPolygon(p) => Cow::Borrowed(p.vertices()),
            Shape::IrregularPolygon(p) => Cow::Borrowed(p.vertices()),
        }
    }

    pub fn default_vertices(&self) -> Cow<'_, [R2<f64>]> {
        self.vertices(circle::DEFAULT_RESOLUTION)
    }
}
