use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{error::InvalidShape, r2::R2};

use super::{check_center, check_finite, check_radius, hull};

/// Polygon with caller-supplied vertices. Overlap tests assume the vertices form a convex polygon (see
/// [`IrregularPolygon::from_points`]); they are kept in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IrregularPolygonSpec")]
pub struct IrregularPolygon {
    #[serde(rename = "center")]
    pub c: R2<f64>,
    /// Nominal radius the vertices were generated from; not a geometric bound.
    #[serde(rename = "radius")]
    pub r: f64,
    vertices: Vec<R2<f64>>,
}

#[derive(Deserialize)]
struct IrregularPolygonSpec {
    center: R2<f64>,
    radius: f64,
    vertices: Vec<R2<f64>>,
}

impl TryFrom<IrregularPolygonSpec> for IrregularPolygon {
    type Error = InvalidShape;
    fn try_from(IrregularPolygonSpec { center, radius, vertices }: IrregularPolygonSpec) -> Result<Self, Self::Error> {
        IrregularPolygon::new(center, radius, vertices)
    }
}

impl IrregularPolygon {
    /// Validates the vertex list as-is (no hull is taken); consecutive duplicates are dropped.
    pub fn new(c: R2<f64>, r: f64, vertices: Vec<R2<f64>>) -> Result<IrregularPolygon, InvalidShape> {
        let c = check_center(c)?;
        let r = check_radius(r)?;
        for v in &vertices {
            check_finite("vertex.x", v.x)?;
            check_finite("vertex.y", v.y)?;
        }
        let vertices = hull::dedup_consecutive(vertices);
        if vertices.len() < 3 {
            return Err(InvalidShape::TooFewVertices(vertices.len()));
        }
        Ok(IrregularPolygon { c, r, vertices })
    }

    /// Polygon bounded by the convex hull of `points`.
    ///
    /// Fails with [`InvalidShape::TooFewVertices`] when the hull degenerates to a segment or a point.
    pub fn from_points(c: R2<f64>, r: f64, points: Vec<R2<f64>>) -> Result<IrregularPolygon, InvalidShape> {
        let points = hull::dedup_consecutive(points);
        IrregularPolygon::new(c, r, hull::convex_hull(points))
    }

    pub fn vertices(&self) -> &[R2<f64>] {
        &self.vertices
    }
}

impl Display for IrregularPolygon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "I[")?;
        for (idx, v) in self.vertices.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn pts(coords: &[(f64, f64)]) -> Vec<R2<f64>> {
        coords.iter().map(|&(x, y)| R2::new(x, y)).collect()
    }

    #[test]
    fn keeps_given_order() {
        let vertices = pts(&[(0., 0.), (0., 1.), (1., 0.)]);
        let p = IrregularPolygon::new(R2::new(0.3, 0.3), 1., vertices.clone()).unwrap();
        assert_eq!(p.vertices(), vertices.as_slice());
    }

    #[test]
    fn from_points_takes_hull() {
        let p = IrregularPolygon::from_points(
            R2::new(0., 0.),
            2.,
            pts(&[(1., 0.), (0., 0.1), (0., 1.), (-1., 0.), (0., -1.)]),
        ).unwrap();
        assert_eq!(p.vertices(), pts(&[(-1., 0.), (0., -1.), (1., 0.), (0., 1.)]).as_slice());
    }

    #[test]
    fn degenerate_hull_rejected() {
        let err = IrregularPolygon::from_points(
            R2::new(0., 0.),
            1.,
            pts(&[(0., 0.), (1., 0.), (2., 0.), (3., 0.)]),
        );
        assert_eq!(err, Err(InvalidShape::TooFewVertices(2)));
    }

    #[test]
    fn duplicate_vertices_rejected() {
        let err = IrregularPolygon::new(R2::new(0., 0.), 1., pts(&[(0., 0.), (0., 0.), (1., 1.)]));
        assert_eq!(err, Err(InvalidShape::TooFewVertices(2)));
        let err = IrregularPolygon::new(R2::new(0., 0.), 1., vec![]);
        assert_eq!(err, Err(InvalidShape::TooFewVertices(0)));
    }

    #[test]
    fn collinear_triangle_allowed() {
        // A flat triangle is still 3 distinct vertices; overlap tests must cope with it
        let p = IrregularPolygon::new(R2::new(1., 0.), 1., pts(&[(0., 0.), (1., 0.), (2., 0.)])).unwrap();
        assert_eq!(p.vertices().len(), 3);
    }

    #[test]
    fn non_finite_vertex() {
        let err = IrregularPolygon::new(R2::new(0., 0.), 1., pts(&[(0., 0.), (f64::NAN, 0.), (1., 1.)]));
        assert!(matches!(err, Err(InvalidShape::NonFinite { field: "vertex.x", .. })));
    }
}
