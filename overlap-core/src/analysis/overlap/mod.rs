mod circle;
pub mod sat;

#[cfg(test)]
mod tests;

pub use circle::contains_point;

use log::trace;

use crate::{circle::Circle, r2::R2, shape::Shape};

pub trait Overlaps<O: ?Sized> {
    fn overlaps(&self, o: &O) -> bool;
}

enum Boundary<'a> {
    Round(&'a Circle),
    Polygon(&'a [R2<f64>]),
}

fn boundary(shape: &Shape) -> Boundary<'_> {
    match shape {
        Shape::Circle(c) => Boundary::Round(c),
        Shape::RegularPolygon(p) => Boundary::Polygon(p.vertices()),
        Shape::IrregularPolygon(p) => Boundary::Polygon(p.vertices()),
    }
}

/// Symmetric overlap test, dispatched on the pair of shape kinds:
///
/// - circle / circle: center distance ≤ sum of radii;
/// - polygon / polygon: separating axes from both polygons' edge normals;
/// - circle / polygon (either order): the circle-side test (edge crossings, then center-in-polygon) or, failing
///   that, the polygon-side separating-axis test. The circle side misses a polygon lying inside the circle away
///   from its center; evaluating both makes the result independent of argument order.
impl Overlaps<Shape> for Shape {
    fn overlaps(&self, o: &Shape) -> bool {
        match (boundary(self), boundary(o)) {
            (Boundary::Round(a), Boundary::Round(b)) => a.overlaps(b),
            (Boundary::Round(c), Boundary::Polygon(p)) | (Boundary::Polygon(p), Boundary::Round(c)) => {
                if c.overlaps(p) {
                    true
                } else {
                    let overlaps = p.overlaps(c);
                    if overlaps {
                        trace!("{} overlaps polygon only by separating-axis test", c);
                    }
                    overlaps
                }
            }
            (Boundary::Polygon(a), Boundary::Polygon(b)) => a.overlaps(b),
        }
    }
}

pub fn overlaps(a: &Shape, b: &Shape) -> bool {
    a.overlaps(b)
}
