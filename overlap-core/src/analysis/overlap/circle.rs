use log::trace;

use crate::{circle::Circle, r2::R2};

use super::Overlaps;

/// Closed test: circles whose centers are exactly `r1 + r2` apart overlap.
impl Overlaps<Circle> for Circle {
    fn overlaps(&self, o: &Circle) -> bool {
        self.c.distance(&o.c) <= self.r + o.r
    }
}

/// Circle against a polygon boundary: any edge crossing the circle, or the circle's center inside the polygon.
///
/// A polygon lying strictly inside the circle, away from its center, is not detected from this side; the
/// polygon-side separating-axis test covers that case.
impl Overlaps<[R2<f64>]> for Circle {
    fn overlaps(&self, vertices: &[R2<f64>]) -> bool {
        let n = vertices.len();
        for i in 0..n {
            if self.intersects_segment(&vertices[i], &vertices[(i + 1) % n]) {
                return true;
            }
        }
        contains_point(vertices, &self.c)
    }
}

impl Circle {
    /// Whether segment `p0`-`p1` meets the circle's boundary.
    ///
    /// Substitutes `P(t) = p0 + t·(p1 - p0)` into the circle equation and checks whether either root of the
    /// resulting quadratic lies in `[0, 1]`. Zero-length segments never intersect.
    pub fn intersects_segment(&self, p0: &R2<f64>, p1: &R2<f64>) -> bool {
        let d = *p1 - *p0;
        let f = *p0 - self.c;

        let a = d.dot(&d);
        if a == 0. {
            trace!("Skipping zero-length edge at {}", p0);
            return false;
        }
        let b = 2. * f.dot(&d);
        let c = f.dot(&f) - self.r * self.r;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return false;
        }
        let sqrt = discriminant.sqrt();
        let t0 = (-b - sqrt) / (2. * a);
        let t1 = (-b + sqrt) / (2. * a);
        (0. ..=1.).contains(&t0) || (0. ..=1.).contains(&t1)
    }
}

/// Ray-casting point-in-polygon test: counts crossings of a horizontal ray cast from `p` towards +x.
///
/// An edge counts when exactly one endpoint is strictly above `p` and the crossing lies strictly to the right of
/// `p`, so points on a left or bottom edge are inside and points on a right or top edge are outside.
pub fn contains_point(vertices: &[R2<f64>], p: &R2<f64>) -> bool {
    let n = vertices.len();
    let mut crossings = 0;
    for i in 0..n {
        let v0 = &vertices[i];
        let v1 = &vertices[(i + 1) % n];
        if (v0.y > p.y) != (v1.y > p.y)
            && p.x < (v1.x - v0.x) * (p.y - v0.y) / (v1.y - v0.y) + v0.x
        {
            crossings += 1;
        }
    }
    crossings % 2 == 1
}
