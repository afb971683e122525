//! Monotone-chain convex hull, used to build irregular polygons from scattered points.

use approx::AbsDiffEq;

use crate::r2::R2;

/// Absolute tolerance under which two consecutive vertices count as the same point.
pub const VERTEX_TOLERANCE: f64 = 1e-9;

/// Twice the signed area of triangle `pqr`: positive for a counter-clockwise turn, zero when collinear.
pub fn orientation(p: &R2<f64>, q: &R2<f64>, r: &R2<f64>) -> f64 {
    (*q - *p).cross(&(*r - *p))
}

/// Drop vertices equal (within [`VERTEX_TOLERANCE`]) to their predecessor, including the last→first wrap.
pub fn dedup_consecutive(vertices: Vec<R2<f64>>) -> Vec<R2<f64>> {
    let mut deduped: Vec<R2<f64>> = Vec::with_capacity(vertices.len());
    for v in vertices {
        match deduped.last() {
            Some(last) if last.abs_diff_eq(&v, VERTEX_TOLERANCE) => {}
            _ => deduped.push(v),
        }
    }
    while deduped.len() > 1 && deduped[0].abs_diff_eq(&deduped[deduped.len() - 1], VERTEX_TOLERANCE) {
        deduped.pop();
    }
    deduped
}

/// Counter-clockwise convex hull of `points`.
///
/// Up to 3 points are returned as given. Otherwise points are sorted by x (then y), the lower and upper chains
/// are built popping every non-left turn (`cross <= 0`, so collinear points are dropped), and the repeated
/// closing point is removed. Collinear input collapses to its 2 extreme points.
pub fn convex_hull(mut points: Vec<R2<f64>>) -> Vec<R2<f64>> {
    if points.len() <= 3 {
        return points;
    }
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

    let mut hull: Vec<R2<f64>> = Vec::with_capacity(points.len() + 1);
    // Lower chain
    for p in &points {
        while hull.len() >= 2 && orientation(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0. {
            hull.pop();
        }
        hull.push(*p);
    }
    // Upper chain
    let lower_len = hull.len();
    for p in points.iter().rev().skip(1) {
        while hull.len() > lower_len && orientation(&hull[hull.len() - 2], &hull[hull.len() - 1], p) <= 0. {
            hull.pop();
        }
        hull.push(*p);
    }
    if hull.len() > 1 {
        hull.pop();
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn pts(coords: &[(f64, f64)]) -> Vec<R2<f64>> {
        coords.iter().map(|&(x, y)| R2::new(x, y)).collect()
    }

    #[test]
    fn square_with_interior_points() {
        let hull = convex_hull(pts(&[
            (0.5, 0.5),
            (1., 1.),
            (0., 0.),
            (0.2, 0.7),
            (1., 0.),
            (0., 1.),
        ]));
        assert_eq!(hull, pts(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.)]));
    }

    #[test]
    fn drops_collinear_edge_points() {
        let hull = convex_hull(pts(&[(0., 0.), (1., 0.), (2., 0.), (2., 2.), (0., 2.)]));
        assert_eq!(hull, pts(&[(0., 0.), (2., 0.), (2., 2.), (0., 2.)]));
    }

    #[test]
    fn counter_clockwise() {
        let hull = convex_hull(pts(&[(3., 1.), (-2., 4.), (0., -3.), (1., 5.), (-1., 0.)]));
        let n = hull.len();
        for i in 0..n {
            assert!(orientation(&hull[i], &hull[(i + 1) % n], &hull[(i + 2) % n]) > 0.);
        }
    }

    #[test]
    fn small_inputs_unchanged() {
        let triangle = pts(&[(1., 1.), (0., 0.), (2., 0.)]);
        assert_eq!(convex_hull(triangle.clone()), triangle);
        // Degenerate (collinear) triangles pass through too
        let line = pts(&[(0., 0.), (1., 1.), (2., 2.)]);
        assert_eq!(convex_hull(line.clone()), line);
    }

    #[test]
    fn collinear_collapses_to_segment() {
        let hull = convex_hull(pts(&[(0., 0.), (3., 3.), (1., 1.), (2., 2.)]));
        assert_eq!(hull, pts(&[(0., 0.), (3., 3.)]));
    }

    #[test]
    fn identical_points() {
        let hull = dedup_consecutive(convex_hull(pts(&[(1., 1.); 5])));
        assert_eq!(hull, pts(&[(1., 1.)]));
    }

    #[test]
    fn dedup() {
        let deduped = dedup_consecutive(pts(&[
            (0., 0.),
            (0., 1e-12),
            (1., 0.),
            (1., 0.),
            (1., 1.),
            (1e-10, 0.),
        ]));
        assert_eq!(deduped, pts(&[(0., 0.), (1., 0.), (1., 1.)]));
    }
}
