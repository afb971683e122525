//! Separating-axis tests for polygon boundaries.
//!
//! Exact for pairs of convex polygons. Against a circle, the polygon's edge normals plus a single axis through
//! the polygon vertex nearest the circle's center stand in for the infinitely many axes of the circle. For a
//! convex polygon that axis is the one that matters whenever the closest boundary point is a vertex; non-convex
//! input gets no such guarantee.

use approx::AbsDiffEq;
use itertools::Itertools;
use log::trace;
use ordered_float::OrderedFloat;

use crate::{circle::Circle, hull::VERTEX_TOLERANCE, r2::R2};

use super::Overlaps;

/// Closed interval of projections onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn of_points(vertices: &[R2<f64>], axis: &R2<f64>) -> Interval {
        let (min, max) = vertices.iter().map(|v| v.dot(axis)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), p| (min.min(p), max.max(p)),
        );
        Interval { min, max }
    }

    pub fn of_circle(circle: &Circle, axis: &R2<f64>) -> Interval {
        let c = circle.c.dot(axis);
        Interval { min: c - circle.r, max: c + circle.r }
    }

    /// Touching intervals are not separated.
    pub fn separated(&self, o: &Interval) -> bool {
        self.max < o.min || o.max < self.min
    }
}

/// Unit outward normals of each edge (`(dx, dy)` → `(dy, -dx)`), in edge order. Zero-length edges yield no axis.
pub fn edge_normals(vertices: &[R2<f64>]) -> impl Iterator<Item = R2<f64>> + '_ {
    vertices
        .iter()
        .circular_tuple_windows::<(_, _)>()
        .filter_map(|(p0, p1)| {
            let axis = (*p1 - *p0).normal().normalize();
            if axis.is_none() {
                trace!("Skipping zero-length edge at {}", p0);
            }
            axis
        })
}

/// Axis from the circle's center through the nearest vertex (first one, on ties), if they don't coincide.
pub fn nearest_vertex_axis(vertices: &[R2<f64>], circle: &Circle) -> Option<R2<f64>> {
    let nearest = vertices
        .iter()
        .min_by_key(|v| OrderedFloat((**v - circle.c).norm2()))?;
    let axis = (*nearest - circle.c).normalize();
    if axis.is_none() {
        trace!("Circle center {} coincides with vertex; no extra axis", circle.c);
    }
    axis
}

impl Overlaps<[R2<f64>]> for [R2<f64>] {
    /// When every edge on both sides is degenerate, both boundaries are single points, and they overlap only if
    /// they coincide within [`VERTEX_TOLERANCE`].
    fn overlaps(&self, o: &[R2<f64>]) -> bool {
        let mut axes = edge_normals(self).chain(edge_normals(o)).peekable();
        if axes.peek().is_none() {
            trace!("No separating-axis candidates; comparing collapsed boundaries as points");
            return match (self.first(), o.first()) {
                (Some(a), Some(b)) => a.abs_diff_eq(b, VERTEX_TOLERANCE),
                _ => false,
            };
        }
        !axes.any(|axis| Interval::of_points(self, &axis).separated(&Interval::of_points(o, &axis)))
    }
}

impl Overlaps<Circle> for [R2<f64>] {
    /// With no usable axis the boundary is a point on the circle's center (or empty).
    fn overlaps(&self, circle: &Circle) -> bool {
        let mut axes = edge_normals(self).chain(nearest_vertex_axis(self, circle)).peekable();
        if axes.peek().is_none() {
            return self.iter().any(|v| v.distance(&circle.c) <= circle.r);
        }
        !axes.any(|axis| Interval::of_points(self, &axis).separated(&Interval::of_circle(circle, &axis)))
    }
}
