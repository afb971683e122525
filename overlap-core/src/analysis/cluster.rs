//! Connected components of the overlap graph.
//!
//! The graph is never built: every unordered pair is tested once and overlapping pairs are merged in a
//! [`UnionFind`] scoped to the pass.

use itertools::Itertools;
use log::{debug, trace};
use rayon::prelude::*;

use crate::{overlap::overlaps, shape::Shape, union_find::UnionFind};

/// Index pairs `(i, j)`, `i < j`, of overlapping shapes, in lexicographic order. Predicates run on the rayon
/// thread pool.
pub fn overlapping_pairs(shapes: &[Shape]) -> Vec<(usize, usize)> {
    let n = shapes.len();
    (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (i + 1..n)
                .filter(move |&j| overlaps(&shapes[i], &shapes[j]))
                .map(move |j| (i, j))
        })
        .collect()
}

/// Groups shapes that overlap directly or through a chain of overlaps.
///
/// Components are ordered by their smallest index, members ascending, so repeated passes over the same shapes
/// give identical output. With `parallel`, the pairwise tests are evaluated by [`overlapping_pairs`] and the
/// union-find is fed serially afterwards; the result is the same.
pub fn components(shapes: &[Shape], parallel: bool) -> Vec<Vec<usize>> {
    let mut sets = UnionFind::new(shapes.len());
    if parallel {
        for (i, j) in overlapping_pairs(shapes) {
            trace!("Overlap: {} ~ {}", i, j);
            sets.union(i, j);
        }
    } else {
        for (i, j) in (0..shapes.len()).tuple_combinations() {
            if overlaps(&shapes[i], &shapes[j]) {
                trace!("Overlap: {} ~ {}", i, j);
                sets.union(i, j);
            }
        }
    }
    let components = sets.sets();
    debug!(
        "{} shapes, {} components, sizes {}",
        shapes.len(),
        components.len(),
        components.iter().map(|c| c.len().to_string()).collect::<Vec<_>>().join(", "),
    );
    components
}
