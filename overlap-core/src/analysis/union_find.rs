use std::cmp::Ordering;

/// Disjoint-set forest over `0..n`, with path compression and union by rank.
///
/// Lives for a single clustering pass.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set. Every node on the path from `x` is re-pointed directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`; the lower-rank root goes under the higher-rank one, and on a tie
    /// `x`'s root wins. Returns `false` if they were already in the same set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            Ordering::Less => self.parent[root_x] = root_y,
            Ordering::Greater => self.parent[root_y] = root_x,
            Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }

    /// All sets, in order of their smallest member; members ascending.
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.len();
        let mut slots: Vec<Option<usize>> = vec![None; n];
        let mut sets: Vec<Vec<usize>> = Vec::new();
        for x in 0..n {
            let root = self.find(x);
            let slot = *slots[root].get_or_insert_with(|| {
                sets.push(Vec::new());
                sets.len() - 1
            });
            sets[slot].push(x);
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(3);
        assert_eq!(uf.sets(), vec![vec![0], vec![1], vec![2]]);
        assert!(UnionFind::new(0).sets().is_empty());
        assert!(UnionFind::new(0).is_empty());
    }

    #[test]
    fn union_by_rank() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert_eq!(uf.parent[1], 0);
        assert_eq!(uf.rank[0], 1);

        // Lower rank goes under higher rank, regardless of argument order
        assert!(uf.union(2, 0));
        assert_eq!(uf.parent[2], 0);
        assert_eq!(uf.rank[0], 1);

        assert!(uf.union(3, 4));
        assert_eq!(uf.parent[4], 3);
        // Tie: first argument's root wins and gains a rank
        assert!(uf.union(1, 4));
        assert_eq!(uf.parent[3], 0);
        assert_eq!(uf.rank[0], 2);

        assert!(!uf.union(4, 2));
        assert_eq!(uf.sets(), vec![vec![0, 1, 2, 3, 4]]);
    }

    #[test]
    fn path_compression() {
        let mut uf = UnionFind::new(5);
        // Hand-built chain 4 → 3 → 2 → 1 → 0
        uf.parent = vec![0, 0, 1, 2, 3];
        assert_eq!(uf.find(4), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn long_chain() {
        // Deep chains don't recurse
        let n = 100_000;
        let mut uf = UnionFind::new(n);
        uf.parent = (0..n).map(|i| i.saturating_sub(1)).collect();
        assert_eq!(uf.find(n - 1), 0);
        assert!(uf.parent.iter().all(|&p| p == 0));
    }

    #[test]
    fn discovery_order() {
        let mut uf = UnionFind::new(6);
        uf.union(5, 3);
        uf.union(4, 1);
        uf.union(1, 0);
        assert_eq!(uf.sets(), vec![vec![0, 1, 4], vec![2], vec![3, 5]]);
    }
}
