/// Weighted quick-union over `0..len` with path halving.
///
/// Paths are compressed by [`UnionFind::find`] and [`UnionFind::union`];
/// read-only queries walk to the root without rewriting it. Weighting keeps
/// every tree at most `log2(len)` deep.
///
/// Indices passed to any method must be less than the `len` given to
/// [`UnionFind::new`], otherwise the call panics.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `len` singleton components.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Returns the root of the component containing `p`.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            let grandparent = self.parent[self.parent[p]];
            self.parent[p] = grandparent;
            p = grandparent;
        }
        p
    }

    /// Same as [`UnionFind::find`], but leaves the forest untouched.
    pub fn root(&self, mut p: usize) -> usize {
        while self.parent[p] != p {
            p = self.parent[p];
        }
        p
    }

    pub fn connected(&self, p: usize, q: usize) -> bool {
        self.root(p) == self.root(q)
    }

    /// Merges the components of `p` and `q`.
    /// Returns `false` if they were already the same component.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }

        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];

        true
    }
}

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.parent.len(), 4);
        for i in 0..4 {
            assert_eq!(uf.find(i), i);
        }
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn union_is_transitive() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));

        assert!(uf.connected(0, 3));
        assert!(uf.connected(2, 1));
        assert!(!uf.connected(0, 4));
        assert!(!uf.connected(4, 5));
    }

    #[test]
    fn smaller_tree_goes_under_larger() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(0, 2);
        let root = uf.find(0);

        uf.union(3, 0);
        assert_eq!(uf.find(3), root);
        uf.union(0, 4);
        assert_eq!(uf.find(4), root);
    }

    #[test]
    fn long_chain() {
        let n = 1000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        assert!(uf.connected(0, n - 1));
        assert_eq!(uf.size[uf.root(0)], n);
    }

    #[test]
    fn find_compresses_path() {
        let mut uf = UnionFind::new(8);
        for i in 1..8 {
            uf.union(0, i);
        }
        let root = uf.root(7);
        for i in 0..8 {
            assert_eq!(uf.find(i), root);
            assert_eq!(uf.root(i), root);
        }
    }

    #[test]
    fn empty() {
        let uf = UnionFind::new(0);
        assert!(uf.parent.is_empty());
    }
}
