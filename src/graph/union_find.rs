//! Disjoint-set forest with full path compression and union by size.
//!
//! Elements are vertex indices. Storage grows on demand: an element that has
//! never been looked up is its own root with size 1, so the structure can be
//! created empty and populated lazily by `find`.

/// Union-find over `usize` elements.
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate room for elements `0..n` without registering them.
    pub fn with_capacity(n: usize) -> Self {
        UnionFind {
            parent: Vec::with_capacity(n),
            size: Vec::with_capacity(n),
        }
    }

    fn ensure(&mut self, x: usize) {
        if x >= self.parent.len() {
            let start = self.parent.len();
            self.parent.extend(start..=x);
            self.size.resize(x + 1, 1);
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node on the traversed path is re-pointed directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        self.ensure(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets of all `items` and return the surviving root.
    ///
    /// The winner is the root with the largest `(size, root)` pair; every other
    /// root is attached to it and its size becomes the sum. Returns `None` for
    /// an empty slice.
    pub fn union(&mut self, items: &[usize]) -> Option<usize> {
        let mut roots: Vec<usize> = items.iter().map(|&x| self.find(x)).collect();
        roots.sort_unstable();
        roots.dedup();

        let heaviest = roots.iter().copied().max_by_key(|&r| (self.size[r], r))?;

        for &r in &roots {
            if r != heaviest {
                self.size[heaviest] += self.size[r];
                self.parent[r] = heaviest;
            }
        }

        Some(heaviest)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Size of the set containing `x`.
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Number of elements registered so far.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
