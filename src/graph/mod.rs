//! Graph structures used by the Christofides pipeline.
//!
//! The complete distance graph lives here; the algorithms that walk it
//! (union-find, Kruskal, odd-vertex matching, Eulerian extraction) each
//! have their own submodule.

pub mod euler;
pub mod matching;
pub mod mst;
pub mod union_find;

use crate::instance::Point;

/// Integer edge weight (rounded Euclidean distance).
pub type Weight = u64;

/// An undirected weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: usize, v: usize, weight: Weight) -> Self {
        Edge { u, v, weight }
    }
}

/// Rounded Euclidean distance between two points.
///
/// Ties at exactly `.5` round to the even integer.
#[inline]
pub fn rounded_distance(a: &Point, b: &Point) -> Weight {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt().round_ties_even() as Weight
}

/// Complete, symmetric distance graph over a point set.
///
/// Only the strict upper triangle is stored, one weight per unordered pair,
/// laid out row by row.
#[derive(Debug, Clone, Default)]
pub struct DistanceGraph {
    n: usize,
    weights: Vec<Weight>,
}

impl DistanceGraph {
    /// Build the graph in O(n²) time and memory.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut weights = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for i in 0..n {
            for j in i + 1..n {
                weights.push(rounded_distance(&points[i], &points[j]));
            }
        }

        DistanceGraph { n, weights }
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Number of stored edges, `n(n-1)/2`
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        // offset of row i in the condensed triangle, then column j
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }

    /// Weight between `a` and `b`. `weight(a, a)` is 0.
    #[inline]
    pub fn weight(&self, a: usize, b: usize) -> Weight {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => self.weights[self.index(a, b)],
            std::cmp::Ordering::Greater => self.weights[self.index(b, a)],
            std::cmp::Ordering::Equal => 0,
        }
    }

    /// Every edge with `u < v`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n).flat_map(move |u| {
            (u + 1..self.n).map(move |v| Edge::new(u, v, self.weight(u, v)))
        })
    }

    /// Sum of `weight` over consecutive pairs of `path`.
    pub fn path_weight(&self, path: &[usize]) -> Weight {
        path.windows(2).map(|w| self.weight(w[0], w[1])).sum()
    }
}
