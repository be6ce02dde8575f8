//! Kruskal's minimum spanning tree over the complete distance graph.

use super::union_find::UnionFind;
use super::{DistanceGraph, Edge, Weight};

/// Minimum spanning tree as an ordered list of accepted edges.
#[derive(Debug, Clone, Default)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
}

impl SpanningTree {
    pub fn total_weight(&self) -> Weight {
        self.edges.iter().map(|e| e.weight).sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Degree of every vertex `0..n` in the tree.
    pub fn degrees(&self, n: usize) -> Vec<usize> {
        let mut degree = vec![0usize; n];
        for e in &self.edges {
            degree[e.u] += 1;
            degree[e.v] += 1;
        }
        degree
    }
}

/// Build the MST with Kruskal's algorithm.
///
/// Edges are scanned in ascending `(weight, u, v)` order, which fixes the tree
/// even when many weights tie (e.g. duplicated points).
pub fn kruskal(graph: &DistanceGraph) -> SpanningTree {
    let n = graph.len();
    let target = n.saturating_sub(1);

    let mut edges: Vec<Edge> = graph.edges().collect();
    edges.sort_unstable_by_key(|e| (e.weight, e.u, e.v));

    let mut subtrees = UnionFind::with_capacity(n);
    let mut tree = Vec::with_capacity(target);

    for edge in edges {
        if tree.len() == target {
            break;
        }
        if subtrees.find(edge.u) != subtrees.find(edge.v) {
            tree.push(edge);
            subtrees.union(&[edge.u, edge.v]);
        }
    }

    log::debug!(
        "MST: {} edges, weight {}",
        tree.len(),
        tree.iter().map(|e| e.weight).sum::<Weight>()
    );

    SpanningTree { edges: tree }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn graph_of(coords: &[(f64, f64)]) -> DistanceGraph {
        let points: Vec<Point> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i as u64, x, y))
            .collect();
        DistanceGraph::from_points(&points)
    }

    fn is_acyclic_spanning(tree: &SpanningTree, n: usize) -> bool {
        let mut uf = UnionFind::new();
        for e in &tree.edges {
            if uf.connected(e.u, e.v) {
                return false;
            }
            uf.union(&[e.u, e.v]);
        }
        (0..n).all(|v| uf.connected(0, v))
    }

    /// Minimum over every (n-1)-subset of edges that forms a spanning tree.
    fn brute_force_mst_weight(graph: &DistanceGraph) -> Weight {
        let n = graph.len();
        let edges: Vec<Edge> = graph.edges().collect();
        let m = edges.len();
        let mut best = Weight::MAX;

        fn search(
            edges: &[Edge],
            start: usize,
            uf: &UnionFind,
            taken: usize,
            need: usize,
            weight: Weight,
            best: &mut Weight,
        ) {
            if taken == need {
                *best = (*best).min(weight);
                return;
            }
            for i in start..edges.len() {
                if edges.len() - i < need - taken {
                    break;
                }
                let mut uf = uf.clone();
                if uf.connected(edges[i].u, edges[i].v) {
                    continue;
                }
                uf.union(&[edges[i].u, edges[i].v]);
                search(edges, i + 1, &uf, taken + 1, need, weight + edges[i].weight, best);
            }
        }

        if m == 0 {
            return 0;
        }
        search(&edges, 0, &UnionFind::new(), 0, n - 1, 0, &mut best);
        best
    }

    #[test]
    fn test_collinear_points() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let tree = kruskal(&graph);

        assert_eq!(tree.edges, vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1)]);
        assert_eq!(tree.total_weight(), 2);
        assert_eq!(tree.degrees(3), vec![1, 2, 1]);
    }

    #[test]
    fn test_unit_square_tie_break_gives_star() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let tree = kruskal(&graph);

        assert_eq!(tree.total_weight(), 3);
        assert_eq!(
            tree.edges,
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(0, 3, 1)]
        );
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(kruskal(&graph_of(&[])).is_empty());
        assert!(kruskal(&graph_of(&[(4.0, 4.0)])).is_empty());
    }

    #[test]
    fn test_duplicated_points() {
        let graph = graph_of(&[(1.0, 1.0); 5]);
        let tree = kruskal(&graph);

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.total_weight(), 0);
        assert!(is_acyclic_spanning(&tree, 5));
        // (0, u, v) ordering attaches everything to vertex 0
        assert!(tree.edges.iter().all(|e| e.u == 0));
    }

    #[test]
    fn test_matches_brute_force_on_small_instances() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);

        for n in 2..=7 {
            for _ in 0..5 {
                let coords: Vec<(f64, f64)> = (0..n)
                    .map(|_| (rng.gen_range(0..20) as f64, rng.gen_range(0..20) as f64))
                    .collect();
                let graph = graph_of(&coords);
                let tree = kruskal(&graph);

                assert_eq!(tree.len(), n - 1);
                assert!(is_acyclic_spanning(&tree, n));
                assert_eq!(tree.total_weight(), brute_force_mst_weight(&graph));
            }
        }
    }
}
