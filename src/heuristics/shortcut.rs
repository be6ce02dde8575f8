//! Eulerian walk to Hamiltonian cycle by skipping repeat visits.

use crate::graph::{DistanceGraph, Weight};

/// A closed Hamiltonian tour with its accumulated length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour {
    /// Visiting order, closed by repeating the first vertex
    pub vertices: Vec<usize>,
    /// Sum over every consecutive pair, closing edge included
    pub length: Weight,
    /// Same sum without the closing edge
    pub open_length: Weight,
}

/// Keep the first occurrence of each vertex of `walk` and close the cycle.
pub fn shortcut(walk: &[usize], graph: &DistanceGraph) -> Tour {
    let mut visited = vec![false; graph.len()];
    let mut vertices = Vec::with_capacity(graph.len() + 1);
    let mut open_length = 0;

    for &v in walk {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        if let Some(&prev) = vertices.last() {
            open_length += graph.weight(prev, v);
        }
        vertices.push(v);
    }

    let (first, last) = match (vertices.first(), vertices.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Tour::default(),
    };

    let closing = graph.weight(last, first);
    vertices.push(first);

    Tour {
        vertices,
        length: open_length + closing,
        open_length,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;

    fn graph_of(coords: &[(f64, f64)]) -> DistanceGraph {
        let points: Vec<Point> = coords
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Point::new(i as u64, x, y))
            .collect();
        DistanceGraph::from_points(&points)
    }

    #[test]
    fn test_skips_repeats() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let tour = shortcut(&[0, 1, 2, 1, 3, 1, 0], &graph);

        assert_eq!(tour.vertices, vec![0, 1, 2, 3, 0]);
        assert_eq!(tour.open_length, 3);
        assert_eq!(tour.length, 6);
    }

    #[test]
    fn test_collinear_walk() {
        let graph = graph_of(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
        let tour = shortcut(&[0, 1, 2, 0], &graph);

        assert_eq!(tour.vertices, vec![0, 1, 2, 0]);
        assert_eq!(tour.length, 4);
        assert_eq!(tour.open_length, 2);
    }

    #[test]
    fn test_degenerate_walks() {
        let single = graph_of(&[(3.0, 3.0)]);
        let tour = shortcut(&[0], &single);
        assert_eq!(tour.vertices, vec![0, 0]);
        assert_eq!(tour.length, 0);

        let empty = graph_of(&[]);
        assert_eq!(shortcut(&[], &empty), Tour::default());
    }
}
