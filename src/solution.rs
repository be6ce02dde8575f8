//! Solution representation and output for Euclidean TSP tours.

use crate::error::Result;
use crate::instance::Instance;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

/// A closed tour together with the figures of the run that produced it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Point indices in visiting order, closed by repeating the start
    pub tour: Vec<usize>,
    /// Same tour expressed with the ids read from the input
    pub ids: Vec<u64>,
    /// Total length including the closing edge
    pub length: u64,
    /// Length of the path without the closing edge
    pub open_length: u64,
    /// Weight of the minimum spanning tree (0 for heuristics that build none)
    pub mst_weight: u64,
    /// Weight of the odd-vertex matching
    pub matching_weight: u64,
    /// Number of odd-degree vertices in the MST
    pub odd_vertices: usize,
    /// Seed of the run that produced this tour
    pub seed: u64,
    /// Algorithm that generated this solution
    pub algorithm: String,
    /// Computation time in seconds
    pub computation_time: f64,
}

impl Solution {
    /// Create a solution from a closed tour of indices
    pub fn from_tour(
        instance: &Instance,
        tour: Vec<usize>,
        length: u64,
        open_length: u64,
        algorithm: &str,
    ) -> Self {
        Solution {
            ids: instance.ids(&tour),
            tour,
            length,
            open_length,
            mst_weight: 0,
            matching_weight: 0,
            odd_vertices: 0,
            seed: 0,
            algorithm: algorithm.to_string(),
            computation_time: 0.0,
        }
    }

    /// Check that every point is visited exactly once and the tour is closed
    pub fn is_complete(&self, instance: &Instance) -> bool {
        let n = instance.dimension();
        if n == 0 {
            return self.tour.is_empty();
        }
        if self.tour.len() != n + 1 || self.tour.first() != self.tour.last() {
            return false;
        }

        let unique: HashSet<usize> = self.tour[..n].iter().copied().collect();
        unique.len() == n && unique.iter().all(|&v| v < n)
    }

    /// Write the text output: the length, then one id per line.
    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{}", self.length)?;
        for id in &self.ids {
            writeln!(out, "{}", id)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution ({})", self.algorithm)?;
        writeln!(f, "  Length: {}", self.length)?;
        writeln!(f, "  Open length: {}", self.open_length)?;
        if self.mst_weight > 0 {
            writeln!(f, "  MST weight: {}", self.mst_weight)?;
            writeln!(
                f,
                "  Matching weight: {} ({} odd vertices)",
                self.matching_weight, self.odd_vertices
            )?;
        }
        writeln!(f, "  Seed: {}", self.seed)?;
        writeln!(f, "  Time: {:.4}s", self.computation_time)?;
        writeln!(f, "  Tour: {:?}", self.ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;

    fn line() -> Instance {
        Instance::new(
            "line",
            vec![Point::new(5, 0.0, 0.0), Point::new(6, 1.0, 0.0), Point::new(7, 2.0, 0.0)],
        )
    }

    #[test]
    fn test_output_format() {
        let instance = line();
        let sol = Solution::from_tour(&instance, vec![0, 1, 2, 0], 4, 2, "test");

        let mut buf = Vec::new();
        sol.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "4\n5\n6\n7\n5\n");
    }

    #[test]
    fn test_is_complete() {
        let instance = line();
        let complete = |tour: Vec<usize>| {
            Solution::from_tour(&instance, tour, 0, 0, "t").is_complete(&instance)
        };

        assert!(complete(vec![0, 2, 1, 0]));
        assert!(!complete(vec![0, 1, 2]));
        assert!(!complete(vec![0, 1, 1, 0]));
        assert!(!complete(vec![0, 1, 2, 1]));
    }

    #[test]
    fn test_json_roundtrip_keeps_tour() {
        let instance = line();
        let sol = Solution::from_tour(&instance, vec![0, 1, 2, 0], 4, 2, "test");
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(back.tour, sol.tour);
        assert_eq!(back.ids, vec![5, 6, 7, 5]);
        assert_eq!(back.length, 4);
    }
}
