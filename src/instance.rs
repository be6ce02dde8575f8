//! Module for parsing and representing Euclidean TSP instances.
//!
//! An instance file holds one city per line as `id x y`, whitespace
//! separated. Cities are addressed internally by their position in the file;
//! the id read from the file is kept as a label for output.

use crate::error::{Result, TspError};
use crate::graph::mst::kruskal;
use crate::graph::DistanceGraph;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A city in the plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Identifier as read from the input
    pub id: u64,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(id: u64, x: f64, y: f64) -> Self {
        Point { id, x, y }
    }
}

/// A complete Euclidean TSP instance
///
/// Deserialization goes through [`InstanceData`] so the distance graph is
/// rebuilt from the points.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "InstanceData")]
pub struct Instance {
    /// Name of the instance (file stem when loaded from disk)
    pub name: String,
    /// Points in input order
    pub points: Vec<Point>,
    /// Precomputed rounded distances
    #[serde(skip)]
    pub graph: DistanceGraph,
}

/// Serialized form of an [`Instance`]
#[derive(Debug, Clone, Deserialize)]
pub struct InstanceData {
    pub name: String,
    pub points: Vec<Point>,
}

impl From<InstanceData> for Instance {
    fn from(data: InstanceData) -> Self {
        Instance::new(data.name, data.points)
    }
}

impl Instance {
    /// Build an instance from points; computes the distance graph.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        let graph = DistanceGraph::from_points(&points);
        Instance {
            name: name.into(),
            points,
            graph,
        }
    }

    /// Parse an instance from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(&path)?;
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_reader(name, BufReader::new(file))
    }

    /// Parse `id x y` records. Blank lines are skipped; anything else that is
    /// not exactly three numeric fields is a parse error.
    pub fn from_reader<R: BufRead>(name: impl Into<String>, reader: R) -> Result<Self> {
        let mut points = Vec::new();
        let mut seen = HashSet::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != 3 {
                return Err(TspError::parse(
                    line_no,
                    format!("expected 3 fields `id x y`, found {}", parts.len()),
                ));
            }

            let id: u64 = parts[0]
                .parse()
                .map_err(|_| TspError::parse(line_no, format!("invalid point id `{}`", parts[0])))?;
            let x = parse_coordinate(parts[1], line_no, "x")?;
            let y = parse_coordinate(parts[2], line_no, "y")?;

            if !seen.insert(id) {
                return Err(TspError::DuplicateId { line: line_no, id });
            }

            points.push(Point::new(id, x, y));
        }

        Ok(Self::new(name, points))
    }

    /// Number of points
    #[inline]
    pub fn dimension(&self) -> usize {
        self.points.len()
    }

    /// Rounded distance between points `i` and `j` (indices)
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> u64 {
        self.graph.weight(i, j)
    }

    /// Length of a tour given as indices, including the edge from the last
    /// element back to the first.
    pub fn tour_length(&self, tour: &[usize]) -> u64 {
        if tour.len() < 2 {
            return 0;
        }
        self.graph.path_weight(tour) + self.distance(tour[tour.len() - 1], tour[0])
    }

    /// Map a sequence of indices to the ids read from the input.
    pub fn ids(&self, tour: &[usize]) -> Vec<u64> {
        tour.iter().map(|&i| self.points[i].id).collect()
    }

    /// Get statistics about the instance
    pub fn statistics(&self) -> InstanceStatistics {
        let n = self.dimension();

        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }
        let bounding_box = if n > 0 { Some((min_x, min_y, max_x, max_y)) } else { None };

        let weights: Vec<u64> = self.graph.edges().map(|e| e.weight).collect();
        let min_distance = weights.iter().copied().min().unwrap_or(0);
        let max_distance = weights.iter().copied().max().unwrap_or(0);
        let avg_distance = if weights.is_empty() {
            0.0
        } else {
            weights.iter().sum::<u64>() as f64 / weights.len() as f64
        };

        let tree = kruskal(&self.graph);
        let odd_vertices = tree.degrees(n).iter().filter(|&&d| d % 2 == 1).count();

        InstanceStatistics {
            name: self.name.clone(),
            dimension: n,
            bounding_box,
            min_distance,
            avg_distance,
            max_distance,
            mst_weight: tree.total_weight(),
            odd_vertices,
        }
    }
}

fn parse_coordinate(field: &str, line: usize, axis: &str) -> Result<f64> {
    let value: f64 = field
        .parse()
        .map_err(|_| TspError::parse(line, format!("invalid {} coordinate `{}`", axis, field)))?;
    if !value.is_finite() {
        return Err(TspError::parse(line, format!("non-finite {} coordinate `{}`", axis, field)));
    }
    Ok(value)
}

/// Statistics about an instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceStatistics {
    pub name: String,
    pub dimension: usize,
    /// `(min_x, min_y, max_x, max_y)`
    pub bounding_box: Option<(f64, f64, f64, f64)>,
    pub min_distance: u64,
    pub avg_distance: f64,
    pub max_distance: u64,
    /// Weight of the minimum spanning tree, a lower bound on any tour
    pub mst_weight: u64,
    pub odd_vertices: usize,
}

impl std::fmt::Display for InstanceStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Instance: {}", self.name)?;
        writeln!(f, "  Points: {}", self.dimension)?;
        if let Some((x0, y0, x1, y1)) = self.bounding_box {
            writeln!(f, "  Bounding box: ({:.2}, {:.2}) - ({:.2}, {:.2})", x0, y0, x1, y1)?;
        }
        writeln!(f, "  Min distance: {}", self.min_distance)?;
        writeln!(f, "  Avg distance: {:.2}", self.avg_distance)?;
        writeln!(f, "  Max distance: {}", self.max_distance)?;
        writeln!(f, "  MST weight: {}", self.mst_weight)?;
        writeln!(f, "  Odd-degree vertices: {}", self.odd_vertices)
    }
}
