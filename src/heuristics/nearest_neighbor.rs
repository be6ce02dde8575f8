use super::TourHeuristic;
use crate::error::Result;
use crate::instance::Instance;
use crate::solution::Solution;

/// Nearest Neighbor Heuristic
///
/// Builds a tour by repeatedly visiting the nearest unvisited point, lowest
/// index first on ties. Used as a baseline next to the Christofides tour.
pub struct NearestNeighborHeuristic {
    pub start: usize,
}

impl NearestNeighborHeuristic {
    pub fn new() -> Self {
        NearestNeighborHeuristic { start: 0 }
    }

    fn find_nearest(&self, instance: &Instance, current: usize, visited: &[bool]) -> Option<usize> {
        (0..instance.dimension())
            .filter(|&n| !visited[n])
            .min_by_key(|&n| (instance.distance(current, n), n))
    }
}

impl Default for NearestNeighborHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl TourHeuristic for NearestNeighborHeuristic {
    fn solve(&self, instance: &Instance) -> Result<Solution> {
        let start = std::time::Instant::now();
        let n = instance.dimension();

        if n == 0 {
            return Ok(Solution::from_tour(instance, Vec::new(), 0, 0, self.name()));
        }

        let first = self.start.min(n - 1);
        let mut tour = vec![first];
        let mut visited = vec![false; n];
        visited[first] = true;

        let mut current = first;
        while let Some(next) = self.find_nearest(instance, current, &visited) {
            tour.push(next);
            visited[next] = true;
            current = next;
        }

        let open_length = instance.graph.path_weight(&tour);
        let length = instance.tour_length(&tour);
        tour.push(first);

        let mut solution = Solution::from_tour(instance, tour, length, open_length, self.name());
        solution.computation_time = start.elapsed().as_secs_f64();
        Ok(solution)
    }

    fn name(&self) -> &str {
        "NearestNeighbor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Point;

    #[test]
    fn test_nearest_neighbor() {
        let instance = Instance::new(
            "test",
            vec![
                Point::new(0, 0.0, 0.0),
                Point::new(1, 5.0, 0.0),
                Point::new(2, 1.0, 0.0),
                Point::new(3, 2.0, 0.0),
            ],
        );
        let solution = NearestNeighborHeuristic::new().solve(&instance).unwrap();

        assert_eq!(solution.tour, vec![0, 2, 3, 1, 0]);
        assert_eq!(solution.open_length, 5);
        assert_eq!(solution.length, 10);
        assert!(solution.is_complete(&instance));
    }

    #[test]
    fn test_single_point() {
        let instance = Instance::new("one", vec![Point::new(4, 1.0, 1.0)]);
        let solution = NearestNeighborHeuristic::new().solve(&instance).unwrap();
        assert_eq!(solution.tour, vec![0, 0]);
        assert_eq!(solution.ids, vec![4, 4]);
        assert_eq!(solution.length, 0);
    }
}
