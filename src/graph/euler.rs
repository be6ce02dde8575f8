//! Eulerian circuit extraction over the MST + matching multigraph.
//!
//! Splice-style Hierholzer: walk from the current position consuming edges,
//! inserting each reached vertex right after the current one, and when stuck
//! move forward to the next walk position that still has unconsumed edges.
//! The walk is an index-linked arena so each splice is O(1), and every vertex
//! keeps a cursor into its incidence list so consumed edges are skipped in
//! amortised O(1).

use super::Edge;
use crate::error::{Result, TspError};

/// Incidence lists over an edge arena, with per-vertex consumption cursors.
struct Adjacency {
    ends: Vec<(usize, usize)>,
    incident: Vec<Vec<usize>>,
    cursor: Vec<usize>,
    used: Vec<bool>,
    remaining: usize,
}

impl Adjacency {
    fn new<'a>(n: usize, edges: impl Iterator<Item = &'a Edge>) -> Self {
        let mut ends = Vec::new();
        let mut incident = vec![Vec::new(); n];

        for e in edges {
            let id = ends.len();
            ends.push((e.u, e.v));
            incident[e.u].push(id);
            incident[e.v].push(id);
        }

        let m = ends.len();
        Adjacency {
            ends,
            incident,
            cursor: vec![0; n],
            used: vec![false; m],
            remaining: m,
        }
    }

    /// Skip consumed edges at the front of `v`'s list.
    fn advance(&mut self, v: usize) {
        let list = &self.incident[v];
        while self.cursor[v] < list.len() && self.used[list[self.cursor[v]]] {
            self.cursor[v] += 1;
        }
    }

    fn has_unconsumed(&mut self, v: usize) -> bool {
        self.advance(v);
        self.cursor[v] < self.incident[v].len()
    }

    /// Consume the first unconsumed edge at `v` and return its other end.
    fn take_next(&mut self, v: usize) -> Option<usize> {
        self.advance(v);
        let id = *self.incident[v].get(self.cursor[v])?;
        self.cursor[v] += 1;
        self.used[id] = true;
        self.remaining -= 1;

        let (a, b) = self.ends[id];
        Some(if a == v { b } else { a })
    }
}

struct WalkNode {
    vertex: usize,
    next: Option<usize>,
}

/// Closed walk over `tree ∪ matching` using every edge exactly once.
///
/// Starts at the first tree edge's `u`. `n` is the vertex count; for `n == 0`
/// the walk is empty and for a single vertex it is `[0]`.
pub fn eulerian_walk(n: usize, tree: &[Edge], matching: &[Edge]) -> Result<Vec<usize>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut adj = Adjacency::new(n, tree.iter().chain(matching.iter()));
    let start = tree.first().or(matching.first()).map_or(0, |e| e.u);

    let mut walk = vec![WalkNode { vertex: start, next: None }];
    let mut pos = Some(0);

    while let Some(p) = pos {
        if adj.remaining == 0 {
            break;
        }

        let mut cur = p;
        while let Some(w) = adj.take_next(walk[cur].vertex) {
            let id = walk.len();
            walk.push(WalkNode { vertex: w, next: walk[cur].next });
            walk[cur].next = Some(id);
            cur = id;
        }

        // positions before p are exhausted; rescan from p over the new splice
        let mut scan = Some(p);
        while let Some(s) = scan {
            if adj.has_unconsumed(walk[s].vertex) {
                break;
            }
            scan = walk[s].next;
        }
        pos = scan;
    }

    if adj.remaining > 0 {
        return Err(TspError::UnconsumedEdges { remaining: adj.remaining });
    }

    let mut vertices = Vec::with_capacity(walk.len());
    let mut node = Some(0);
    while let Some(i) = node {
        vertices.push(walk[i].vertex);
        node = walk[i].next;
    }

    let end = vertices.last().copied().unwrap_or(start);
    if end != start {
        return Err(TspError::OpenWalk { start, end });
    }

    log::debug!("eulerian walk: {} vertices over {} edges", vertices.len(), adj.ends.len());

    Ok(vertices)
}
