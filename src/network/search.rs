use std::collections::VecDeque;

use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::{EdgeIndex, FlowNetwork};

/// A source-to-sink path through the network: the visited vertices and the arcs joining them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AugmentingPath {
    pub vertices: Vec<usize>,
    pub edges: Vec<EdgeIndex>,
}

/// Per-search state of the breadth-first search. A fresh one is built for every search so no
/// traversal state outlives the call that owns it.
struct BfsContext {
    // parent vertex and the arc used to reach each discovered vertex
    parent: Vec<Option<(usize, EdgeIndex)>>,
    discovered: Vec<bool>,
    queue: VecDeque<usize>,
}

impl BfsContext {
    fn new(vertex_count: usize) -> Self {
        Self {
            parent: vec![None; vertex_count],
            discovered: vec![false; vertex_count],
            queue: VecDeque::new(),
        }
    }

    fn trace_back(&self, source: usize, sink: usize) -> AugmentingPath {
        let mut vertices = vec![sink];
        let mut edges = Vec::new();
        let mut current = sink;
        while current != source {
            // every vertex on the chain except the source has been discovered through an arc
            let Some((prev, edge)) = self.parent[current] else {
                break;
            };
            edges.push(edge);
            vertices.push(prev);
            current = prev;
        }
        vertices.reverse();
        edges.reverse();
        AugmentingPath { vertices, edges }
    }
}

/// Per-search state of the depth-first search over flow-carrying arcs.
struct DfsContext {
    visited: Vec<bool>,
    // (vertex, arc used to enter it, position of the next adjacency entry to try)
    stack: Vec<(usize, Option<EdgeIndex>, usize)>,
}

impl DfsContext {
    fn new(vertex_count: usize) -> Self {
        Self {
            visited: vec![false; vertex_count],
            stack: Vec::new(),
        }
    }

    fn path(&self) -> AugmentingPath {
        AugmentingPath {
            vertices: self.stack.iter().map(|(v, _, _)| *v).collect(),
            edges: self.stack.iter().filter_map(|(_, e, _)| *e).collect(),
        }
    }
}

impl<C: Capacity> FlowNetwork<C> {
    /// Looks for a shortest `source -> sink` path in the residual network.
    ///
    /// Neighbours are explored in insertion order and the first discovery of a vertex wins, so the
    /// path found among several of equal length is deterministic. Returns `Ok(None)` when the sink
    /// is unreachable.
    pub fn find_augmenting_path(
        &self,
        source: usize,
        sink: usize,
    ) -> Result<Option<Vec<usize>>, Error> {
        self.check_terminals(source, sink)?;
        Ok(self
            .residual_path(source, sink)
            .map(|path| path.vertices))
    }

    /// BFS over arcs with positive residual capacity, stopping as soon as `sink` is discovered.
    pub(crate) fn residual_path(&self, source: usize, sink: usize) -> Option<AugmentingPath> {
        let mut ctx = BfsContext::new(self.vertex_count());
        ctx.discovered[source] = true;
        ctx.queue.push_back(source);

        while let Some(u) = ctx.queue.pop_front() {
            for (idx, edge) in self.edges_from(u) {
                let v = edge.to();
                if ctx.discovered[v] || edge.residual_capacity() <= C::zero() {
                    continue;
                }
                ctx.discovered[v] = true;
                ctx.parent[v] = Some((u, idx));
                if v == sink {
                    return Some(ctx.trace_back(source, sink));
                }
                ctx.queue.push_back(v);
            }
        }
        None
    }

    /// DFS over arcs currently carrying positive flow.
    ///
    /// A vertex is visited at most once per search, which keeps the search linear and the
    /// resulting path simple. Neighbours are tried in insertion order.
    pub(crate) fn flow_path(&self, source: usize, sink: usize) -> Option<AugmentingPath> {
        let mut ctx = DfsContext::new(self.vertex_count());
        ctx.visited[source] = true;
        ctx.stack.push((source, None, 0));

        while let Some(&(u, _, cursor)) = ctx.stack.last() {
            if u == sink {
                return Some(ctx.path());
            }

            let next = self.adjacency[u][cursor..]
                .iter()
                .position(|&idx| {
                    let edge = &self.edges[idx];
                    !ctx.visited[edge.to()] && edge.flow() > C::zero()
                })
                .map(|offset| cursor + offset);

            match next {
                Some(pos) => {
                    let top = ctx.stack.len() - 1;
                    ctx.stack[top].2 = pos + 1;
                    let idx = self.adjacency[u][pos];
                    let v = self.edges[idx].to();
                    ctx.visited[v] = true;
                    ctx.stack.push((v, Some(idx), 0));
                }
                None => {
                    ctx.stack.pop();
                }
            }
        }
        None
    }
}
