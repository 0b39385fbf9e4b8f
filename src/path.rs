use core::fmt;

use itertools::Itertools;

use crate::algo::FlowPath;
use crate::network::EdgeIndex;

/// A source-to-sink path extracted from a flow, with the arcs it consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<C> {
    vertices: Vec<usize>,
    edges: Vec<EdgeIndex>,
    flow: C,
}

impl<C: Copy> Path<C> {
    pub(crate) fn new(vertices: Vec<usize>, edges: Vec<EdgeIndex>, flow: C) -> Self {
        Self {
            vertices,
            edges,
            flow,
        }
    }

    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Arena indices of the forward edges used, in path order.
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Amount of flow this path accounts for.
    pub fn flow(&self) -> C {
        self.flow
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<C: Copy> FlowPath for Path<C> {
    type Node = usize;
    type Flow = C;
    type Iter = Vec<usize>;

    fn nodes(&self) -> Self::Iter {
        self.vertices.clone()
    }

    fn flow(&self) -> Self::Flow {
        self.flow
    }
}

impl<C> fmt::Display for Path<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" -> "))
    }
}
