use std::collections::TryReserveError;

use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};

use crate::algo::edmonds_karp::EdmondsKarp;
use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::error::Error;

pub use edge::{Edge, EdgeIndex};
pub use search::AugmentingPath;

mod edge;
pub(crate) mod search;

/// A directed graph with per-edge capacities and a residual arc for every edge.
///
/// Vertices are the indices `0..vertex_count`. Edges are kept in a flat arena and every vertex
/// holds the arena indices of its outgoing arcs (residual ones included) in insertion order, which
/// fixes the order in which searches visit neighbours.
#[derive(Clone, Debug)]
pub struct FlowNetwork<C> {
    vertex_count: usize,
    edges: Vec<Edge<C>>,
    adjacency: Vec<Vec<EdgeIndex>>,
}

impl<C: Capacity> FlowNetwork<C> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Like [`FlowNetwork::new`], but reports a vertex count whose adjacency lists cannot be
    /// allocated instead of aborting.
    pub fn try_new(vertex_count: usize) -> Result<Self, TryReserveError> {
        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(vertex_count)?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
            adjacency,
        })
    }

    /// Builds a network from a `petgraph` graph, interpreting edge weights as capacities.
    ///
    /// Vertex indices follow `NodeIndexable::to_index`, so graphs with holes in their index space
    /// produce isolated vertices.
    pub fn from_graph<G>(g: G) -> Result<Self, Error>
    where
        G: IntoEdgeReferences + NodeIndexable,
        G::EdgeWeight: Copy + Into<C>,
    {
        let mut network = Self::new(g.node_bound());
        for e in g.edge_references() {
            network.add_edge(
                g.to_index(e.source()),
                g.to_index(e.target()),
                (*e.weight()).into(),
            )?;
        }
        Ok(network)
    }

    /// Registers the edge `from -> to` together with its zero-capacity residual partner and
    /// returns the arena index of the forward edge.
    ///
    /// Registering the same pair again adds another, independent, parallel edge.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: C) -> Result<EdgeIndex, Error> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if capacity < C::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }

        let forward = self.edges.len();
        let reverse = forward + 1;
        self.edges.push(Edge::new(from, to, capacity, reverse));
        self.edges.push(Edge::new(to, from, C::zero(), forward));
        self.adjacency[from].push(forward);
        self.adjacency[to].push(reverse);

        log::trace!("edge #{forward}: {from} -> {to} (capacity {capacity})");
        Ok(forward)
    }

    /// Registers a unit-capacity edge, the building block of disjoint-path problems.
    pub fn add_unit_edge(&mut self, from: usize, to: usize) -> Result<EdgeIndex, Error> {
        self.add_edge(from, to, C::one())
    }

    /// Computes the maximum `source -> sink` flow with Edmonds-Karp, leaving the flow in place.
    ///
    /// Any flow left by a previous run is discarded first, so repeated calls agree.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> Result<C, Error> {
        EdmondsKarp.max_flow(self, source, sink)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of caller-registered edges (residual arcs are not counted).
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge<C>> {
        self.edges.get(index)
    }

    /// Outgoing arcs of `vertex`, residual ones included, in insertion order.
    pub fn edges_from(&self, vertex: usize) -> impl Iterator<Item = (EdgeIndex, &Edge<C>)> + '_ {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(move |&idx| (idx, &self.edges[idx]))
    }

    /// Caller-registered edges in registration order.
    pub fn forward_edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge<C>)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_forward())
    }

    /// Flow leaving `vertex` minus flow entering it, over forward edges.
    pub fn net_outflow(&self, vertex: usize) -> C {
        self.forward_edges()
            .fold(C::zero(), |mut acc, (_, e)| {
                if e.from() == vertex {
                    acc += e.flow();
                }
                if e.to() == vertex {
                    acc -= e.flow();
                }
                acc
            })
    }

    /// A copy with the same vertices and forward edges (in the same order) and no flow.
    pub fn structural_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset_flows();
        copy
    }

    /// Pushes `amount` units along `index` and takes them back from its residual partner.
    ///
    /// No bounds are checked: callers pick `amount` so that `0 <= flow <= capacity` keeps holding
    /// on forward edges.
    pub(crate) fn add_flow(&mut self, index: EdgeIndex, amount: C) {
        let reverse = self.edges[index].reverse();
        self.edges[index].shift_flow(amount);
        self.edges[reverse].shift_flow(-amount);
    }

    pub(crate) fn reset_flows(&mut self) {
        self.edges.iter_mut().for_each(Edge::reset_flow);
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), Error> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    pub(crate) fn check_terminals(&self, source: usize, sink: usize) -> Result<(), Error> {
        self.check_vertex(source)?;
        self.check_vertex(sink)?;
        if source == sink {
            return Err(Error::SourceIsSink(source));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_reports_unallocatable_vertex_count() {
        assert!(FlowNetwork::<i32>::try_new(usize::MAX).is_err());

        let net = FlowNetwork::<i32>::try_new(3).unwrap();
        assert_eq!(net.vertex_count(), 3);
        assert_eq!(net.edges_from(2).count(), 0);
    }

    #[test]
    fn add_edge_creates_linked_pair() {
        let mut net = FlowNetwork::<i32>::new(2);
        let idx = net.add_edge(0, 1, 4).unwrap();

        let forward = net.edge(idx).unwrap();
        let reverse = net.edge(forward.reverse()).unwrap();
        assert_eq!((forward.from(), forward.to(), forward.capacity()), (0, 1, 4));
        assert_eq!((reverse.from(), reverse.to(), reverse.capacity()), (1, 0, 0));
        assert_eq!(reverse.reverse(), idx);
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn invalid_vertex_leaves_network_untouched() {
        let mut net = FlowNetwork::<i32>::new(3);
        net.add_unit_edge(0, 1).unwrap();

        assert_eq!(
            net.add_unit_edge(1, 3),
            Err(Error::InvalidVertex {
                vertex: 3,
                vertex_count: 3
            })
        );
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.edges_from(1).count(), 1);
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let mut net = FlowNetwork::<i64>::new(2);
        assert_eq!(
            net.add_edge(0, 1, -1),
            Err(Error::NegativeCapacity { from: 0, to: 1 })
        );
        assert_eq!(net.edge_count(), 0);
    }

    #[test]
    fn parallel_edges_are_not_merged() {
        let mut net = FlowNetwork::<i32>::new(2);
        let a = net.add_unit_edge(0, 1).unwrap();
        let b = net.add_unit_edge(0, 1).unwrap();

        assert_ne!(a, b);
        assert_eq!(net.edge(b).unwrap().capacity(), 1);
        let out: Vec<_> = net.edges_from(0).map(|(idx, _)| idx).collect();
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn add_flow_keeps_reverse_symmetric() {
        let mut net = FlowNetwork::<i32>::new(2);
        let idx = net.add_edge(0, 1, 5).unwrap();
        net.add_flow(idx, 3);

        let forward = net.edge(idx).unwrap();
        let reverse = net.edge(forward.reverse()).unwrap();
        assert_eq!(forward.flow(), 3);
        assert_eq!(reverse.flow(), -3);
        assert_eq!(reverse.residual_capacity(), 3);
    }

    #[test]
    fn structural_copy_drops_flow() {
        let mut net = FlowNetwork::<i32>::new(3);
        net.add_edge(0, 1, 2).unwrap();
        net.add_edge(1, 2, 2).unwrap();
        assert_eq!(net.max_flow(0, 2), Ok(2));

        let copy = net.structural_copy();
        assert_eq!(copy.edge_count(), 2);
        assert!(copy.forward_edges().all(|(_, e)| e.flow() == 0));
        // the original keeps its flow
        assert!(net.forward_edges().all(|(_, e)| e.flow() == 2));
    }

    #[test]
    fn from_petgraph() {
        let mut g = petgraph::Graph::<(), i32>::new();
        let a = g.add_node(());
        let b = g.add_node(());
        let c = g.add_node(());
        g.add_edge(a, b, 3);
        g.add_edge(b, c, 2);
        g.add_edge(a, c, 1);

        let mut net = FlowNetwork::<i64>::from_graph(&g).unwrap();
        assert_eq!(net.vertex_count(), 3);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.max_flow(0, 2), Ok(3));
    }

    #[test]
    fn terminals_are_validated() {
        let net = FlowNetwork::<i32>::new(2);
        assert_eq!(net.check_terminals(1, 1), Err(Error::SourceIsSink(1)));
        assert!(matches!(
            net.check_terminals(0, 2),
            Err(Error::InvalidVertex { vertex: 2, .. })
        ));
        assert_eq!(net.check_terminals(0, 1), Ok(()));
    }
}
