use crate::network::FlowNetwork;

pub mod edmonds_karp;

pub trait FlowPath {
    type Node;
    type Flow;
    type Iter: IntoIterator<Item = Self::Node>;

    fn nodes(&self) -> Self::Iter;
    fn flow(&self) -> Self::Flow;
}

/// A maximum flow algorithm operating in place on a residual network.
pub trait MaxFlow<C> {
    type Error;

    /// Run the algorithm and return the total `source -> sink` flow. The per-edge flow is left in
    /// `network` for later inspection or decomposition.
    fn max_flow(
        &mut self,
        network: &mut FlowNetwork<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Self::Error>;
}
