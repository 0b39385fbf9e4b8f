#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod algo;
pub mod capacity;
pub mod decomposition;
pub mod error;
pub mod impls;
pub mod io;
pub mod network;
pub mod path;

pub use algo::edmonds_karp::EdmondsKarp;
pub use algo::{FlowPath, MaxFlow};
pub use capacity::Capacity;
pub use decomposition::{Decomposition, DecompositionPolicy};
pub use error::Error;
pub use impls::default::DefaultDecomposer;
pub use network::{AugmentingPath, Edge, EdgeIndex, FlowNetwork};
pub use path::Path;

/// Extraction of source-to-sink paths from a maximum flow.
pub trait PathDecomposer {
    type Capacity;
    type Algo;
    type Error;

    /// Compute the maximum flow on a private copy of `network` and peel it into paths.
    ///
    /// `network` itself is never modified.
    fn decompose(
        &mut self,
        network: &FlowNetwork<Self::Capacity>,
        source: usize,
        sink: usize,
    ) -> Result<Decomposition<Self::Capacity>, Self::Error>;

    /// Verify a decomposition of `network` obtained from `decompose`.
    fn check(
        &self,
        network: &FlowNetwork<Self::Capacity>,
        decomposition: &Decomposition<Self::Capacity>,
    ) -> Result<(), Self::Error>;
}

/// Edge-disjoint paths between `source` and `sink` of a unit-capacity network.
pub fn edge_disjoint_paths<C: Capacity>(
    network: &FlowNetwork<C>,
    source: usize,
    sink: usize,
) -> Result<Decomposition<C>, Error> {
    DefaultDecomposer::new(EdmondsKarp).decompose(network, source, sink)
}
