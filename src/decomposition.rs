use core::time::Duration;

use crate::path::Path;

/// How much flow each extracted path removes from the arcs it uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecompositionPolicy {
    /// Remove one unit per path. Only meaningful when every edge has capacity 0 or 1, in which
    /// case the extracted paths are edge-disjoint; other networks are rejected.
    #[default]
    UnitCapacity,
    /// Remove the smallest flow found along the path (general flow decomposition). Paths may then
    /// share edges whose capacity exceeds one.
    Bottleneck,
}

/// Result of decomposing a maximum flow into source-to-sink paths.
#[derive(Clone, Debug)]
pub struct Decomposition<C> {
    pub(crate) source: usize,
    pub(crate) sink: usize,
    pub(crate) policy: DecompositionPolicy,
    pub(crate) max_flow: C,
    pub(crate) paths: Vec<Path<C>>,
    pub(crate) elapsed: Duration,
}

impl<C: Copy> Decomposition<C> {
    pub fn source(&self) -> usize {
        self.source
    }

    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn policy(&self) -> DecompositionPolicy {
        self.policy
    }

    /// Value of the maximum flow the paths were extracted from.
    pub fn max_flow(&self) -> C {
        self.max_flow
    }

    pub fn paths(&self) -> &[Path<C>] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path<C>> {
        self.paths
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Wall time of the whole decomposition, copy and max-flow included.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}
