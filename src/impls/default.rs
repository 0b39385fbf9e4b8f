use std::collections::{BTreeMap, BTreeSet};
use std::marker::PhantomData;
use std::time::Instant;

use itertools::Itertools;

use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::decomposition::{Decomposition, DecompositionPolicy};
use crate::error::Error;
use crate::network::FlowNetwork;
use crate::path::Path;
use crate::PathDecomposer;

#[derive(Clone, Debug)]
pub struct DefaultDecomposer<C, Algo> {
    algo: Algo,
    policy: DecompositionPolicy,
    _phantom: PhantomData<C>,
}

impl<C, Algo> DefaultDecomposer<C, Algo> {
    pub fn new(algo: Algo) -> Self {
        Self::with_policy(algo, DecompositionPolicy::default())
    }

    pub fn with_policy(algo: Algo, policy: DecompositionPolicy) -> Self {
        Self {
            algo,
            policy,
            _phantom: Default::default(),
        }
    }

    pub fn policy(&self) -> DecompositionPolicy {
        self.policy
    }
}

impl<C, Algo> Default for DefaultDecomposer<C, Algo>
where
    Algo: Default,
{
    fn default() -> Self {
        Self::new(Algo::default())
    }
}

fn invalid(msg: String) -> Error {
    Error::InvalidDecomposition(msg)
}

impl<C, Algo> PathDecomposer for DefaultDecomposer<C, Algo>
where
    C: Capacity,
    Algo: MaxFlow<C>,
    Error: From<Algo::Error>,
{
    type Capacity = C;
    type Algo = Algo;
    type Error = Error;

    fn decompose(
        &mut self,
        network: &FlowNetwork<C>,
        source: usize,
        sink: usize,
    ) -> Result<Decomposition<C>, Self::Error> {
        let start = Instant::now();
        network.check_terminals(source, sink)?;

        // unit decrements only make sense when no edge can carry more than one unit
        if self.policy == DecompositionPolicy::UnitCapacity {
            if let Some((_, e)) = network
                .forward_edges()
                .find(|(_, e)| e.capacity() > C::one())
            {
                return Err(Error::NonUnitCapacity {
                    from: e.from(),
                    to: e.to(),
                });
            }
        }

        log::debug!("decompose {source} -> {sink}: cloning network");
        let mut residual = network.structural_copy();

        log::debug!("decompose {source} -> {sink}: computing max flow");
        let max_flow = self.algo.max_flow(&mut residual, source, sink)?;

        let mut paths = Vec::new();
        let mut carried = C::zero();
        while carried < max_flow {
            log::debug!("decompose {source} -> {sink}: extracting path #{}", paths.len() + 1);
            let Some(found) = residual.flow_path(source, sink) else {
                log::debug!("no flow-carrying path left, stopping early");
                break;
            };

            let amount = match self.policy {
                DecompositionPolicy::UnitCapacity => C::one(),
                DecompositionPolicy::Bottleneck => found
                    .edges
                    .iter()
                    .filter_map(|&idx| residual.edge(idx))
                    .map(|e| e.flow())
                    .min()
                    .unwrap_or_else(C::zero),
            };
            found
                .edges
                .iter()
                .for_each(|&idx| residual.add_flow(idx, -amount));
            carried += amount;

            let path = Path::new(found.vertices, found.edges, amount);
            log::trace!("path #{}: {path} (flow {amount})", paths.len() + 1);
            paths.push(path);
        }

        let elapsed = start.elapsed();
        log::info!(
            "found {} paths from {source} to {sink} (max flow {max_flow}) in {} ms",
            paths.len(),
            elapsed.as_millis()
        );

        Ok(Decomposition {
            source,
            sink,
            policy: self.policy,
            max_flow,
            paths,
            elapsed,
        })
    }

    fn check(
        &self,
        network: &FlowNetwork<C>,
        decomposition: &Decomposition<C>,
    ) -> Result<(), Self::Error> {
        let (source, sink) = (decomposition.source(), decomposition.sink());

        let carried: C = decomposition.paths().iter().map(Path::flow).sum();
        if carried > decomposition.max_flow() {
            return Err(invalid(format!(
                "paths carry {carried}, more than the max flow {}",
                decomposition.max_flow()
            )));
        }

        let mut load = BTreeMap::<usize, C>::new();
        for (n, path) in decomposition.paths().iter().enumerate() {
            let vertices = path.vertices();
            if vertices.first() != Some(&source) || vertices.last() != Some(&sink) {
                return Err(invalid(format!("path #{n} does not join {source} to {sink}")));
            }
            if path.edges().len() + 1 != vertices.len() {
                return Err(invalid(format!("path #{n} has mismatched vertices and edges")));
            }
            if path.flow() <= C::zero() {
                return Err(invalid(format!("path #{n} carries no flow")));
            }

            for ((u, v), &idx) in vertices.iter().tuple_windows().zip(path.edges()) {
                match network.edge(idx) {
                    Some(e) if e.is_forward() && e.from() == *u && e.to() == *v => {}
                    _ => {
                        return Err(invalid(format!(
                            "path #{n} uses edge #{idx} which is not a {u} -> {v} edge"
                        )))
                    }
                }
                *load.entry(idx).or_default() += path.flow();
            }
        }

        if let Some((idx, used)) = load.iter().find(|(idx, used)| {
            network
                .edge(**idx)
                .map_or(true, |e| **used > e.capacity())
        }) {
            return Err(invalid(format!(
                "edge #{idx} carries {used}, more than its capacity"
            )));
        }

        if decomposition.policy() == DecompositionPolicy::UnitCapacity {
            let mut seen = BTreeSet::new();
            for idx in decomposition.paths().iter().flat_map(Path::edges) {
                if !seen.insert(*idx) {
                    return Err(invalid(format!("edge #{idx} is shared by several paths")));
                }
            }
        }

        log::debug!(
            "checked {} paths over {} edges",
            decomposition.path_count(),
            load.len()
        );
        Ok(())
    }
}
