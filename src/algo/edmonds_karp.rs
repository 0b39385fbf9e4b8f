use crate::algo::MaxFlow;
use crate::capacity::Capacity;
use crate::error::Error;
use crate::network::FlowNetwork;

/// Ford-Fulkerson with breadth-first augmenting paths, `O(V * E^2)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdmondsKarp;

impl<C: Capacity> MaxFlow<C> for EdmondsKarp {
    type Error = Error;

    fn max_flow(
        &mut self,
        network: &mut FlowNetwork<C>,
        source: usize,
        sink: usize,
    ) -> Result<C, Self::Error> {
        network.check_terminals(source, sink)?;
        network.reset_flows();

        let mut total = C::zero();
        let mut augmentations = 0usize;

        while let Some(path) = network.residual_path(source, sink) {
            let bottleneck = path
                .edges
                .iter()
                .filter_map(|&idx| network.edge(idx))
                .map(|e| e.residual_capacity())
                .min()
                .unwrap_or_else(C::zero);
            // a found path always has at least one arc with positive residual capacity
            if bottleneck <= C::zero() {
                break;
            }

            // the network is only touched once the new total is known to fit
            total = total
                .checked_add(&bottleneck)
                .ok_or(Error::ArithmeticOverflow)?;
            path.edges
                .iter()
                .for_each(|&idx| network.add_flow(idx, bottleneck));
            augmentations += 1;

            log::trace!("augmented {bottleneck} along {:?}", path.vertices);
        }

        log::debug!("max flow {source} -> {sink} = {total} after {augmentations} augmentations");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(net: &FlowNetwork<i64>, source: usize, sink: usize) {
        for idx in 0..net.edge_count() * 2 {
            let e = net.edge(idx).unwrap();
            let r = net.edge(e.reverse()).unwrap();
            assert!(e.residual_capacity() >= 0);
            assert_eq!(e.flow(), -r.flow());
            if e.is_forward() {
                assert!(0 <= e.flow() && e.flow() <= e.capacity());
            }
        }
        for v in (0..net.vertex_count()).filter(|&v| v != source && v != sink) {
            assert_eq!(net.net_outflow(v), 0, "conservation violated at {v}");
        }
    }

    // 0 -10-> 1 -10-> 3, 0 -5-> 2 -10-> 4 -10-> 3, 4 -5-> 1
    fn weighted() -> FlowNetwork<i64> {
        let mut net = FlowNetwork::new(5);
        net.add_edge(0, 1, 10).unwrap();
        net.add_edge(0, 2, 5).unwrap();
        net.add_edge(1, 3, 10).unwrap();
        net.add_edge(2, 4, 10).unwrap();
        net.add_edge(4, 1, 5).unwrap();
        net.add_edge(4, 3, 10).unwrap();
        net
    }

    #[test]
    fn classic_weighted_network() {
        let mut net = weighted();
        assert_eq!(net.max_flow(0, 3), Ok(15));
        assert_invariants(&net, 0, 3);
        assert_eq!(net.net_outflow(0), 15);
        assert_eq!(net.net_outflow(3), -15);
    }

    #[test]
    fn max_flow_is_idempotent() {
        let mut net = weighted();
        let first = net.max_flow(0, 3);
        let second = net.max_flow(0, 3);
        assert_eq!(first, second);
        assert_invariants(&net, 0, 3);
    }

    #[test]
    fn shared_middle_edge_is_not_needed() {
        let mut net = FlowNetwork::<i64>::new(4);
        net.add_unit_edge(0, 1).unwrap();
        net.add_unit_edge(1, 2).unwrap();
        net.add_unit_edge(0, 2).unwrap();
        net.add_unit_edge(2, 3).unwrap();
        net.add_unit_edge(1, 3).unwrap();
        assert_eq!(net.max_flow(0, 3), Ok(2));
        assert_invariants(&net, 0, 3);
    }

    #[test]
    fn flow_needing_cancellation() {
        // 0 -> 1 -> 2 -> 3 is found first and its 1 -> 2 arc has to be cancelled
        let mut net = FlowNetwork::<i64>::new(6);
        net.add_unit_edge(0, 1).unwrap();
        net.add_unit_edge(0, 4).unwrap();
        net.add_unit_edge(1, 2).unwrap();
        net.add_unit_edge(4, 2).unwrap();
        net.add_unit_edge(2, 3).unwrap();
        net.add_unit_edge(1, 5).unwrap();
        net.add_unit_edge(5, 3).unwrap();
        assert_eq!(net.max_flow(0, 3), Ok(2));
        assert_invariants(&net, 0, 3);
    }

    #[test]
    fn disconnected_network_has_zero_flow() {
        let mut net = FlowNetwork::<i64>::new(4);
        net.add_edge(0, 1, 3).unwrap();
        net.add_edge(2, 3, 3).unwrap();
        assert_eq!(net.max_flow(0, 3), Ok(0));
        assert_invariants(&net, 0, 3);
    }

    #[test]
    fn parallel_edges_add_up() {
        let mut net = FlowNetwork::<i64>::new(2);
        net.add_unit_edge(0, 1).unwrap();
        net.add_unit_edge(0, 1).unwrap();
        net.add_edge(0, 1, 3).unwrap();
        assert_eq!(net.max_flow(0, 1), Ok(5));
    }

    #[test]
    fn zero_capacity_edges_carry_nothing() {
        let mut net = FlowNetwork::<i64>::new(2);
        net.add_edge(0, 1, 0).unwrap();
        assert_eq!(net.max_flow(0, 1), Ok(0));
    }

    #[test]
    fn rejects_source_equal_to_sink() {
        let mut net = weighted();
        assert_eq!(net.max_flow(1, 1), Err(Error::SourceIsSink(1)));
    }

    #[test]
    fn overflow_is_reported() {
        let mut net = FlowNetwork::<i32>::new(2);
        let wide = net.add_edge(0, 1, i32::MAX).unwrap();
        let narrow = net.add_edge(0, 1, 1).unwrap();
        assert_eq!(net.max_flow(0, 1), Err(Error::ArithmeticOverflow));

        // the augmentation that would overflow is not applied
        assert_eq!(net.edge(wide).unwrap().flow(), i32::MAX);
        assert_eq!(net.edge(narrow).unwrap().flow(), 0);
        assert_eq!(net.net_outflow(0), i32::MAX);
    }
}
