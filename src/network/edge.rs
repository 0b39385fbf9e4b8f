use crate::capacity::Capacity;

/// Position of an edge in the network's edge arena.
pub type EdgeIndex = usize;

/// A directed arc of a flow network.
///
/// Every edge registered by a caller lives at an even arena index and its residual partner at the
/// following odd index; `reverse` links the two in both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<C> {
    from: usize,
    to: usize,
    capacity: C,
    flow: C,
    reverse: EdgeIndex,
}

impl<C: Capacity> Edge<C> {
    pub(crate) fn new(from: usize, to: usize, capacity: C, reverse: EdgeIndex) -> Self {
        Self {
            from,
            to,
            capacity,
            flow: C::zero(),
            reverse,
        }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn capacity(&self) -> C {
        self.capacity
    }

    pub fn flow(&self) -> C {
        self.flow
    }

    pub fn reverse(&self) -> EdgeIndex {
        self.reverse
    }

    /// Remaining capacity available for additional flow.
    pub fn residual_capacity(&self) -> C {
        self.capacity - self.flow
    }

    /// Whether this edge was registered by a caller rather than synthesized as a residual arc.
    pub fn is_forward(&self) -> bool {
        self.reverse % 2 == 1
    }

    pub(crate) fn shift_flow(&mut self, amount: C) {
        self.flow += amount;
    }

    pub(crate) fn reset_flow(&mut self) {
        self.flow = C::zero();
    }
}
