use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid vertex {vertex}, expected an index below {vertex_count}
    InvalidVertex { vertex: usize, vertex_count: usize },
    /// Source and sink are the same vertex ({0})
    SourceIsSink(usize),
    /// Invalid capacity on edge {from} -> {to}, expected non-negative value
    NegativeCapacity { from: usize, to: usize },
    /// Edge {from} -> {to} is not unit-capacity, unit decomposition is undefined on it
    NonUnitCapacity { from: usize, to: usize },
    /// Arithmetic overflow while accumulating flow
    ArithmeticOverflow,
    /// Decomposition failed verification: {0}
    InvalidDecomposition(String),
}

impl std::error::Error for Error {}
