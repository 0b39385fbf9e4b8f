//! Plain-text edge lists and CSV export of extracted paths.
//!
//! An edge list holds the vertex count on its first line, then one edge per line as
//! `from to` or `from to capacity`. Blank lines and lines starting with `#` are skipped.

use displaydoc::Display;

pub use edge_list::{read_graph, read_graph_file, write_graph, write_graph_file};
pub use export::{write_paths, write_paths_file, PathRecord};

mod edge_list;
mod export;

#[derive(Debug, Display)]
pub enum Error {
    /// I/O error: {0}
    Io(std::io::Error),
    /// CSV error: {0}
    Csv(csv::Error),
    /// Missing vertex count, expected it on the first line
    MissingVertexCount,
    /// Line {line}: cannot parse `{token}`
    Parse { line: usize, token: String },
    /// Line {line}: cannot allocate a network of {count} vertices
    TooManyVertices {
        line: usize,
        count: usize,
        inner: std::collections::TryReserveError,
    },
    /// Line {line}: vertex 0 does not exist in a one-based edge list
    ZeroVertex { line: usize },
    /// Line {line}: {inner}
    Network { line: usize, inner: crate::error::Error },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Network { inner, .. } => Some(inner),
            Self::TooManyVertices { inner, .. } => Some(inner),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e)
    }
}

/// Numbering used for vertices in text files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Indexing {
    /// Vertices are written as they are stored, `0..n`.
    #[default]
    ZeroBased,
    /// Vertices are written as `1..=n`.
    OneBased,
}

impl Indexing {
    pub(crate) fn to_internal(self, vertex: usize, line: usize) -> Result<usize, Error> {
        match self {
            Self::ZeroBased => Ok(vertex),
            Self::OneBased => vertex.checked_sub(1).ok_or(Error::ZeroVertex { line }),
        }
    }

    pub(crate) fn to_external(self, vertex: usize) -> usize {
        match self {
            Self::ZeroBased => vertex,
            Self::OneBased => vertex + 1,
        }
    }
}
