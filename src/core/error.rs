use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("vertex does not exist")]
pub struct VertexNotFound;

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<W> {
    pub weight: W,
    pub kind: AddEdgeErrorKind,
}

impl<W> AddEdgeError<W> {
    pub fn new(weight: W, kind: AddEdgeErrorKind) -> Self {
        Self { weight, kind }
    }

    /// Returns `true` if the edge was rejected because one of its endpoints is
    /// not in the graph.
    pub fn is_vertex_not_found(&self) -> bool {
        matches!(
            self.kind,
            AddEdgeErrorKind::SourceAbsent | AddEdgeErrorKind::DestinationAbsent
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    InvalidWeight,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::InvalidWeight => "the weight is reserved for absent edges",
        };
        f.write_str(reason)
    }
}

