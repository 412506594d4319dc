//! Graph error types
//!
//! Only caller-contract violations are errors. "No Eulerian path", "no
//! Hamiltonian cycle" and unreachable nodes are ordinary return values.

use thiserror::Error;

use crate::node::NodeId;
use crate::Weight;

/// Graph error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node not found in this graph: {0}")]
    NodeNotFound(NodeId),

    #[error("no node labeled '{0}'")]
    UnknownLabel(String),

    #[error("edge weight must be finite, got {0}")]
    InvalidWeight(Weight),

    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    #[error("operation requires a non-empty graph")]
    EmptyGraph,

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: Weight,
    },

    #[error("distance to {node} exceeds the representable range")]
    DistanceOverflow { node: NodeId },
}

impl GraphError {
    pub const fn node_not_found(id: NodeId) -> Self {
        Self::NodeNotFound(id)
    }

    pub fn unknown_label(label: impl Into<String>) -> Self {
        Self::UnknownLabel(label.into())
    }

    pub const fn invalid_weight(weight: Weight) -> Self {
        Self::InvalidWeight(weight)
    }

    pub fn invalid_position(reason: impl Into<String>) -> Self {
        Self::InvalidPosition {
            reason: reason.into(),
        }
    }

    pub const fn negative_weight(from: NodeId, to: NodeId, weight: Weight) -> Self {
        Self::NegativeWeight { from, to, weight }
    }

    pub const fn distance_overflow(node: NodeId) -> Self {
        Self::DistanceOverflow { node }
    }
}

/// Result type for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;
