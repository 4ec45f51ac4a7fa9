//! Error types for node conversions.

use thiserror::Error;

use super::NodeKind;

/// Errors produced when reading a node as a concrete Rust type.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// The node holds a different shape than the one requested
    #[error("Node type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: NodeKind, actual: NodeKind },

    /// The numeric value cannot be represented in the requested type without loss
    #[error("Lossy numeric conversion from {actual} to {expected}")]
    LossyConversion { expected: NodeKind, actual: NodeKind },

    /// The node has no representation in the target format
    #[error("Node of type {kind} cannot be converted: {reason}")]
    Unrepresentable { kind: NodeKind, reason: String },
}

impl NodeError {
    /// Check if this error is a plain shape mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, NodeError::TypeMismatch { .. })
    }

    /// Check if this error is a rejected numeric conversion
    pub fn is_lossy(&self) -> bool {
        matches!(self, NodeError::LossyConversion { .. })
    }

    /// The kind that was requested, where applicable
    pub fn expected(&self) -> Option<NodeKind> {
        match self {
            NodeError::TypeMismatch { expected, .. }
            | NodeError::LossyConversion { expected, .. } => Some(*expected),
            NodeError::Unrepresentable { .. } => None,
        }
    }
}

// Conversion from NodeError to the main Error type
impl From<NodeError> for crate::Error {
    fn from(err: NodeError) -> Self {
        crate::Error::Node(err)
    }
}
