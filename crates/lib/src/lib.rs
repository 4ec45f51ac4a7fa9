//!
//! Pathwise: path-addressed navigation of loosely-structured nested data.
//! This library reads and writes deeply nested maps and lists through delimited
//! path expressions such as `"users.0.address.city"`.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The data being navigated. A tree of [`Map`]s, [`List`]s and scalar leaves, with one variant per numeric primitive.
//! * **Qualifiers (`qualifier::Qualifier`)**: Parsed, replayable paths. Segments are split on a delimiter (default `.`) with `\` as the escape character.
//!     * **CompiledQualifier**: Parses the whole path up front. Best for paths reused many times.
//!     * **LazyQualifier**: Scans the path one segment at a time. Best for one-off paths.
//! * **Sources (`source::Source`)**: Segment-level access to one container. Maps and lists are sources, and custom containers can implement the trait.
//! * **Navigators (`navigator::Navigator`)**: Walk a borrowed root source with a qualifier, creating missing intermediate maps on write.
//! * **Values (`value::Value`)**: Typed access to a lookup result with default fallback and lossless numeric coercion.
//!
//! ```
//! use pathwise::{CompiledQualifier, Navigator, Node};
//!
//! let mut root = Node::from_json_str(r#"{"users": [{"name": "Ada", "age": 36}]}"#)?;
//! let mut nav = Navigator::from_node(&mut root).expect("object root");
//!
//! assert_eq!(nav.get("users.0.name").string(None), "Ada");
//! assert_eq!(nav.get("users.-1.age").u8(None), 36);
//!
//! let mut city = CompiledQualifier::new("users.0.address.city")?;
//! assert!(nav.set_by(&mut city, "London"));
//! assert_eq!(nav.query(&mut city).string(None), "London");
//! # Ok::<(), pathwise::Error>(())
//! ```

pub mod constants;
pub mod navigator;
pub mod node;
pub mod qualifier;
pub mod source;
pub mod value;

pub use navigator::{Navigator, NavigatorError};
pub use node::{List, Map, Node, NodeError, NodeKind};
pub use qualifier::{CompiledQualifier, LazyQualifier, Qualifier, QualifierError};
pub use source::Source;
pub use value::{Numeric, Value};

/// Result type used throughout the Pathwise library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Pathwise library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "json")]
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured qualifier errors from the qualifier module
    #[error(transparent)]
    Qualifier(qualifier::QualifierError),

    /// Structured navigation errors from the navigator module
    #[error(transparent)]
    Navigator(navigator::NavigatorError),

    /// Structured conversion errors from the node module
    #[error(transparent)]
    Node(node::NodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Qualifier(_) => "qualifier",
            Error::Navigator(_) => "navigator",
            Error::Node(_) => "node",
            #[cfg(feature = "json")]
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a path did not resolve.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Navigator(nav_err) => nav_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is a shape or numeric conversion failure.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Node(node_err) => node_err.is_type_error() || node_err.is_lossy(),
            _ => false,
        }
    }

    /// Check if this error comes from building a qualifier.
    pub fn is_qualifier_error(&self) -> bool {
        matches!(self, Error::Qualifier(_))
    }
}
