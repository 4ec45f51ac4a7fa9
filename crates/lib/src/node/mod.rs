//! The loosely-structured data navigated by this crate.
//!
//! A [`Node`] is one value in a tree built from two generic containers: the
//! ordered [`List`] and the string-keyed [`Map`]. Leaves cover the common
//! scalar shapes, with one variant per concrete numeric type so that typed
//! access can tell an `i8` from an `f64`.
//!
//! ```
//! use pathwise::{Map, Node};
//!
//! let mut user = Map::new();
//! user.insert("name".to_string(), Node::from("Alice"));
//! user.insert("tags".to_string(), Node::list(["admin", "ops"]));
//!
//! let node = Node::Map(user);
//! assert_eq!(node.kind().name(), "map");
//! assert_eq!(node.len(), Some(2));
//! ```

use std::{collections::HashMap, fmt};

use num_complex::{Complex32, Complex64};

use crate::source::{Source, source_of, source_of_mut};

pub mod errors;
#[cfg(feature = "json")]
mod json;

pub use errors::NodeError;

/// The sequence container.
pub type List = Vec<Node>;

/// The mapping container. Iteration order is unspecified.
pub type Map = HashMap<String, Node>;

/// A value in a nested structure.
///
/// # Value Types
///
/// ## Leaves
/// - [`Node::Null`], [`Node::Bool`], [`Node::Text`], [`Node::Bytes`]
/// - one variant per numeric primitive, from [`Node::I8`] to [`Node::F64`]
/// - [`Node::Complex64`] and [`Node::Complex128`]
///
/// ## Containers
/// - [`Node::List`] and [`Node::Map`]
/// - [`Node::Source`], a custom container implementing [`Source`]
///
/// Comparisons against primitives match the exact variant only:
///
/// ```
/// # use pathwise::Node;
/// assert!(Node::I64(42) == 42i64);
/// assert!(Node::from("hello") == "hello");
/// assert!(!(Node::I32(42) == 42i64));
/// ```
#[derive(Debug)]
pub enum Node {
    /// Null/empty value
    Null,
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    /// Complex number with `f32` parts
    Complex64(Complex32),
    /// Complex number with `f64` parts
    Complex128(Complex64),
    Text(String),
    Bytes(Vec<u8>),
    List(List),
    Map(Map),
    /// A custom container
    Source(Box<dyn Source>),
}

/// The shape of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    Complex64,
    Complex128,
    Text,
    Bytes,
    List,
    Map,
    Source,
}

impl NodeKind {
    /// Returns the kind name as a string
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::I8 => "i8",
            NodeKind::I16 => "i16",
            NodeKind::I32 => "i32",
            NodeKind::I64 => "i64",
            NodeKind::Isize => "isize",
            NodeKind::U8 => "u8",
            NodeKind::U16 => "u16",
            NodeKind::U32 => "u32",
            NodeKind::U64 => "u64",
            NodeKind::Usize => "usize",
            NodeKind::F32 => "f32",
            NodeKind::F64 => "f64",
            NodeKind::Complex64 => "complex64",
            NodeKind::Complex128 => "complex128",
            NodeKind::Text => "text",
            NodeKind::Bytes => "bytes",
            NodeKind::List => "list",
            NodeKind::Map => "map",
            NodeKind::Source => "source",
        }
    }

    /// Returns true for the real numeric kinds (integers and floats)
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            NodeKind::I8
                | NodeKind::I16
                | NodeKind::I32
                | NodeKind::I64
                | NodeKind::Isize
                | NodeKind::U8
                | NodeKind::U16
                | NodeKind::U32
                | NodeKind::U64
                | NodeKind::Usize
                | NodeKind::F32
                | NodeKind::F64
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Node {
    /// Builds a list node from anything convertible to nodes.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        Node::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a map node from key/value pairs.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Node>,
    {
        Node::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Wraps a custom container.
    pub fn source(source: impl Source + 'static) -> Self {
        Node::Source(Box::new(source))
    }

    /// Returns the shape of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::I8(_) => NodeKind::I8,
            Node::I16(_) => NodeKind::I16,
            Node::I32(_) => NodeKind::I32,
            Node::I64(_) => NodeKind::I64,
            Node::Isize(_) => NodeKind::Isize,
            Node::U8(_) => NodeKind::U8,
            Node::U16(_) => NodeKind::U16,
            Node::U32(_) => NodeKind::U32,
            Node::U64(_) => NodeKind::U64,
            Node::Usize(_) => NodeKind::Usize,
            Node::F32(_) => NodeKind::F32,
            Node::F64(_) => NodeKind::F64,
            Node::Complex64(_) => NodeKind::Complex64,
            Node::Complex128(_) => NodeKind::Complex128,
            Node::Text(_) => NodeKind::Text,
            Node::Bytes(_) => NodeKind::Bytes,
            Node::List(_) => NodeKind::List,
            Node::Map(_) => NodeKind::Map,
            Node::Source(_) => NodeKind::Source,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    /// Returns true if this node can be navigated into
    pub fn is_source(&self) -> bool {
        matches!(self, Node::Map(_) | Node::List(_) | Node::Source(_))
    }

    /// Returns true for integer and float nodes
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a byte slice
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Node::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Attempts to convert to a list (returns immutable reference)
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable list reference
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to convert to a map (returns immutable reference)
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to convert to a mutable map reference
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Views this node as a [`Source`], if it is navigable
    pub fn as_source(&self) -> Option<&dyn Source> {
        source_of(self)
    }

    /// Views this node as a mutable [`Source`], if it is navigable
    pub fn as_source_mut(&mut self) -> Option<&mut dyn Source> {
        source_of_mut(self)
    }

    /// Element count for lists, maps and bytes, character count for text.
    ///
    /// Custom sources report whatever [`Source::len`] returns. All other
    /// shapes have no length.
    pub fn len(&self) -> Option<usize> {
        match self {
            Node::Text(s) => Some(s.chars().count()),
            Node::Bytes(b) => Some(b.len()),
            Node::List(list) => Some(list.len()),
            Node::Map(map) => Some(map.len()),
            Node::Source(source) => source.len(),
            _ => None,
        }
    }

    /// Returns true if [`len`](Node::len) is known and zero
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Replaces this node with `Null`, returning the previous value.
    pub fn take(&mut self) -> Node {
        std::mem::replace(self, Node::Null)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Null
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        match self {
            Node::Null => Node::Null,
            Node::Bool(v) => Node::Bool(*v),
            Node::I8(v) => Node::I8(*v),
            Node::I16(v) => Node::I16(*v),
            Node::I32(v) => Node::I32(*v),
            Node::I64(v) => Node::I64(*v),
            Node::Isize(v) => Node::Isize(*v),
            Node::U8(v) => Node::U8(*v),
            Node::U16(v) => Node::U16(*v),
            Node::U32(v) => Node::U32(*v),
            Node::U64(v) => Node::U64(*v),
            Node::Usize(v) => Node::Usize(*v),
            Node::F32(v) => Node::F32(*v),
            Node::F64(v) => Node::F64(*v),
            Node::Complex64(v) => Node::Complex64(*v),
            Node::Complex128(v) => Node::Complex128(*v),
            Node::Text(v) => Node::Text(v.clone()),
            Node::Bytes(v) => Node::Bytes(v.clone()),
            Node::List(v) => Node::List(v.clone()),
            Node::Map(v) => Node::Map(v.clone()),
            Node::Source(source) => Node::Source(source.clone_source()),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Null, Node::Null) => true,
            (Node::Bool(a), Node::Bool(b)) => a == b,
            (Node::I8(a), Node::I8(b)) => a == b,
            (Node::I16(a), Node::I16(b)) => a == b,
            (Node::I32(a), Node::I32(b)) => a == b,
            (Node::I64(a), Node::I64(b)) => a == b,
            (Node::Isize(a), Node::Isize(b)) => a == b,
            (Node::U8(a), Node::U8(b)) => a == b,
            (Node::U16(a), Node::U16(b)) => a == b,
            (Node::U32(a), Node::U32(b)) => a == b,
            (Node::U64(a), Node::U64(b)) => a == b,
            (Node::Usize(a), Node::Usize(b)) => a == b,
            (Node::F32(a), Node::F32(b)) => a == b,
            (Node::F64(a), Node::F64(b)) => a == b,
            (Node::Complex64(a), Node::Complex64(b)) => a == b,
            (Node::Complex128(a), Node::Complex128(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Bytes(a), Node::Bytes(b)) => a == b,
            (Node::List(a), Node::List(b)) => a == b,
            (Node::Map(a), Node::Map(b)) => a == b,
            // Custom sources have no structural equality, only identity
            (Node::Source(a), Node::Source(b)) => std::ptr::addr_eq(&**a, &**b),
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(v) => write!(f, "{v}"),
            Node::I8(v) => write!(f, "{v}"),
            Node::I16(v) => write!(f, "{v}"),
            Node::I32(v) => write!(f, "{v}"),
            Node::I64(v) => write!(f, "{v}"),
            Node::Isize(v) => write!(f, "{v}"),
            Node::U8(v) => write!(f, "{v}"),
            Node::U16(v) => write!(f, "{v}"),
            Node::U32(v) => write!(f, "{v}"),
            Node::U64(v) => write!(f, "{v}"),
            Node::Usize(v) => write!(f, "{v}"),
            Node::F32(v) => write!(f, "{v}"),
            Node::F64(v) => write!(f, "{v}"),
            Node::Complex64(v) => write!(f, "{v}"),
            Node::Complex128(v) => write!(f, "{v}"),
            Node::Text(s) => write!(f, "{s}"),
            Node::Bytes(b) => write!(f, "<{} bytes>", b.len()),
            Node::List(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Map(map) => {
                // Sorted for stable output
                let mut keys: Vec<&String> = map.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", map[key])?;
                }
                write!(f, "}}")
            }
            Node::Source(source) => write!(f, "{source:?}"),
        }
    }
}

/// Implements `From<$ty>`, exact `TryFrom<&Node>` and `PartialEq<$ty>` for
/// scalar payloads that are `Copy`.
macro_rules! scalar_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::$variant(value)
                }
            }

            impl TryFrom<&Node> for $ty {
                type Error = NodeError;

                fn try_from(node: &Node) -> Result<Self, Self::Error> {
                    match node {
                        Node::$variant(v) => Ok(*v),
                        other => Err(NodeError::TypeMismatch {
                            expected: NodeKind::$variant,
                            actual: other.kind(),
                        }),
                    }
                }
            }

            impl PartialEq<$ty> for Node {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Node::$variant(v) if v == other)
                }
            }

            impl PartialEq<Node> for $ty {
                fn eq(&self, other: &Node) -> bool {
                    other == self
                }
            }
        )*
    };
}

scalar_node! {
    Bool => bool,
    I8 => i8,
    I16 => i16,
    I32 => i32,
    I64 => i64,
    Isize => isize,
    U8 => u8,
    U16 => u16,
    U32 => u32,
    U64 => u64,
    Usize => usize,
    F32 => f32,
    F64 => f64,
    Complex64 => Complex32,
    Complex128 => Complex64,
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<Vec<u8>> for Node {
    fn from(value: Vec<u8>) -> Self {
        Node::Bytes(value)
    }
}

impl From<&[u8]> for Node {
    fn from(value: &[u8]) -> Self {
        Node::Bytes(value.to_vec())
    }
}

impl From<List> for Node {
    fn from(value: List) -> Self {
        Node::List(value)
    }
}

impl From<Map> for Node {
    fn from(value: Map) -> Self {
        Node::Map(value)
    }
}

impl From<Box<dyn Source>> for Node {
    fn from(value: Box<dyn Source>) -> Self {
        Node::Source(value)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<T: IntoIterator<Item = Node>>(iter: T) -> Self {
        Node::List(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Node::Map(iter.into_iter().collect())
    }
}

fn mismatch(expected: NodeKind, node: &Node) -> NodeError {
    NodeError::TypeMismatch {
        expected,
        actual: node.kind(),
    }
}

impl TryFrom<&Node> for String {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_text()
            .map(str::to_string)
            .ok_or_else(|| mismatch(NodeKind::Text, node))
    }
}

impl<'a> TryFrom<&'a Node> for &'a str {
    type Error = NodeError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        node.as_text().ok_or_else(|| mismatch(NodeKind::Text, node))
    }
}

impl TryFrom<&Node> for Vec<u8> {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_bytes()
            .map(<[u8]>::to_vec)
            .ok_or_else(|| mismatch(NodeKind::Bytes, node))
    }
}

impl<'a> TryFrom<&'a Node> for &'a [u8] {
    type Error = NodeError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        node.as_bytes().ok_or_else(|| mismatch(NodeKind::Bytes, node))
    }
}

impl<'a> TryFrom<&'a Node> for &'a List {
    type Error = NodeError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        node.as_list().ok_or_else(|| mismatch(NodeKind::List, node))
    }
}

impl<'a> TryFrom<&'a Node> for &'a Map {
    type Error = NodeError;

    fn try_from(node: &'a Node) -> Result<Self, Self::Error> {
        node.as_map().ok_or_else(|| mismatch(NodeKind::Map, node))
    }
}

impl TryFrom<&Node> for Map {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        node.as_map()
            .cloned()
            .ok_or_else(|| mismatch(NodeKind::Map, node))
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Node::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Node {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Node> for str {
    fn eq(&self, other: &Node) -> bool {
        other == self
    }
}

impl PartialEq<Node> for &str {
    fn eq(&self, other: &Node) -> bool {
        other == *self
    }
}

impl PartialEq<Node> for String {
    fn eq(&self, other: &Node) -> bool {
        other == self.as_str()
    }
}
