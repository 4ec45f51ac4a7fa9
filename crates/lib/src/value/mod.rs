//! Typed, default-falling-back access to one retrieved node.
//!
//! A [`Value`] wraps whatever a lookup produced, possibly nothing. Typed
//! getters never fail: when nothing is held, or the held node has another
//! shape, they return the caller's default or the type's zero value.
//!
//! Scalar numeric getters go through [`numeric::coerce`], so a stored `i64`
//! can be read as a `u8` when it fits. All other getters match the exact shape.
//!
//! ```
//! use pathwise::{Node, Value};
//!
//! let node = Node::from(300i64);
//! let value = Value::from(&node);
//! assert_eq!(value.i64(None), 300);
//! assert_eq!(value.u16(None), 300);
//! assert_eq!(value.u8(7), 7);
//! assert_eq!(value.string("n/a"), "n/a");
//! ```

use std::{collections::HashMap, ops::ControlFlow};

use num_complex::{Complex32, Complex64};

use crate::{
    constants::NO_LEN,
    node::{Node, NodeError, NodeKind},
    source::{Source, source_of},
};

pub mod numeric;

pub use numeric::Numeric;

/// An immutable, possibly empty view of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Value<'a> {
    item: Option<&'a Node>,
}

/// Generates scalar numeric getters backed by lossless coercion.
macro_rules! numeric_getters {
    ($($name:ident => $ty:ty),* $(,)?) => {
        $(
            #[doc = concat!("Reads the item as `", stringify!($ty), "`, coercing other numeric kinds losslessly.")]
            pub fn $name(&self, default: impl Into<Option<$ty>>) -> $ty {
                self.numeric_or(default)
            }
        )*
    };
}

impl<'a> Value<'a> {
    /// Wraps a lookup result.
    pub fn new(item: Option<&'a Node>) -> Self {
        Self { item }
    }

    /// The held node, if any.
    pub fn node(&self) -> Option<&'a Node> {
        self.item
    }

    /// Returns true if nothing is held or the held node is `Null`.
    pub fn is_nil(&self) -> bool {
        self.item.is_none_or(Node::is_null)
    }

    /// Element count for lists and maps, character count for text.
    ///
    /// Returns [`NO_LEN`] (`-1`) when nothing is held or the shape has no
    /// length.
    pub fn len(&self) -> isize {
        self.item
            .and_then(Node::len)
            .and_then(|len| isize::try_from(len).ok())
            .unwrap_or(NO_LEN)
    }

    /// Returns true if [`len`](Value::len) reports zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the item as exactly `T`.
    pub fn exact<T>(&self) -> Option<T>
    where
        T: TryFrom<&'a Node>,
    {
        self.item.and_then(|node| T::try_from(node).ok())
    }

    /// Reads the item as exactly `T`, falling back to `default` or `T::default()`.
    pub fn exact_or<T>(&self, default: impl Into<Option<T>>) -> T
    where
        T: TryFrom<&'a Node> + Default,
    {
        self.exact()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// Reads the item as `T`, reporting why it could not be read.
    ///
    /// # Errors
    /// [`NodeError::TypeMismatch`] when nothing is held or the shape differs,
    /// [`NodeError::LossyConversion`] when a number does not fit.
    pub fn try_numeric<T: Numeric>(&self) -> Result<T, NodeError> {
        match self.item {
            Some(node) => numeric::coerce(node),
            None => Err(NodeError::TypeMismatch {
                expected: T::KIND,
                actual: NodeKind::Null,
            }),
        }
    }

    /// Reads the item as `T` if it is a number that converts losslessly.
    pub fn numeric<T: Numeric>(&self) -> Option<T> {
        self.try_numeric().ok()
    }

    /// Like [`numeric`](Value::numeric), falling back to `default` or zero.
    pub fn numeric_or<T: Numeric>(&self, default: impl Into<Option<T>>) -> T {
        self.numeric()
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// Returns the held node unless it is nil, otherwise `default`.
    pub fn node_or<'d>(&self, default: &'d Node) -> &'d Node
    where
        'a: 'd,
    {
        match self.item {
            Some(node) if !node.is_null() => node,
            _ => default,
        }
    }

    /// Returns a copy of the held node if it has the same shape as `default`.
    ///
    /// `None` as the default accepts any shape. The held node is compared by
    /// [`kind`](Node::kind) only, so the default's payload is irrelevant
    /// unless it is returned.
    ///
    /// ```
    /// # use pathwise::{Node, Value};
    /// let node = Node::from("text");
    /// let value = Value::from(&node);
    /// assert_eq!(value.safe_node(Some(Node::from(""))), Some(node.clone()));
    /// assert_eq!(value.safe_node(Some(Node::from(0))), Some(Node::from(0)));
    /// assert_eq!(value.safe_node(None), Some(node.clone()));
    /// ```
    pub fn safe_node(&self, default: Option<Node>) -> Option<Node> {
        match default {
            None => self.item.cloned(),
            Some(default) => match self.item {
                Some(node) if node.kind() == default.kind() => Some(node.clone()),
                _ => Some(default),
            },
        }
    }

    /// Reads the item as text.
    pub fn string<'d>(&self, default: impl Into<Option<&'d str>>) -> &'d str
    where
        'a: 'd,
    {
        self.item
            .and_then(Node::as_text)
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// Reads the item as a boolean.
    pub fn bool(&self, default: impl Into<Option<bool>>) -> bool {
        self.exact_or(default)
    }

    numeric_getters! {
        i8 => i8,
        i16 => i16,
        i32 => i32,
        i64 => i64,
        isize => isize,
        u8 => u8,
        u16 => u16,
        u32 => u32,
        u64 => u64,
        usize => usize,
        f32 => f32,
        f64 => f64,
    }

    /// Reads the item as a complex number with `f32` parts.
    pub fn complex64(&self, default: impl Into<Option<Complex32>>) -> Complex32 {
        self.exact_or(default)
    }

    /// Reads the item as a complex number with `f64` parts.
    pub fn complex128(&self, default: impl Into<Option<Complex64>>) -> Complex64 {
        self.exact_or(default)
    }

    /// Reads the item as raw bytes.
    pub fn bytes<'d>(&self, default: impl Into<Option<&'d [u8]>>) -> &'d [u8]
    where
        'a: 'd,
    {
        self.item
            .and_then(Node::as_bytes)
            .or_else(|| default.into())
            .unwrap_or_default()
    }

    /// Reads the item as a list whose elements are all exactly `T`.
    pub fn list_of<T>(&self) -> Option<Vec<T>>
    where
        T: TryFrom<&'a Node>,
    {
        self.item?
            .as_list()?
            .iter()
            .map(|node| T::try_from(node).ok())
            .collect()
    }

    /// Reads the item as a map whose values are all exactly `T`.
    pub fn map_of<T>(&self) -> Option<HashMap<String, T>>
    where
        T: TryFrom<&'a Node>,
    {
        self.item?
            .as_map()?
            .iter()
            .map(|(key, node)| T::try_from(node).ok().map(|v| (key.clone(), v)))
            .collect()
    }

    /// Reads a list of text.
    pub fn string_list(&self, default: impl Into<Option<Vec<String>>>) -> Vec<String> {
        self.list_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a list of booleans.
    pub fn bool_list(&self, default: impl Into<Option<Vec<bool>>>) -> Vec<bool> {
        self.list_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a list of `i64`.
    pub fn i64_list(&self, default: impl Into<Option<Vec<i64>>>) -> Vec<i64> {
        self.list_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a list of `f64`.
    pub fn f64_list(&self, default: impl Into<Option<Vec<f64>>>) -> Vec<f64> {
        self.list_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a map of text.
    pub fn string_map(
        &self,
        default: impl Into<Option<HashMap<String, String>>>,
    ) -> HashMap<String, String> {
        self.map_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a map of booleans.
    pub fn bool_map(
        &self,
        default: impl Into<Option<HashMap<String, bool>>>,
    ) -> HashMap<String, bool> {
        self.map_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a map of `i64`.
    pub fn i64_map(&self, default: impl Into<Option<HashMap<String, i64>>>) -> HashMap<String, i64> {
        self.map_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// Reads a map of `f64`.
    pub fn f64_map(&self, default: impl Into<Option<HashMap<String, f64>>>) -> HashMap<String, f64> {
        self.map_of().or_else(|| default.into()).unwrap_or_default()
    }

    /// The held node as a read-only source, if it can be navigated into.
    pub fn navigable(&self) -> Option<&'a dyn Source> {
        self.item.and_then(source_of)
    }

    /// Calls `f` for each element of a list whose elements are all exactly `T`.
    ///
    /// Nothing is called if the item is not such a list. Returning
    /// [`ControlFlow::Break`] stops the iteration. Returns whether the
    /// callback ran at all.
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// # use pathwise::{Node, Value};
    ///
    /// let node = Node::list(["a", "b", "c"]);
    /// let mut seen = Vec::new();
    /// Value::from(&node).iter_list(|i, s: String| {
    ///     seen.push((i, s));
    ///     if i == 1 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(seen, vec![(0, "a".to_string()), (1, "b".to_string())]);
    /// ```
    pub fn iter_list<T, F>(&self, mut f: F) -> bool
    where
        T: TryFrom<&'a Node>,
        F: FnMut(usize, T) -> ControlFlow<()>,
    {
        let Some(items) = self.list_of::<T>() else {
            return false;
        };
        for (index, item) in items.into_iter().enumerate() {
            if f(index, item).is_break() {
                break;
            }
        }
        true
    }

    /// Calls `f` for each entry of a map whose values are all exactly `T`.
    ///
    /// Iteration order is unspecified. Returns whether the callback ran at
    /// all, with the same rules as [`iter_list`](Value::iter_list).
    pub fn iter_map<T, F>(&self, mut f: F) -> bool
    where
        T: TryFrom<&'a Node>,
        F: FnMut(&'a str, T) -> ControlFlow<()>,
    {
        let Some(map) = self.item.and_then(Node::as_map) else {
            return false;
        };
        let Some(entries) = map
            .iter()
            .map(|(key, node)| T::try_from(node).ok().map(|v| (key.as_str(), v)))
            .collect::<Option<Vec<_>>>()
        else {
            return false;
        };
        for (key, item) in entries {
            if f(key, item).is_break() {
                break;
            }
        }
        true
    }
}

impl<'a> From<&'a Node> for Value<'a> {
    fn from(node: &'a Node) -> Self {
        Value::new(Some(node))
    }
}

impl<'a> From<Option<&'a Node>> for Value<'a> {
    fn from(item: Option<&'a Node>) -> Self {
        Value::new(item)
    }
}
