//! Sources: one nesting level of addressable data.
//!
//! A [`Source`] answers segment-level `get` and `set` for a single container.
//! The two built-in containers implement it directly:
//!
//! - [`Map`] treats the segment as a key. `set` always succeeds.
//! - [`List`] parses the segment as a signed decimal index, negative indices
//!   counting from the end. `set` additionally accepts
//!   [`APPEND_MARKER`](crate::constants::APPEND_MARKER) (`"+"`) to push a new
//!   element. Anything that is not a valid in-range index fails without
//!   touching the list.
//!
//! Because the containers themselves are the sources, wrapping never copies:
//! a `&mut dyn Source` is a view into the caller's data, and writes through it
//! are visible in the original structure.
//!
//! Custom containers implement [`Source`] and can either be used as a
//! navigator root or be embedded in a tree as [`Node::Source`].

use std::fmt;

use crate::{
    constants::APPEND_MARKER,
    node::{List, Map, Node},
};

/// Segment-level access to one container.
pub trait Source: fmt::Debug + Send + Sync {
    /// Looks up the element addressed by `segment`.
    fn get(&self, segment: &str) -> Option<&Node>;

    /// Looks up the element addressed by `segment` for modification.
    ///
    /// Traversal descends through this method when writing, so it must
    /// address the same element as [`get`](Source::get).
    fn get_mut(&mut self, segment: &str) -> Option<&mut Node>;

    /// Stores `value` under `segment`, returning whether it was accepted.
    fn set(&mut self, segment: &str, value: Node) -> bool;

    /// Stores `value` under `segment` and returns the stored element.
    ///
    /// Writes that descend further use this to continue into the element
    /// they just created. A segment such as an append marker does not
    /// address what it wrote, so the returned element must be the one just
    /// stored rather than a re-read of `segment`. Returns `None` only when
    /// nothing was stored.
    fn set_entry(&mut self, segment: &str, value: Node) -> Option<&mut Node>;

    /// Number of elements, if the container can tell.
    fn len(&self) -> Option<usize> {
        None
    }

    /// Returns `true` if the container reports zero elements.
    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Clones the container behind the trait object.
    fn clone_source(&self) -> Box<dyn Source>;
}

impl Source for Map {
    fn get(&self, segment: &str) -> Option<&Node> {
        Map::get(self, segment)
    }

    fn get_mut(&mut self, segment: &str) -> Option<&mut Node> {
        Map::get_mut(self, segment)
    }

    fn set(&mut self, segment: &str, value: Node) -> bool {
        self.insert(segment.to_string(), value);
        true
    }

    fn set_entry(&mut self, segment: &str, value: Node) -> Option<&mut Node> {
        Some(self.entry(segment.to_string()).insert_entry(value).into_mut())
    }

    fn len(&self) -> Option<usize> {
        Some(Map::len(self))
    }

    fn clone_source(&self) -> Box<dyn Source> {
        Box::new(self.clone())
    }
}

impl Source for List {
    fn get(&self, segment: &str) -> Option<&Node> {
        let index = parse_index(segment, List::len(self))?;
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, segment: &str) -> Option<&mut Node> {
        let index = parse_index(segment, List::len(self))?;
        self.as_mut_slice().get_mut(index)
    }

    fn set(&mut self, segment: &str, value: Node) -> bool {
        if segment == APPEND_MARKER {
            self.push(value);
            return true;
        }
        match parse_index(segment, List::len(self)) {
            Some(index) => {
                self[index] = value;
                true
            }
            None => false,
        }
    }

    fn set_entry(&mut self, segment: &str, value: Node) -> Option<&mut Node> {
        if segment == APPEND_MARKER {
            self.push(value);
            return self.last_mut();
        }
        let index = parse_index(segment, List::len(self))?;
        let slot = self.as_mut_slice().get_mut(index)?;
        *slot = value;
        Some(slot)
    }

    fn len(&self) -> Option<usize> {
        Some(List::len(self))
    }

    fn clone_source(&self) -> Box<dyn Source> {
        Box::new(self.clone())
    }
}

/// Resolves a list segment into an in-bounds index.
///
/// The segment must be a signed decimal integer. Negative values address
/// from the end, so `-1` is the last element.
///
/// ```
/// # use pathwise::source::parse_index;
/// assert_eq!(parse_index("1", 3), Some(1));
/// assert_eq!(parse_index("-1", 3), Some(2));
/// assert_eq!(parse_index("3", 3), None);
/// assert_eq!(parse_index("-4", 3), None);
/// assert_eq!(parse_index("one", 3), None);
/// ```
pub fn parse_index(segment: &str, len: usize) -> Option<usize> {
    let index: isize = segment.parse().ok()?;
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };
    (resolved < len).then_some(resolved)
}

/// Classifies a node as a source, if it is one.
///
/// Maps and lists are wrapped as their built-in sources, embedded custom
/// sources are returned as they are, and every other shape is not navigable.
pub fn source_of(node: &Node) -> Option<&dyn Source> {
    match node {
        Node::Map(map) => Some(map as &dyn Source),
        Node::List(list) => Some(list as &dyn Source),
        Node::Source(source) => Some(&**source),
        _ => None,
    }
}

/// Mutable counterpart of [`source_of`].
pub fn source_of_mut(node: &mut Node) -> Option<&mut dyn Source> {
    match node {
        Node::Map(map) => Some(map as &mut dyn Source),
        Node::List(list) => Some(list as &mut dyn Source),
        Node::Source(source) => Some(&mut **source),
        _ => None,
    }
}
