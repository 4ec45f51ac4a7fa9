//! Qualifier-directed traversal over a root [`Source`].
//!
//! A [`Navigator`] borrows a root container mutably and walks it one segment
//! at a time. Every intermediate segment must resolve to something navigable
//! (a [`Map`], a [`List`] or an embedded custom source). The last segment is
//! answered by the container it lands in.
//!
//! Writes create missing intermediate maps on the way down:
//!
//! ```
//! use pathwise::{Map, Navigator};
//!
//! let mut root = Map::new();
//! let mut nav = Navigator::new(&mut root);
//! assert!(nav.set("a.b.c", 10));
//! assert_eq!(nav.get("a.b.c").i64(None), 10);
//! assert_eq!(root["a"].to_string(), "{b: {c: 10}}");
//! ```
//!
//! Lists are never created this way: a missing or out-of-range index makes
//! the write fail and leaves the list untouched.
//!
//! Every operation rewinds the qualifier before it returns, so one qualifier
//! can be reused for any number of calls.

use tracing::{debug, trace};

use crate::{
    node::{List, Map, Node},
    qualifier::{LazyQualifier, Qualifier},
    source::{Source, source_of, source_of_mut},
    value::Value,
};

pub mod errors;

pub use errors::NavigatorError;

/// Traversal driver over a borrowed root container.
///
/// The navigator never owns data. Writes go straight into the borrowed
/// container and are visible to its owner once the navigator is dropped.
#[derive(Debug, Default)]
pub struct Navigator<'a> {
    source: Option<&'a mut dyn Source>,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator over a map, a list, or any other sized source.
    pub fn new(source: &'a mut impl Source) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Creates a navigator over a source trait object.
    pub fn from_source(source: &'a mut dyn Source) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Creates a navigator rooted at `node`, if it is navigable.
    pub fn from_node(node: &'a mut Node) -> Option<Self> {
        source_of_mut(node).map(Self::from_source)
    }

    /// The root container, if one is set.
    pub fn source(&self) -> Option<&dyn Source> {
        self.source.as_deref()
    }

    /// The root container for modification, if one is set.
    pub fn source_mut(&mut self) -> Option<&mut dyn Source> {
        match self.source.as_deref_mut() {
            Some(source) => Some(source),
            None => None,
        }
    }

    /// Replaces the root container.
    pub fn set_source(&mut self, source: &'a mut dyn Source) {
        self.source = Some(source);
    }

    /// Replaces the root container with a map.
    pub fn set_map_source(&mut self, source: &'a mut Map) {
        self.source = Some(source);
    }

    /// Replaces the root container with a list.
    pub fn set_list_source(&mut self, source: &'a mut List) {
        self.source = Some(source);
    }

    /// Looks up the node the qualifier points at.
    pub fn get_raw<Q>(&self, qualifier: &mut Q) -> Option<&Node>
    where
        Q: Qualifier + ?Sized,
    {
        let found = match self.source.as_deref() {
            Some(root) => resolve(root, qualifier),
            None => None,
        };
        qualifier.reset();
        found
    }

    /// Looks up the node the qualifier points at for modification.
    pub fn get_mut<Q>(&mut self, qualifier: &mut Q) -> Option<&mut Node>
    where
        Q: Qualifier + ?Sized,
    {
        let found = match self.source.as_deref_mut() {
            Some(root) => resolve_mut(root, qualifier),
            None => None,
        };
        qualifier.reset();
        found
    }

    /// Returns true if the qualifier points at a stored node.
    pub fn contains<Q>(&self, qualifier: &mut Q) -> bool
    where
        Q: Qualifier + ?Sized,
    {
        self.get_raw(qualifier).is_some()
    }

    /// Looks up a node and wraps it for typed access.
    pub fn query<Q>(&self, qualifier: &mut Q) -> Value<'_>
    where
        Q: Qualifier + ?Sized,
    {
        Value::new(self.get_raw(qualifier))
    }

    /// Looks up a path using the default delimiter.
    ///
    /// The path is parsed lazily. For paths used repeatedly, build a
    /// [`CompiledQualifier`](crate::CompiledQualifier) once and call
    /// [`query`](Navigator::query).
    pub fn get(&self, path: &str) -> Value<'_> {
        self.query(&mut LazyQualifier::new(path))
    }

    /// Looks up a node, naming the failure.
    ///
    /// # Errors
    /// [`NavigatorError::NoSource`] without a root,
    /// [`NavigatorError::NotFound`] when the path does not resolve.
    pub fn try_get<Q>(&self, qualifier: &mut Q) -> Result<&Node, NavigatorError>
    where
        Q: Qualifier + ?Sized,
    {
        if self.source.is_none() {
            return Err(NavigatorError::NoSource);
        }
        match self.get_raw(qualifier) {
            Some(node) => Ok(node),
            None => Err(NavigatorError::NotFound {
                path: qualifier.to_string(),
            }),
        }
    }

    /// Looks up a node that must exist.
    ///
    /// # Panics
    /// Panics if the path does not resolve.
    pub fn must_get<Q>(&self, qualifier: &mut Q) -> &Node
    where
        Q: Qualifier + ?Sized,
    {
        match self.try_get(qualifier) {
            Ok(node) => node,
            Err(err) => panic!("could not get by qualifier: {err}"),
        }
    }

    /// Returns a navigator rooted at the node the qualifier points at.
    ///
    /// Returns `None` if the path does not resolve or the node is not
    /// navigable.
    pub fn navigator<Q>(&mut self, qualifier: &mut Q) -> Option<Navigator<'_>>
    where
        Q: Qualifier + ?Sized,
    {
        self.get_mut(qualifier).and_then(Navigator::from_node)
    }

    /// Returns a navigator rooted at `path`, using the default delimiter.
    pub fn sub(&mut self, path: &str) -> Option<Navigator<'_>> {
        self.navigator(&mut LazyQualifier::new(path))
    }

    /// Stores `value` at the qualifier's path, creating missing maps.
    ///
    /// Returns false if there is no root, or a container along the path
    /// refuses the write (an invalid list index, or a custom source that
    /// declines).
    pub fn set_by<Q>(&mut self, qualifier: &mut Q, value: impl Into<Node>) -> bool
    where
        Q: Qualifier + ?Sized,
    {
        let stored = match self.source.as_deref_mut() {
            Some(root) => assign(root, qualifier, value.into()),
            None => {
                debug!("refusing write without a source");
                false
            }
        };
        qualifier.reset();
        stored
    }

    /// Stores `value` at `path`, using the default delimiter.
    pub fn set(&mut self, path: &str, value: impl Into<Node>) -> bool {
        self.set_by(&mut LazyQualifier::new(path), value)
    }

    /// Stores a value, naming the failure.
    ///
    /// # Errors
    /// [`NavigatorError::NoSource`] without a root,
    /// [`NavigatorError::Rejected`] when a container refuses the write.
    pub fn try_set<Q>(&mut self, qualifier: &mut Q, value: impl Into<Node>) -> Result<(), NavigatorError>
    where
        Q: Qualifier + ?Sized,
    {
        if self.source.is_none() {
            return Err(NavigatorError::NoSource);
        }
        if self.set_by(qualifier, value) {
            Ok(())
        } else {
            Err(NavigatorError::Rejected {
                path: qualifier.to_string(),
            })
        }
    }

    /// Stores a value where the write must succeed.
    ///
    /// # Panics
    /// Panics if the write is refused.
    pub fn must_set<Q>(&mut self, qualifier: &mut Q, value: impl Into<Node>)
    where
        Q: Qualifier + ?Sized,
    {
        if let Err(err) = self.try_set(qualifier, value) {
            panic!("could not set by qualifier: {err}");
        }
    }
}

impl<'a, S: Source> From<&'a mut S> for Navigator<'a> {
    fn from(source: &'a mut S) -> Self {
        Navigator::new(source)
    }
}

/// Walks `qualifier` from `root`. The caller resets the cursor.
fn resolve<'s, Q>(root: &'s dyn Source, qualifier: &mut Q) -> Option<&'s Node>
where
    Q: Qualifier + ?Sized,
{
    let mut current = root;
    loop {
        let (segment, has_more) = qualifier.next_segment()?;
        if !has_more {
            return current.get(&segment);
        }
        current = current.get(&segment).and_then(source_of)?;
    }
}

fn resolve_mut<'s, Q>(root: &'s mut dyn Source, qualifier: &mut Q) -> Option<&'s mut Node>
where
    Q: Qualifier + ?Sized,
{
    let mut current = root;
    loop {
        let (segment, has_more) = qualifier.next_segment()?;
        if !has_more {
            return current.get_mut(&segment);
        }
        current = current.get_mut(&segment).and_then(source_of_mut)?;
    }
}

/// Writes `value` at the end of `qualifier`, materializing a map for every
/// intermediate segment that does not resolve to a container.
fn assign<Q>(root: &mut dyn Source, qualifier: &mut Q, value: Node) -> bool
where
    Q: Qualifier + ?Sized,
{
    let mut current = root;
    let mut path_exists = true;

    loop {
        let Some((segment, has_more)) = qualifier.next_segment() else {
            return false;
        };
        if !has_more {
            let stored = current.set(&segment, value);
            if !stored {
                debug!(segment = %segment, "container refused final write");
            }
            return stored;
        }

        if path_exists && current.get(&segment).is_some_and(Node::is_source) {
            match current.get_mut(&segment).and_then(source_of_mut) {
                Some(inner) => {
                    current = inner;
                    continue;
                }
                None => return false,
            }
        }

        if path_exists {
            trace!(segment = %segment, "path leaves existing structure, creating maps");
            path_exists = false;
        }
        current = match current
            .set_entry(&segment, Node::Map(Map::new()))
            .and_then(source_of_mut)
        {
            Some(inner) => inner,
            None => {
                debug!(segment = %segment, "container refused intermediate map");
                return false;
            }
        };
    }
}
