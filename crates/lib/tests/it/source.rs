//! Source integration tests
//!
//! Exercises the map and list sources through the trait object, the
//! classification of nodes, and custom sources embedded in a tree.

use pathwise::{
    List, Map, Navigator, Node, Source,
    constants::APPEND_MARKER,
    source::{source_of, source_of_mut},
};

use crate::helpers::{PrefixedSource, StackSource};

#[test]
fn test_map_source_overwrites() {
    let mut map = Map::new();
    map.insert("x".to_string(), Node::from(5));
    let source: &mut dyn Source = &mut map;
    assert!(source.set("x", Node::from(10)));
    assert_eq!(source.len(), Some(1));
    assert_eq!(map["x"], 10);
}

#[test]
fn test_list_source_through_trait_object() {
    let mut list: List = vec![Node::from(0), Node::from(1), Node::from(2)];
    let source: &mut dyn Source = &mut list;

    assert_eq!(source.get("-1"), Some(&Node::from(2)));
    assert!(source.set("1", Node::from(99)));
    assert!(!source.set("3", Node::from(99)));
    assert!(!source.set("abc", Node::from(5)));
    assert!(source.set(APPEND_MARKER, Node::from(3)));
    assert_eq!(source.len(), Some(4));

    assert_eq!(list, vec![Node::from(0), Node::from(99), Node::from(2), Node::from(3)]);
}

#[test]
fn test_classification_of_leaves() {
    for node in [
        Node::Null,
        Node::from(true),
        Node::from(1.5),
        Node::from("text"),
        Node::from(vec![1u8, 2, 3]),
    ] {
        assert!(source_of(&node).is_none(), "{:?} should not be navigable", node.kind());
    }
    assert!(source_of(&Node::map([("k", 1)])).is_some());
    assert!(source_of(&Node::source(PrefixedSource::new("p"))).is_some());
}

#[test]
fn test_custom_source_as_root() {
    let mut custom = PrefixedSource::new("ok_");
    let mut nav = Navigator::new(&mut custom);

    assert!(nav.set("ok_name", "value"));
    assert!(!nav.set("bad_name", "value"));
    assert_eq!(nav.get("ok_name").string(None), "value");
    assert!(nav.get("bad_name").is_nil());

    assert_eq!(custom.entries.len(), 1);
}

#[test]
fn test_custom_source_embedded_in_tree() {
    let mut root = Map::new();
    root.insert("plugin".to_string(), Node::source(PrefixedSource::new("cfg_")));
    let mut nav = Navigator::new(&mut root);

    assert!(nav.set("plugin.cfg_depth", 3));
    assert!(!nav.set("plugin.other", 1));
    // Intermediate maps must also pass the container's own rules
    assert!(!nav.set("plugin.nested.cfg_x", 1));
    assert!(nav.set("plugin.cfg_nested.x", 1));

    assert_eq!(nav.get("plugin.cfg_depth").i32(None), 3);
    assert_eq!(nav.get("plugin.cfg_nested.x").i32(None), 1);
    assert_eq!(nav.get("plugin").len(), 2);
}

#[test]
fn test_mutable_classification_writes_through() {
    let mut node = Node::map([("inner", Node::list(["a"]))]);
    let source = source_of_mut(&mut node).unwrap();
    let inner = source.get_mut("inner").and_then(source_of_mut).unwrap();
    assert!(inner.set("+", Node::from("b")));
    assert_eq!(node.to_string(), "{inner: [a, b]}");
}

#[test]
fn test_cloned_custom_source_is_independent() {
    let original = Node::source(PrefixedSource::new("k"));
    let mut copy = original.clone();
    assert!(copy.as_source_mut().unwrap().set("k1", Node::Null));
    assert_eq!(copy.len(), Some(1));
    assert_eq!(original.len(), Some(0));
}

#[test]
fn test_custom_append_source_descends_into_new_entry() {
    let mut stack = StackSource::default();
    let mut nav = Navigator::new(&mut stack);

    assert!(nav.set("+.k", 1));
    assert!(nav.set("+.k", 2));
    assert_eq!(nav.get("0.k").i32(None), 1);
    assert_eq!(nav.get("1.k").i32(None), 2);
    assert_eq!(stack.items, vec![Node::map([("k", 1)]), Node::map([("k", 2)])]);
}

#[test]
fn test_custom_source_refusing_intermediate_is_untouched() {
    let mut stack = StackSource::default();
    let mut nav = Navigator::new(&mut stack);

    assert!(!nav.set("0.k", 1));
    assert!(!nav.set("top.k", 1));
    assert!(stack.items.is_empty());
}
