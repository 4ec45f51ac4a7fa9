//! Navigator integration tests
//!
//! Get and set traversal over decoded JSON documents and hand-built
//! containers, including auto-vivification, list indexing rules, sub
//! navigators, and the fallible and panicking accessors.

use pathwise::{
    CompiledQualifier, LazyQualifier, List, Map, Navigator, NavigatorError, Node, Qualifier,
};

use crate::helpers::{json_list, sample_map};

// ===== GET =====

#[test]
fn test_get_through_lists_and_maps() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);

    assert_eq!(nav.get("a.b.0.f").i64(None), 1);
    assert_eq!(nav.get("a.b.0.c").f64(None), 3.14);
    assert!(nav.get("a.b.-1.last").bool(false));
    assert_eq!(nav.get("a.b.0.j.k").string(None), "l");
}

#[test]
fn test_get_escaped_key() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);
    let mut qual = CompiledQualifier::new(r"b.c.a\.b").unwrap();
    assert_eq!(nav.query(&mut qual).i32(None), 321);
}

#[test]
fn test_get_custom_delimiter() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);
    let mut qual = CompiledQualifier::with_delimiter("a/b/0/c", '/').unwrap();
    assert_eq!(nav.get_raw(&mut qual), Some(&Node::F64(3.14)));

    let mut qual = LazyQualifier::with_delimiter("b/c/a.b", '/').unwrap();
    assert_eq!(nav.query(&mut qual).u16(None), 321);
}

#[test]
fn test_get_misses() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);

    for path in ["nope", "a.nope.c", "a.b.5", "a.b.x", "a.b.0.e.deeper", ""] {
        assert!(nav.get(path).is_nil(), "{path:?} should not resolve");
        assert!(!nav.contains(&mut LazyQualifier::new(path)));
    }
}

#[test]
fn test_repeated_get_with_same_qualifier() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);

    let mut hit = CompiledQualifier::new("a.b.0.e").unwrap();
    let mut miss = LazyQualifier::new("a.x.y");
    for _ in 0..3 {
        assert_eq!(nav.query(&mut hit).string(None), "hello");
        assert!(nav.query(&mut miss).is_nil());
    }
    assert_eq!(hit.remaining(), hit.len());
    assert_eq!(miss.next_segment().map(|(s, _)| s.into_owned()), Some("a".to_string()));
}

#[test]
fn test_dyn_qualifier_arguments() {
    let mut root = sample_map();
    let mut nav = Navigator::new(&mut root);
    let qual: &mut dyn Qualifier = &mut LazyQualifier::new("b.c.f");
    assert_eq!(nav.query(qual).i64(None), 123);
    assert!(nav.set_by(qual, 124));
    assert_eq!(nav.query(qual).i64(None), 124);
}

// ===== SET =====

#[test]
fn test_set_new_nested_map() {
    let mut root = Map::new();
    let mut nav = Navigator::new(&mut root);
    assert!(nav.set_by(&mut LazyQualifier::new("a.b.c"), 10));
    assert_eq!(nav.get("a.b.c").i64(None), 10);
}

#[test]
fn test_set_overwrites_existing_value() {
    let mut root = Map::new();
    root.insert("x".to_string(), Node::from(5));
    let mut nav = Navigator::new(&mut root);
    assert!(nav.set_by(&mut CompiledQualifier::new("x").unwrap(), 10));
    assert_eq!(root["x"], 10);
}

#[test]
fn test_set_in_existing_list() {
    let mut list = json_list("[0, 1, 2]");
    let mut nav = Navigator::new(&mut list);
    assert!(nav.set("1", 99));
    assert_eq!(nav.get("1").i64(None), 99);
}

#[test]
fn test_set_append_marker() {
    let mut list: List = vec![Node::from("a")];
    let mut nav = Navigator::new(&mut list);
    assert!(nav.set_by(&mut CompiledQualifier::new("+").unwrap(), "b"));
    assert_eq!(nav.get("1").string(None), "b");
    assert_eq!(list.len(), 2);
}

#[test]
fn test_set_nested_list_within_map_within_list() {
    let mut nested = json_list(r#"[{"a": [10, 20]}]"#);
    let mut nav = Navigator::new(&mut nested);
    assert!(nav.set_by(&mut CompiledQualifier::new("0.a.1").unwrap(), 30));
    assert_eq!(nested[0].as_map().unwrap()["a"], Node::list([Node::I64(10), Node::I32(30)]));
}

#[test]
fn test_set_invalid_list_index() {
    let mut list = json_list("[1, 2, 3]");
    let before = list.clone();
    let mut nav = Navigator::new(&mut list);
    assert!(!nav.set("abc", 5));
    assert!(!nav.set("3", 99));
    assert!(!nav.set("-4", 99));
    assert!(!nav.set("7.deep", 99));
    assert_eq!(list, before);
}

#[test]
fn test_set_negative_index() {
    let mut list = json_list("[1, 2, 3]");
    let mut nav = Navigator::new(&mut list);
    assert!(nav.set("-1", 99));
    assert_eq!(list[2], 99);
}

#[test]
fn test_set_through_non_map_node() {
    let mut root = Map::new();
    root.insert("a".to_string(), Node::from(5));
    let mut nav = Navigator::new(&mut root);
    assert!(nav.set("a.b", 10));
    assert_eq!(nav.get("a.b").i32(None), 10);
}

#[test]
fn test_set_in_list_element_map() {
    let mut list: List = vec![Node::Map(Map::new())];
    let mut nav = Navigator::new(&mut list);
    assert!(nav.set("0.key", "value"));
    assert_eq!(list[0].as_map().unwrap()["key"], "value");
}

#[test]
fn test_set_appends_then_descends() {
    let mut root = sample_map();
    let mut nav = Navigator::new(&mut root);
    assert!(nav.set("a.b.+.id", 7));
    assert_eq!(nav.get("a.b").len(), 3);
    assert_eq!(nav.get("a.b.-1.id").i8(None), 7);
}

#[test]
fn test_set_never_creates_lists() {
    let mut root = Map::new();
    let mut nav = Navigator::new(&mut root);
    assert!(nav.set("items.0", "x"));
    // "0" became a map key, not a list index
    assert!(nav.get("items").node().and_then(Node::as_map).is_some());
    assert_eq!(nav.get("items.0").string(None), "x");
}

// ===== SUB NAVIGATORS =====

#[test]
fn test_inner_navigator() {
    let mut root = sample_map();
    let mut nav = Navigator::new(&mut root);

    let inner = nav.navigator(&mut CompiledQualifier::new("a.b").unwrap()).unwrap();
    assert_eq!(inner.get("0.f").i16(None), 1);
    assert_eq!(inner.get("0.c").i16(-1), -1);

    assert!(nav.sub("a.b.0.j").is_some());
    assert!(nav.sub("a.b.0.e").is_none());
    assert!(nav.sub("missing").is_none());
}

#[test]
fn test_from_node_requires_container() {
    let mut leaf = Node::from(1);
    assert!(Navigator::from_node(&mut leaf).is_none());

    let mut tree = Node::map([("k", "v")]);
    let nav = Navigator::from_node(&mut tree).unwrap();
    assert_eq!(nav.get("k").string(None), "v");
}

// ===== ROOT MANAGEMENT =====

#[test]
fn test_root_replacement() {
    let mut map = sample_map();
    let mut list = json_list(r#"["only"]"#);
    let mut other = Map::new();

    let mut nav = Navigator::default();
    assert!(nav.source().is_none());
    assert!(!nav.set("x", 1));

    nav.set_map_source(&mut map);
    assert_eq!(nav.get("b.c.f").i32(None), 123);

    nav.set_list_source(&mut list);
    assert_eq!(nav.get("0").string(None), "only");

    nav.set_source(&mut other);
    assert!(nav.set("fresh", true));
    assert_eq!(nav.source().and_then(|s| s.len()), Some(1));
}

// ===== FALLIBLE AND MUST ACCESSORS =====

#[test]
fn test_try_get_and_try_set() {
    let mut list = json_list("[1]");
    let mut nav = Navigator::new(&mut list);

    let node = nav.try_get(&mut LazyQualifier::new("0")).unwrap();
    assert_eq!(node, &Node::I64(1));

    let err = nav.try_get(&mut LazyQualifier::new("4")).unwrap_err();
    assert_eq!(err, NavigatorError::NotFound { path: "4".to_string() });

    let err = nav.try_set(&mut LazyQualifier::new("4"), 0).unwrap_err();
    assert!(err.is_rejected());
    let err: pathwise::Error = err.into();
    assert_eq!(err.module(), "navigator");
    assert!(!err.is_not_found());
}

#[test]
fn test_must_get_returns_node() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);
    assert_eq!(nav.must_get(&mut LazyQualifier::new("b.c.f")), &Node::I64(123));
}

#[test]
#[should_panic(expected = "could not get by qualifier")]
fn test_must_get_panics_on_missing_path() {
    let mut root = sample_map();
    let nav = Navigator::new(&mut root);
    nav.must_get(&mut LazyQualifier::new("b.c.missing"));
}

#[test]
#[should_panic(expected = "could not set by qualifier")]
fn test_must_set_panics_on_rejected_write() {
    let mut list = json_list("[]");
    let mut nav = Navigator::new(&mut list);
    nav.must_set(&mut LazyQualifier::new("0"), 1);
}
