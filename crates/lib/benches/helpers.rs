//! Shared helpers for benchmark tests

use pathwise::{Map, Node};

/// Builds a map nested `depth` levels deep along the keys `k0.k1...`, with a
/// list of `width` numbers at the bottom under `items`.
pub fn nested_map(depth: usize, width: usize) -> Map {
    let mut node = Node::map([("items", Node::list(0..width as i64))]);
    for level in (0..depth).rev() {
        node = Node::map([(format!("k{level}"), node)]);
    }
    match node {
        Node::Map(map) => map,
        _ => unreachable!("the loop always wraps in a map"),
    }
}

/// Dotted path addressing the last list element of [`nested_map`].
pub fn leaf_path(depth: usize) -> String {
    let mut path: Vec<String> = (0..depth).map(|level| format!("k{level}")).collect();
    path.push("items".to_string());
    path.push("-1".to_string());
    path.join(".")
}

/// Dotted path of `depth` fresh keys, none of which exist yet.
pub fn fresh_path(depth: usize) -> String {
    (0..depth)
        .map(|level| format!("new{level}"))
        .collect::<Vec<_>>()
        .join(".")
}
