use pathwise::{List, Map, Node, Source, constants::APPEND_MARKER};

/// Nested document shared by the navigator and value tests.
pub const SAMPLE_JSON: &str = r#"{
    "a": {
        "b": [
            {"c": 3.14, "d": true, "e": "hello", "f": 1, "g": 1.5, "h": 1111111111111111111, "i": ["a", "b"], "j": {"k": "l"}},
            {"last": true}
        ]
    },
    "b": {
        "c": {
            "f": 123,
            "a.b": 321,
            "bytes": "AQID"
        }
    }
}"#;

/// Decodes [`SAMPLE_JSON`] into its root map.
pub fn sample_map() -> Map {
    match Node::from_json_str(SAMPLE_JSON).expect("sample document parses") {
        Node::Map(map) => map,
        other => panic!("Expected a map root, got {:?}", other.kind()),
    }
}

/// Builds a list node from JSON text.
pub fn json_list(json: &str) -> List {
    match Node::from_json_str(json).expect("list document parses") {
        Node::List(list) => list,
        other => panic!("Expected a list root, got {:?}", other.kind()),
    }
}

/// A container that only accepts keys with a fixed prefix.
#[derive(Debug, Clone, Default)]
pub struct PrefixedSource {
    pub prefix: String,
    pub entries: Map,
}

impl PrefixedSource {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            entries: Map::new(),
        }
    }
}

impl Source for PrefixedSource {
    fn get(&self, segment: &str) -> Option<&Node> {
        self.entries.get(segment)
    }

    fn get_mut(&mut self, segment: &str) -> Option<&mut Node> {
        self.entries.get_mut(segment)
    }

    fn set(&mut self, segment: &str, value: Node) -> bool {
        if !segment.starts_with(&self.prefix) {
            return false;
        }
        self.entries.insert(segment.to_string(), value);
        true
    }

    fn set_entry(&mut self, segment: &str, value: Node) -> Option<&mut Node> {
        if !segment.starts_with(&self.prefix) {
            return None;
        }
        Some(self.entries.entry(segment.to_string()).insert_entry(value).into_mut())
    }

    fn len(&self) -> Option<usize> {
        Some(self.entries.len())
    }

    fn clone_source(&self) -> Box<dyn Source> {
        Box::new(self.clone())
    }
}

/// A push-only stack that accepts nothing but the append marker.
#[derive(Debug, Clone, Default)]
pub struct StackSource {
    pub items: List,
}

impl Source for StackSource {
    fn get(&self, segment: &str) -> Option<&Node> {
        let index: usize = segment.parse().ok()?;
        self.items.as_slice().get(index)
    }

    fn get_mut(&mut self, segment: &str) -> Option<&mut Node> {
        let index: usize = segment.parse().ok()?;
        self.items.as_mut_slice().get_mut(index)
    }

    fn set(&mut self, segment: &str, value: Node) -> bool {
        self.set_entry(segment, value).is_some()
    }

    fn set_entry(&mut self, segment: &str, value: Node) -> Option<&mut Node> {
        if segment != APPEND_MARKER {
            return None;
        }
        self.items.push(value);
        self.items.last_mut()
    }

    fn len(&self) -> Option<usize> {
        Some(self.items.len())
    }

    fn clone_source(&self) -> Box<dyn Source> {
        Box::new(self.clone())
    }
}
