//! serde support and `serde_json` conversions for [`Node`].
//!
//! Serialization maps every variant onto the serde data model: numbers keep
//! their width, complex numbers become `[re, im]` pairs and bytes use
//! `serialize_bytes`. Custom sources have no generic representation and fail
//! to serialize.
//!
//! Deserialization produces the shapes a self-describing format reports.
//! With JSON that means `I64` for integers that fit, `U64` above that, `F64`
//! for everything else, and `Text`, `List` and `Map` for the rest.

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{Error as _, SerializeMap, SerializeSeq},
};

use super::{List, Map, Node, NodeError};

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(v) => serializer.serialize_bool(*v),
            Node::I8(v) => serializer.serialize_i8(*v),
            Node::I16(v) => serializer.serialize_i16(*v),
            Node::I32(v) => serializer.serialize_i32(*v),
            Node::I64(v) => serializer.serialize_i64(*v),
            Node::Isize(v) => serializer.serialize_i64(*v as i64),
            Node::U8(v) => serializer.serialize_u8(*v),
            Node::U16(v) => serializer.serialize_u16(*v),
            Node::U32(v) => serializer.serialize_u32(*v),
            Node::U64(v) => serializer.serialize_u64(*v),
            Node::Usize(v) => serializer.serialize_u64(*v as u64),
            Node::F32(v) => serializer.serialize_f32(*v),
            Node::F64(v) => serializer.serialize_f64(*v),
            Node::Complex64(c) => (c.re, c.im).serialize(serializer),
            Node::Complex128(c) => (c.re, c.im).serialize(serializer),
            Node::Text(s) => serializer.serialize_str(s),
            Node::Bytes(b) => serializer.serialize_bytes(b),
            Node::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for item in list {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Node::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Node::Source(source) => Err(S::Error::custom(format!(
                "custom source {source:?} cannot be serialized"
            ))),
        }
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = Node;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any self-describing value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Node, E> {
        Ok(Node::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Node, E> {
        Ok(Node::I64(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Node, E> {
        Ok(i64::try_from(v).map_or(Node::U64(v), Node::I64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Node, E> {
        Ok(Node::F64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Node, E> {
        Ok(Node::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Node, E> {
        Ok(Node::Text(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Node, E> {
        Ok(Node::Bytes(v.to_vec()))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Node, E> {
        Ok(Node::Bytes(v))
    }

    fn visit_unit<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_none<E>(self) -> Result<Node, E> {
        Ok(Node::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Node, D::Error>
    where
        D: Deserializer<'de>,
    {
        Node::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Node, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut list = List::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Node>()? {
            list.push(item);
        }
        Ok(Node::List(list))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Node, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Node>()? {
            map.insert(key, value);
        }
        Ok(Node::Map(map))
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

impl Node {
    /// Parses a JSON document into a node tree.
    ///
    /// ```
    /// # use pathwise::Node;
    /// let node = Node::from_json_str(r#"{"a": [1, 2.5, "x"]}"#)?;
    /// assert_eq!(node.to_string(), "{a: [1, 2.5, x]}");
    /// # Ok::<(), pathwise::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts this node into a `serde_json::Value`.
    ///
    /// # Errors
    /// Fails for custom sources and for non-finite floats, which JSON cannot
    /// represent.
    pub fn to_json(&self) -> Result<serde_json::Value, NodeError> {
        serde_json::Value::try_from(self)
    }

    /// Serializes this node as a JSON string.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match value {
            Json::Null => Node::Null,
            Json::Bool(b) => Node::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Node::U64(u)
                } else {
                    // Non-integers always have an f64 form without arbitrary precision
                    Node::F64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Node::Text(s),
            Json::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            Json::Object(entries) => Node::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Node::from(v)))
                    .collect(),
            ),
        }
    }
}

impl TryFrom<&Node> for serde_json::Value {
    type Error = NodeError;

    fn try_from(node: &Node) -> Result<Self, Self::Error> {
        use serde_json::{Number, Value as Json};

        fn float(node: &Node, v: f64) -> Result<Json, NodeError> {
            Number::from_f64(v)
                .map(Json::Number)
                .ok_or_else(|| NodeError::Unrepresentable {
                    kind: node.kind(),
                    reason: format!("{v} is not a finite number"),
                })
        }

        Ok(match node {
            Node::Null => Json::Null,
            Node::Bool(b) => Json::Bool(*b),
            Node::I8(v) => Json::from(*v),
            Node::I16(v) => Json::from(*v),
            Node::I32(v) => Json::from(*v),
            Node::I64(v) => Json::from(*v),
            Node::Isize(v) => Json::from(*v),
            Node::U8(v) => Json::from(*v),
            Node::U16(v) => Json::from(*v),
            Node::U32(v) => Json::from(*v),
            Node::U64(v) => Json::from(*v),
            Node::Usize(v) => Json::from(*v),
            Node::F32(v) => float(node, f64::from(*v))?,
            Node::F64(v) => float(node, *v)?,
            Node::Complex64(c) => Json::Array(vec![
                float(node, f64::from(c.re))?,
                float(node, f64::from(c.im))?,
            ]),
            Node::Complex128(c) => Json::Array(vec![float(node, c.re)?, float(node, c.im)?]),
            Node::Text(s) => Json::String(s.clone()),
            Node::Bytes(b) => Json::Array(b.iter().map(|byte| Json::from(*byte)).collect()),
            Node::List(list) => Json::Array(
                list.iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Node::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| Ok((k.clone(), serde_json::Value::try_from(v)?)))
                    .collect::<Result<_, NodeError>>()?,
            ),
            Node::Source(_) => {
                return Err(NodeError::Unrepresentable {
                    kind: node.kind(),
                    reason: "custom sources have no JSON form".to_string(),
                });
            }
        })
    }
}
