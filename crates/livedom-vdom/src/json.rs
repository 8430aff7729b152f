//! Wire form of snapshots
//!
//! A JSON string is a text node. An object `{ "type", "props", "children" }`
//! is an element; all three keys are required. The whole tree is decoded
//! before anything touches the host, so a malformed snapshot never causes a
//! partial patch.

use serde_json::{Map, Value};

use crate::{Element, Node, PropValue, Props, ReconcileConfig, VdomError, VdomResult};

impl Node {
    /// Decode a snapshot from its JSON form
    pub fn from_json(value: &Value) -> VdomResult<Node> {
        decode_node(value, "$", &ReconcileConfig::DEFAULT)
    }

    /// Decode with non-default property naming
    pub fn from_json_with(value: &Value, config: &ReconcileConfig) -> VdomResult<Node> {
        decode_node(value, "$", config)
    }

    /// Encode to the JSON form accepted by `from_json`
    pub fn to_json(&self) -> Value {
        match self {
            Node::Text(text) => Value::String(text.clone()),
            Node::Element(element) => {
                let props: Map<String, Value> = element
                    .props
                    .iter()
                    .map(|(name, value)| (name.clone(), encode_prop(value)))
                    .collect();
                let mut object = Map::new();
                object.insert("type".into(), Value::String(element.tag.clone()));
                object.insert("props".into(), Value::Object(props));
                object.insert(
                    "children".into(),
                    Value::Array(element.children.iter().map(Node::to_json).collect()),
                );
                Value::Object(object)
            }
        }
    }
}

fn encode_prop(value: &PropValue) -> Value {
    match value {
        PropValue::Bool(b) => Value::Bool(*b),
        PropValue::Str(s) => Value::String(s.clone()),
        PropValue::Custom => Value::Object(Map::new()),
    }
}

fn decode_node(value: &Value, path: &str, config: &ReconcileConfig) -> VdomResult<Node> {
    let object = match value {
        Value::String(text) => return Ok(Node::Text(text.clone())),
        Value::Object(object) => object,
        other => {
            return Err(VdomError::malformed(
                path,
                format!("expected a string or an object, found {}", kind_of(other)),
            ));
        }
    };

    let tag = match object.get("type") {
        Some(Value::String(tag)) if !tag.is_empty() => tag.clone(),
        Some(Value::String(_)) => return Err(VdomError::malformed(path, "element has an empty tag")),
        Some(other) => {
            return Err(VdomError::malformed(path, format!("`type` must be a string, found {}", kind_of(other))));
        }
        None => return Err(VdomError::malformed(path, "element is missing `type`")),
    };

    let props = match object.get("props") {
        Some(Value::Object(props)) => decode_props(props, config),
        Some(other) => {
            return Err(VdomError::malformed(path, format!("`props` must be an object, found {}", kind_of(other))));
        }
        None => return Err(VdomError::malformed(path, "element is missing `props`")),
    };

    let children = match object.get("children") {
        Some(Value::Array(children)) => children,
        Some(other) => {
            return Err(VdomError::malformed(path, format!("`children` must be an array, found {}", kind_of(other))));
        }
        None => return Err(VdomError::malformed(path, "element is missing `children`")),
    };

    // Null entries are skipped so stored children are never absent
    let children = children
        .iter()
        .enumerate()
        .filter(|(_, child)| !child.is_null())
        .map(|(i, child)| decode_node(child, &format!("{}.children[{}]", path, i), config))
        .collect::<VdomResult<Vec<_>>>()?;

    Ok(Node::Element(Element { tag, props, children }))
}

fn decode_props(props: &Map<String, Value>, config: &ReconcileConfig) -> Props {
    props
        .iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::Null => return None,
                Value::Bool(b) => PropValue::Bool(*b),
                Value::String(s) => PropValue::Str(s.clone()),
                Value::Number(n) => PropValue::Str(n.to_string()),
                Value::Array(_) | Value::Object(_) if config.is_custom_property(name) => PropValue::Custom,
                Value::Array(_) | Value::Object(_) => PropValue::Str(value.to_string()),
            };
            Some((name.clone(), value))
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
