//! JSON documents as a node source.
//!
//! Objects and arrays are interior nodes keyed by member name and index;
//! scalars are leaves labelled with their value.

use std::borrow::Cow;
use std::io::Read;

use serde_json::Value;

use crate::error::Result;

use super::node::{Child, Children, TreeNode, indexed};

impl TreeNode for Value {
    fn children(&self) -> Children<'_, Self> {
        match self {
            Value::Object(map) => Box::new(map.iter().map(|(key, node)| Child {
                key: Cow::Borrowed(key.as_str()),
                node,
            })),
            Value::Array(items) => indexed(items),
            _ => Box::new(std::iter::empty::<Child<'_, Value>>()),
        }
    }

    fn has_children(&self) -> bool {
        match self {
            Value::Object(map) => !map.is_empty(),
            Value::Array(items) => !items.is_empty(),
            _ => false,
        }
    }

    fn is_branch(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    fn label(&self) -> Option<Cow<'_, str>> {
        let text = match self {
            Value::String(s) => return Some(Cow::Borrowed(s.as_str())),
            Value::Object(map) => format!("{{{}}}", map.len()),
            Value::Array(items) => format!("[{}]", items.len()),
            scalar => scalar.to_string(),
        };
        Some(Cow::Owned(text))
    }
}

/// Parse a JSON document from a reader.
pub fn read_json<R: Read>(reader: R) -> Result<Value> {
    Ok(serde_json::from_reader(reader)?)
}
