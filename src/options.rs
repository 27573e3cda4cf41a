//! Options accepted by [`Registry::define`](crate::registry::Registry::define).
//!
//! The typed builder covers the Rust call sites. [`DefineOptions::from_value`]
//! accepts the untyped map form (`{"object": .., "id": .., "seal": ..}`) and
//! rejects anything outside the recognized keys before the registry is touched.
use crate::error::{EnumFieldError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub const OPTION_OBJECT: &str = "object";
pub const OPTION_ID: &str = "id";
pub const OPTION_SEAL: &str = "seal";

pub const RECOGNIZED_OPTIONS: &[&str] = &[OPTION_OBJECT, OPTION_ID, OPTION_SEAL];

#[derive(Debug, Clone)]
pub struct DefineOptions<T> {
    pub(crate) object: Option<T>,
    pub(crate) id: Option<i64>,
    pub(crate) seal: Option<bool>,
}

impl<T> Default for DefineOptions<T> {
    fn default() -> Self {
        Self {
            object: None,
            id: None,
            seal: None,
        }
    }
}

impl<T> DefineOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register this value instead of asking the factory for one.
    pub fn object(mut self, object: T) -> Self {
        self.object = Some(object);
        self
    }

    /// Explicit id; bypasses auto-assignment. Checked by `define`.
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn seal(mut self, seal: bool) -> Self {
        self.seal = Some(seal);
        self
    }

    pub fn has_object(&self) -> bool {
        self.object.is_some()
    }
}

impl<T: DeserializeOwned> DefineOptions<T> {
    /// Parse an options map.
    ///
    /// `null` is treated as "no options". Unknown keys are all reported in a
    /// single `InvalidOptions`. `id` must be a JSON integer; `seal` must be a
    /// bool; a `null` object falls back to the factory.
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(EnumFieldError::InvalidOptions(vec![format!(
                    "expected an options map, got {other}"
                )]))
            }
        };
        let mut unknown: Vec<String> = map
            .keys()
            .filter(|k| !RECOGNIZED_OPTIONS.contains(&k.as_str()))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            unknown.sort();
            return Err(EnumFieldError::InvalidOptions(unknown));
        }

        let id = match map.get(OPTION_ID) {
            None | Some(Value::Null) => None,
            Some(raw) => Some(parse_candidate_id(raw)?),
        };
        let seal = match map.get(OPTION_SEAL) {
            None | Some(Value::Null) => None,
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                return Err(EnumFieldError::InvalidOptions(vec![format!(
                    "{OPTION_SEAL} must be a bool, got {other}"
                )]))
            }
        };
        let object = match map.get(OPTION_OBJECT) {
            None | Some(Value::Null) => None,
            Some(raw) => Some(
                serde_json::from_value(raw.clone())
                    .map_err(|e| EnumFieldError::InvalidObject(e.to_string()))?,
            ),
        };
        Ok(Self { object, id, seal })
    }
}

// 仅接受 JSON 整数；3.5、"5" 之类一律视为非法 id（正数校验留给 define）
fn parse_candidate_id(raw: &Value) -> Result<i64> {
    match raw {
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| EnumFieldError::InvalidId(n.to_string())),
        other => Err(EnumFieldError::InvalidId(other.to_string())),
    }
}
