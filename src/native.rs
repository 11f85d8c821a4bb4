//! Plain data flattened out of an NBT [`Value`].
//!
//! [`Native`] drops the NBT types: every integer width becomes an `i64`,
//! both float widths become an `f64`, and the typed arrays become ordinary
//! sequences. There is no way back from a `Native` to a `Value`.
//!
//! `Native` serializes as plain data, so it can be handed to any serde
//! format:
//!
//! ```
//! let v = nbtstr::from_str("{a:1,b:[1,2,3]}").unwrap();
//! let json = serde_json::to_string(&nbtstr::to_native(&v)).unwrap();
//! # let _ = json;
//! ```
//!
//! With the `preserve-order` feature compounds become an ordered map and
//! keep their entry order.

use serde::Serialize;

use crate::Value;

#[cfg(not(feature = "preserve-order"))]
pub type Map = std::collections::HashMap<String, Native>;

#[cfg(feature = "preserve-order")]
pub type Map = indexmap::IndexMap<String, Native>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Native {
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<Native>),
    Map(Map),
}

impl Native {
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Native::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Native::Int(v) => Some(v as f64),
            Native::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Native::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Native]> {
        match self {
            Native::Seq(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a key, if this is a map.
    pub fn get(&self, key: &str) -> Option<&Native> {
        match self {
            Native::Map(m) => m.get(key),
            _ => None,
        }
    }
}

impl From<&Value> for Native {
    fn from(value: &Value) -> Self {
        match value {
            Value::Byte(v) => Native::Int(i64::from(*v)),
            Value::Short(v) => Native::Int(i64::from(*v)),
            Value::Int(v) => Native::Int(i64::from(*v)),
            Value::Long(v) => Native::Int(*v),
            Value::Float(v) => Native::Float(f64::from(*v)),
            Value::Double(v) => Native::Float(*v),
            Value::String(s) => Native::String(s.clone()),
            Value::ByteArray(data) => ints(data.iter().map(|&v| i64::from(v))),
            Value::IntArray(data) => ints(data.iter().map(|&v| i64::from(v))),
            Value::LongArray(data) => ints(data.iter().copied()),
            Value::List(list) => Native::Seq(list.iter().map(Native::from).collect()),
            Value::Compound(compound) => Native::Map(
                compound
                    .iter()
                    .map(|(name, v)| (name.clone(), Native::from(v)))
                    .collect(),
            ),
        }
    }
}

fn ints(values: impl Iterator<Item = i64>) -> Native {
    Native::Seq(values.map(Native::Int).collect())
}
