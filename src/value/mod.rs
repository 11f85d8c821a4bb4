mod list;

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

use crate::{error::Error, ser, ByteArray, IntArray, LongArray, Tag};

pub use self::list::List;

/// The entries of an NBT Compound, in the order they were declared.
pub type Compound = IndexMap<String, Value>;

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursive. The name of a compound entry is the key it is stored under;
/// values themselves carry no name.
///
/// Values are usually made by parsing sNBT:
///
/// ```
/// # use nbtstr::Value;
/// let v: Value = "{id:stone,Count:1b}".parse().unwrap();
/// match &v {
///     Value::Compound(c) => assert_eq!(Some(&Value::Byte(1)), c.get("Count")),
///     _ => panic!("expected compound"),
/// }
/// assert_eq!(r#"{"id":"stone","Count":1b}"#, v.to_string());
/// ```
///
/// Two compounds are equal only if their entries are equal and in the same
/// order.
#[derive(Debug, Clone)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(List),
    Compound(Compound),
}

impl Value {
    /// The tag this value would be written with in binary NBT.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::String(_) => Tag::String,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            Value::Float(v) => Some(v as i64),
            Value::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::ByteArray(a), Value::ByteArray(b)) => a == b,
            (Value::IntArray(a), Value::IntArray(b)) => a == b,
            (Value::LongArray(a), Value::LongArray(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // IndexMap's own equality ignores order.
            (Value::Compound(a), Value::Compound(b)) => {
                a.len() == b.len() && a.iter().eq(b.iter())
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ser::write_value(f, self)
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse(s)
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(List::new(values))
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

// ------------- Arbitrary impls -------------

#[cfg(feature = "arbitrary1")]
fn arb_values<'a, T, F>(
    u: &mut arbitrary::Unstructured<'a>,
    f: F,
) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
fn arb_compound(u: &mut arbitrary::Unstructured) -> arbitrary::Result<Compound> {
    let entries: Vec<(String, Value)> = u.arbitrary()?;
    Ok(entries.into_iter().collect())
}

// Lists built here are homogeneous, matching what binary NBT can hold.
#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    let tag = u.arbitrary::<Tag>()?;
    let values = match tag {
        Tag::End => Vec::new(),
        Tag::Byte => arb_values(u, Value::Byte)?,
        Tag::Short => arb_values(u, Value::Short)?,
        Tag::Int => arb_values(u, Value::Int)?,
        Tag::Long => arb_values(u, Value::Long)?,
        Tag::Float => arb_values(u, Value::Float)?,
        Tag::Double => arb_values(u, Value::Double)?,
        Tag::ByteArray => arb_values(u, Value::ByteArray)?,
        Tag::String => arb_values(u, Value::String)?,
        Tag::IntArray => arb_values(u, Value::IntArray)?,
        Tag::LongArray => arb_values(u, Value::LongArray)?,
        Tag::List => {
            let len = u.arbitrary_len::<Value>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(Value::List(arb_list(u)?));
            }
            v
        }
        Tag::Compound => {
            let len = u.arbitrary_len::<Value>()?;
            let mut v = vec![];
            for _ in 0..len {
                v.push(Value::Compound(arb_compound(u)?));
            }
            v
        }
    };
    Ok(List::with_tag(tag, values))
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Value::Byte(u.arbitrary()?),
            Tag::Short => Value::Short(u.arbitrary()?),
            Tag::Int => Value::Int(u.arbitrary()?),
            Tag::Long => Value::Long(u.arbitrary()?),
            Tag::Float => Value::Float(u.arbitrary()?),
            Tag::Double => Value::Double(u.arbitrary()?),
            Tag::ByteArray => Value::ByteArray(u.arbitrary()?),
            Tag::String => Value::String(u.arbitrary()?),
            Tag::IntArray => Value::IntArray(u.arbitrary()?),
            Tag::LongArray => Value::LongArray(u.arbitrary()?),
            Tag::List => Value::List(arb_list(u)?),
            Tag::Compound => Value::Compound(arb_compound(u)?),
        })
    }
}
