//! nbtstr converts between Minecraft's stringified NBT (sNBT) and an in-memory
//! NBT [`Value`] tree, and flattens that tree into plain [`Native`] data.
//!
//! * For parsing sNBT, see [`from_str`].
//! * For writing sNBT, see [`to_string`] and [`to_writer`].
//! * For plain data without NBT type information, see [`to_native`].
//! * For the NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//!
//! Reading or writing binary NBT is not done here. The [`Value`] tree uses
//! the binary format's [`Tag`] numbering so that a binary codec can produce
//! and consume it directly.
//!
//! # Quick example
//!
//! ```
//! use nbtstr::Native;
//!
//! let value = nbtstr::from_str("{name: Steve, pos: [1.5, 64.0, -3.25], level: 30b}").unwrap();
//! assert_eq!(
//!     r#"{"name":"Steve","pos":[1.5d,64.0d,-3.25d],"level":30b}"#,
//!     nbtstr::to_string(&value)
//! );
//!
//! let native = nbtstr::to_native(&value);
//! assert_eq!(Some(&Native::Int(30)), native.get("level"));
//! ```
//!
//! # Numbers
//!
//! A number's type is chosen by its suffix: `b` byte, `s` short, none for
//! int, `l` long, `f` float and `d` double. The double suffix is optional on
//! a number with a fractional part or exponent. When several readings match,
//! the longest one is used, so `1` is an int, `1.0` is a double and `1.0f`
//! is a float.

use std::io;

pub mod error;
pub mod native;

mod arrays;
mod parser;
mod ser;
mod value;

pub use arrays::*;
pub use error::{Error, Result};
pub use native::Native;
pub use value::*;

#[cfg(test)]
mod test;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object, and the element type of an
    /// empty List.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        Ok(match value {
            0 => Tag::End,
            1 => Tag::Byte,
            2 => Tag::Short,
            3 => Tag::Int,
            4 => Tag::Long,
            5 => Tag::Float,
            6 => Tag::Double,
            7 => Tag::ByteArray,
            8 => Tag::String,
            9 => Tag::List,
            10 => Tag::Compound,
            11 => Tag::IntArray,
            12 => Tag::LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

/// Parse a complete sNBT literal into a [`Value`].
///
/// The whole input must be consumed; surrounding whitespace is allowed.
///
/// ```
/// # use nbtstr::{Tag, Value};
/// let v = nbtstr::from_str("[this,is,a,string,list]").unwrap();
/// match v {
///     Value::List(l) => {
///         assert_eq!(Tag::String, l.tag());
///         assert_eq!(5, l.len());
///     }
///     _ => panic!("expected list"),
/// }
///
/// let err = nbtstr::from_str("{a:1").unwrap_err();
/// assert_eq!(4, err.position());
/// ```
pub fn from_str(input: &str) -> Result<Value> {
    parser::parse(input)
}

/// Write a [`Value`] as canonical sNBT. Strings and compound keys are always
/// quoted, and no whitespace is added.
pub fn to_string(value: &Value) -> String {
    value.to_string()
}

/// Write a [`Value`] as canonical sNBT to a writer. See [`to_string`].
pub fn to_writer<W: io::Write>(mut writer: W, value: &Value) -> io::Result<()> {
    write!(writer, "{}", value)
}

/// Flatten a [`Value`] into plain data, dropping the NBT types.
pub fn to_native(value: &Value) -> Native {
    Native::from(value)
}
