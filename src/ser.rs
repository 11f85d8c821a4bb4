//! Writes a [`Value`] as canonical sNBT.
//!
//! Numbers always carry their suffix (except Int), strings and compound keys
//! are always double quoted, and typed arrays are written as `[B; 1,2,3]`
//! without per-element suffixes. Parsing the output gives back an equal
//! value for every value with finite floats.

use std::fmt::Write;

use crate::{Tag, Value};

pub(crate) fn write_value<W: Write + ?Sized>(w: &mut W, value: &Value) -> std::fmt::Result {
    match value {
        Value::Byte(v) => {
            w.write_str(itoa::Buffer::new().format(*v))?;
            w.write_char('b')
        }
        Value::Short(v) => {
            w.write_str(itoa::Buffer::new().format(*v))?;
            w.write_char('s')
        }
        Value::Int(v) => w.write_str(itoa::Buffer::new().format(*v)),
        Value::Long(v) => {
            w.write_str(itoa::Buffer::new().format(*v))?;
            w.write_char('l')
        }
        Value::Float(v) => {
            w.write_str(ryu::Buffer::new().format(*v))?;
            w.write_char('f')
        }
        Value::Double(v) => {
            w.write_str(ryu::Buffer::new().format(*v))?;
            w.write_char('d')
        }
        Value::String(s) => write_escaped_str(w, s),
        Value::ByteArray(data) => write_array(w, Tag::ByteArray, data.as_slice()),
        Value::IntArray(data) => write_array(w, Tag::IntArray, data.as_slice()),
        Value::LongArray(data) => write_array(w, Tag::LongArray, data.as_slice()),
        Value::List(list) => {
            w.write_char('[')?;
            for (i, v) in list.iter().enumerate() {
                if i > 0 {
                    w.write_char(',')?;
                }
                write_value(w, v)?;
            }
            w.write_char(']')
        }
        Value::Compound(compound) => {
            w.write_char('{')?;
            for (i, (name, v)) in compound.iter().enumerate() {
                if i > 0 {
                    w.write_char(',')?;
                }
                write_escaped_str(w, name)?;
                w.write_char(':')?;
                write_value(w, v)?;
            }
            w.write_char('}')
        }
    }
}

fn write_array<W, T>(w: &mut W, tag: Tag, data: &[T]) -> std::fmt::Result
where
    W: Write + ?Sized,
    T: itoa::Integer + Copy,
{
    let letter = match tag {
        Tag::ByteArray => 'B',
        Tag::IntArray => 'I',
        _ => 'L',
    };
    w.write_char('[')?;
    w.write_char(letter)?;
    w.write_str("; ")?;

    let mut buffer = itoa::Buffer::new();
    for (i, v) in data.iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        w.write_str(buffer.format(*v))?;
    }
    w.write_char(']')
}

fn write_escaped_str<W: Write + ?Sized>(w: &mut W, v: &str) -> std::fmt::Result {
    w.write_char('"')?;
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'"' && byte != b'\\' {
            continue;
        }
        if start < i {
            w.write_str(&v[start..i])?;
        }
        if byte == b'"' {
            w.write_str("\\\"")?;
        } else {
            w.write_str("\\\\")?;
        }
        start = i + 1;
    }
    if start != bytes.len() {
        w.write_str(&v[start..])?;
    }
    w.write_char('"')
}
