//! Writing a [`Value`] as sNBT text.
//!
//! The output is compact and always reads back as an equal value:
//!
//! * every number carries its type suffix except Int,
//! * floats always carry `f` or `d`,
//! * string values are always double-quoted,
//! * compound keys are only quoted when they contain characters outside
//!   `[A-Za-z0-9_\-.+]`.
//!
//! Trees nested deeper than [`tagtree::MAX_DEPTH`] lists and compounds are
//! refused, since [`crate::from_str`] would not read them back.

use std::io::Write;

use tagtree::{Compound, List, Value, MAX_DEPTH};

use crate::{
    error::{Error, Result},
    parser::is_simple_string,
};

/// Write a value as sNBT into a string.
pub fn to_string(v: &Value) -> Result<String> {
    let mut out = Vec::new();
    to_writer(&mut out, v)?;
    String::from_utf8(out).map_err(|e| Error::bespoke(e.to_string()))
}

/// Write a value as sNBT into `writer`.
pub fn to_writer<W: Write>(mut writer: W, v: &Value) -> Result<()> {
    write_value(&mut writer, v, 0)
}

pub(crate) fn write_escaped_str<W: Write>(mut writer: W, v: &str) -> Result<()> {
    writer.write_all(b"\"")?;
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'"' && byte != b'\\' {
            continue;
        }
        if start < i {
            writer.write_all(v[start..i].as_bytes())?;
        }
        writer.write_all(&[b'\\', byte])?;
        start = i + 1;
    }
    if start != bytes.len() {
        writer.write_all(v[start..].as_bytes())?;
    }
    Ok(writer.write_all(b"\"")?)
}

fn write_int<W: Write, I: itoa::Integer>(writer: &mut W, v: I, suffix: &[u8]) -> Result<()> {
    let mut buffer = itoa::Buffer::new();
    writer.write_all(buffer.format(v).as_bytes())?;
    Ok(writer.write_all(suffix)?)
}

fn write_float<W: Write, F: ryu::Float>(writer: &mut W, v: F, suffix: &[u8]) -> Result<()> {
    let mut buffer = ryu::Buffer::new();
    writer.write_all(buffer.format(v).as_bytes())?;
    Ok(writer.write_all(suffix)?)
}

fn write_array<W: Write, I: itoa::Integer + Copy>(
    writer: &mut W,
    prefix: &[u8],
    items: &[I],
    suffix: &[u8],
) -> Result<()> {
    writer.write_all(prefix)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_int(writer, *item, suffix)?;
    }
    Ok(writer.write_all(b"]")?)
}

fn write_list<W: Write>(writer: &mut W, list: &List, depth: usize) -> Result<()> {
    writer.write_all(b"[")?;
    for (i, item) in list.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        write_value(writer, item, depth)?;
    }
    Ok(writer.write_all(b"]")?)
}

fn write_compound<W: Write>(writer: &mut W, compound: &Compound, depth: usize) -> Result<()> {
    writer.write_all(b"{")?;
    for (i, (key, item)) in compound.iter().enumerate() {
        if i > 0 {
            writer.write_all(b",")?;
        }
        if is_simple_string(key) {
            writer.write_all(key.as_bytes())?;
        } else {
            write_escaped_str(&mut *writer, key)?;
        }
        writer.write_all(b":")?;
        write_value(writer, item, depth)?;
    }
    Ok(writer.write_all(b"}")?)
}

fn write_value<W: Write>(writer: &mut W, v: &Value, depth: usize) -> Result<()> {
    match v {
        Value::Byte(v) => write_int(writer, *v, b"b"),
        Value::Short(v) => write_int(writer, *v, b"s"),
        Value::Int(v) => write_int(writer, *v, b""),
        Value::Long(v) => write_int(writer, *v, b"l"),
        Value::Float(v) => write_float(writer, *v, b"f"),
        Value::Double(v) => write_float(writer, *v, b"d"),
        Value::String(v) => write_escaped_str(&mut *writer, v),
        Value::ByteArray(v) => write_array(writer, b"[B;", v.as_slice(), b"b"),
        Value::IntArray(v) => write_array(writer, b"[I;", v.as_slice(), b""),
        Value::LongArray(v) => write_array(writer, b"[L;", v.as_slice(), b"l"),
        Value::List(v) => write_list(writer, v, nested(depth)?),
        Value::Compound(v) => write_compound(writer, v, nested(depth)?),
    }
}

fn nested(depth: usize) -> Result<usize> {
    if depth >= MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }
    Ok(depth + 1)
}
