//! Encoding of a [`Value`] into the binary NBT layout.
//!
//! Encoding the same value always produces the same bytes: compound entries
//! are written in their insertion order. Trees nested deeper than
//! [`MAX_DEPTH`] are refused, as the decoder would refuse to read them back.

use std::convert::TryInto;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Tag, Value, MAX_DEPTH};

/// Encode a value as binary NBT with an empty root name.
pub fn to_bytes(v: &Value) -> Result<Vec<u8>> {
    to_bytes_named("", v)
}

/// Encode a value as binary NBT under the given root name.
pub fn to_bytes_named(name: &str, v: &Value) -> Result<Vec<u8>> {
    let mut result = vec![];
    to_writer_named(&mut result, name, v)?;
    Ok(result)
}

/// Encode a value as binary NBT with an empty root name into `writer`.
pub fn to_writer<W: Write>(writer: W, v: &Value) -> Result<()> {
    to_writer_named(writer, "", v)
}

pub fn to_writer_named<W: Write>(mut writer: W, name: &str, v: &Value) -> Result<()> {
    writer.write_tag(v.tag())?;
    writer.write_size_prefixed_str(name)?;
    writer.write_payload(v, 0)
}

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        self.write_u8(tag as u8)?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, key: &str) -> Result<()> {
        let key = cesu8::to_java_cesu8(key);
        let len_bytes: u16 = key.len().try_into().map_err(|_| {
            Error::bespoke(format!("string of {} bytes too long for nbt", key.len()))
        })?;
        self.write_u16::<BigEndian>(len_bytes)?;
        self.write_all(&key)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::bespoke("len too large".to_owned()))?,
        )?;

        Ok(())
    }

    /// `depth` counts the lists and compounds enclosing `v`.
    fn write_payload(&mut self, v: &Value, depth: usize) -> Result<()> {
        match v {
            Value::Byte(v) => self.write_i8(*v)?,
            Value::Short(v) => self.write_i16::<BigEndian>(*v)?,
            Value::Int(v) => self.write_i32::<BigEndian>(*v)?,
            Value::Long(v) => self.write_i64::<BigEndian>(*v)?,
            Value::Float(v) => self.write_f32::<BigEndian>(*v)?,
            Value::Double(v) => self.write_f64::<BigEndian>(*v)?,
            Value::String(v) => self.write_size_prefixed_str(v)?,
            Value::ByteArray(v) => {
                self.write_len(v.len())?;
                let bytes: Vec<u8> = v.iter().map(|b| *b as u8).collect();
                self.write_all(&bytes)?;
            }
            Value::IntArray(v) => {
                self.write_len(v.len())?;
                for i in v.iter() {
                    self.write_i32::<BigEndian>(*i)?;
                }
            }
            Value::LongArray(v) => {
                self.write_len(v.len())?;
                for l in v.iter() {
                    self.write_i64::<BigEndian>(*l)?;
                }
            }
            Value::List(list) => {
                let depth = nested(depth)?;
                self.write_tag(list.element_tag())?;
                self.write_len(list.len())?;
                for item in list.iter() {
                    self.write_payload(item, depth)?;
                }
            }
            Value::Compound(compound) => {
                let depth = nested(depth)?;
                for (name, item) in compound {
                    self.write_tag(item.tag())?;
                    self.write_size_prefixed_str(name)?;
                    self.write_payload(item, depth)?;
                }
                self.write_tag(Tag::End)?;
            }
        }

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}

fn nested(depth: usize) -> Result<usize> {
    if depth >= MAX_DEPTH {
        return Err(Error::too_deep(MAX_DEPTH));
    }
    Ok(depth + 1)
}
