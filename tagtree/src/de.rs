//! Decoding of the binary NBT layout into a [`Value`].
//!
//! The input is a named root tag: one tag byte, a big-endian `u16` name
//! length, the name in Java's modified UTF-8, then the payload. Any tag other
//! than `End` may be the root, though in practice it is nearly always a
//! compound.
//!
//! Decoding never panics on malformed input. Every length read from the input
//! is checked against what remains before anything is allocated, so a
//! corrupt count cannot make the decoder reserve gigabytes.
//!
//! ```
//! # use tagtree::{from_bytes_named, Value};
//! let some_bytes = [10, 0, 0, 3, 0, 3, 105, 110, 116, 0, 0, 222, 173, 0];
//!
//! let (name, value) = from_bytes_named(&some_bytes).unwrap();
//! assert_eq!(name, "");
//! assert_eq!(value.as_compound().unwrap()["int"], 0xdead);
//! ```

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Compound, IntArray, List, LongArray, Tag, Value, MAX_DEPTH,
};

/// Options for decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    max_depth: usize,
}

impl DeOpts {
    pub fn new() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }

    /// Maximum number of compounds and lists that may be nested inside each
    /// other, counting the root. Deeper input fails to decode.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a value from binary NBT, discarding the root name.
pub fn from_bytes(input: &[u8]) -> Result<Value> {
    from_bytes_named(input).map(|(_, value)| value)
}

/// Decode a value from binary NBT, returning the root name alongside it.
pub fn from_bytes_named(input: &[u8]) -> Result<(String, Value)> {
    from_bytes_with_opts(input, DeOpts::new())
}

/// Decode a value from binary NBT with the given options. The whole input
/// must be consumed by the root value.
pub fn from_bytes_with_opts(input: &[u8], opts: DeOpts) -> Result<(String, Value)> {
    let mut decoder = Decoder {
        input,
        opts,
        depth: 0,
    };

    let tag = decoder.consume_tag()?;
    if tag == Tag::End {
        return Err(Error::no_root());
    }

    let name = decoder.consume_str()?;
    let value = decoder.read_payload(tag)?;

    if !decoder.input.is_empty() {
        return Err(Error::trailing_input(decoder.input.len()));
    }

    Ok((name, value))
}

fn try_size(size: i32, multiplier: usize) -> Result<usize> {
    let size: usize = size.try_into().map_err(|_| Error::negative_len(size))?;

    size.checked_mul(multiplier)
        .ok_or_else(|| Error::bespoke("size too large".to_string()))
}

/// The fewest bytes a payload of the given tag can occupy. Used to reject
/// list counts that cannot possibly fit in the remaining input.
fn min_payload_size(tag: Tag) -> usize {
    match tag {
        Tag::End => 0,
        Tag::Byte | Tag::Compound => 1,
        Tag::Short | Tag::String => 2,
        Tag::Int | Tag::Float | Tag::ByteArray | Tag::IntArray | Tag::LongArray => 4,
        Tag::List => 5,
        Tag::Long | Tag::Double => 8,
    }
}

fn eof(_: std::io::Error) -> Error {
    // Reads from a slice only fail by running out.
    Error::unexpected_eof()
}

struct Decoder<'a> {
    input: &'a [u8],
    opts: DeOpts,
    depth: usize,
}

impl<'a> Decoder<'a> {
    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.opts.max_depth {
            return Err(Error::too_deep(self.opts.max_depth));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn consume_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.input.len() {
            return Err(Error::unexpected_eof());
        }
        let (bytes, rest) = self.input.split_at(n);
        self.input = rest;
        Ok(bytes)
    }

    fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.input.read_u8().map_err(eof)?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    fn consume_str(&mut self) -> Result<String> {
        let len = self.input.read_u16::<BigEndian>().map_err(eof)? as usize;
        let bytes = self.consume_bytes(len)?;

        Ok(cesu8::from_java_cesu8(bytes)
            .map_err(|_| Error::nonunicode_string(bytes))?
            .into_owned())
    }

    /// Reads an array length and makes sure `len * elem_size` bytes remain.
    fn consume_array_len(&mut self, elem_size: usize) -> Result<usize> {
        let len = self.input.read_i32::<BigEndian>().map_err(eof)?;
        let size = try_size(len, elem_size)?;
        if size > self.input.len() {
            return Err(Error::unexpected_eof());
        }
        Ok(len as usize)
    }

    fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => return Err(Error::invalid_tag(0)),
            Tag::Byte => Value::Byte(self.input.read_i8().map_err(eof)?),
            Tag::Short => Value::Short(self.input.read_i16::<BigEndian>().map_err(eof)?),
            Tag::Int => Value::Int(self.input.read_i32::<BigEndian>().map_err(eof)?),
            Tag::Long => Value::Long(self.input.read_i64::<BigEndian>().map_err(eof)?),
            Tag::Float => Value::Float(self.input.read_f32::<BigEndian>().map_err(eof)?),
            Tag::Double => Value::Double(self.input.read_f64::<BigEndian>().map_err(eof)?),
            Tag::String => Value::String(self.consume_str()?),
            Tag::ByteArray => {
                let len = self.consume_array_len(1)?;
                let bytes = self.consume_bytes(len)?;
                Value::ByteArray(bytes.iter().map(|b| *b as i8).collect())
            }
            Tag::IntArray => {
                let len = self.consume_array_len(4)?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(self.input.read_i32::<BigEndian>().map_err(eof)?);
                }
                Value::IntArray(IntArray::new(data))
            }
            Tag::LongArray => {
                let len = self.consume_array_len(8)?;
                let mut data = Vec::with_capacity(len);
                for _ in 0..len {
                    data.push(self.input.read_i64::<BigEndian>().map_err(eof)?);
                }
                Value::LongArray(LongArray::new(data))
            }
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
        })
    }

    fn read_list(&mut self) -> Result<List> {
        let element_tag = self.consume_tag()?;
        let len = self.input.read_i32::<BigEndian>().map_err(eof)?;

        if len > 0 && element_tag == Tag::End {
            return Err(Error::list_of_end(len));
        }

        let min_size = try_size(len, min_payload_size(element_tag))?;
        if min_size > self.input.len() {
            return Err(Error::unexpected_eof());
        }

        self.enter()?;
        let mut items = Vec::with_capacity(len as usize);
        for _ in 0..len {
            items.push(self.read_payload(element_tag)?);
        }
        self.leave();

        Ok(List::from_parts(element_tag, items))
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        let mut compound = Compound::new();
        loop {
            let tag = self.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.consume_str()?;
            let value = self.read_payload(tag)?;
            compound.insert(name, value);
        }
        self.leave();

        Ok(compound)
    }
}

