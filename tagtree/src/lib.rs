//! tagtree holds NBT data as an owned tree of [`Value`]s and converts it to and
//! from the binary NBT layout used by *Minecraft*.
//!
//! * For the tree itself see [`Value`], [`List`] and [`Compound`].
//! * For NBT array types see [`ByteArray`], [`IntArray`], and [`LongArray`].
//! * For the binary form see [`from_bytes`] and [`to_bytes`].
//!
//! The stringified form (SNBT) lives in the sibling `tagsnbt` crate.
//!
//! # Quick example
//!
//! ```
//! use tagtree::{Compound, List, Value};
//!
//! let mut list = List::new();
//! list.push("x").unwrap();
//! list.push("y").unwrap();
//!
//! let mut root = Compound::new();
//! root.insert("a", 5);
//! root.insert("b", list);
//! let root = Value::Compound(root);
//!
//! let bytes = tagtree::to_bytes(&root).unwrap();
//! let back = tagtree::from_bytes(&bytes).unwrap();
//! assert_eq!(root, back);
//! ```
//!
//! # Depth
//!
//! Both decoders in this workspace refuse trees nested deeper than
//! [`MAX_DEPTH`] compounds and lists, so hostile input cannot exhaust the
//! stack. Use [`DeOpts`] to pick another limit.

pub mod de;
pub mod error;
pub mod ser;

mod arrays;
mod value;

pub use arrays::*;
pub use de::{from_bytes, from_bytes_named, from_bytes_with_opts, DeOpts};
pub use ser::{to_bytes, to_bytes_named, to_writer, to_writer_named};
pub use value::*;

#[cfg(test)]
mod test;

use std::convert::TryFrom;

/// Default limit on how deeply compounds and lists may nest when decoding.
pub const MAX_DEPTH: usize = 512;

/// An NBT tag. This does not carry the value or the name of the data.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[repr(u8)]
pub enum Tag {
    /// Represents the end of a Compound object.
    #[default]
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
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64).
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually. The tags will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
