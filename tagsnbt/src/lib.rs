//! tagsnbt reads and writes stringified NBT (sNBT), the text form of NBT seen
//! in *Minecraft* commands, to and from [`tagtree::Value`] trees.
//!
//! ```
//! let v = tagsnbt::from_str("{Count:3b,id:\"minecraft:stone\"}").unwrap();
//! assert_eq!(tagsnbt::to_string(&v).unwrap(), r#"{Count:3b,id:"minecraft:stone"}"#);
//! ```
//!
//! Text written by [`to_string`] always parses back into an equal value.
//! Compound keys keep their order.

pub mod de;
pub mod error;
pub mod ser;

mod parser;

pub use de::{from_str, from_str_with_opts};
pub use ser::{to_string, to_writer};

#[cfg(test)]
mod tests;
