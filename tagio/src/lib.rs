//! tagio moves NBT tag trees between endpoints: binary and sNBT files,
//! in-memory sNBT text, and live objects owned by a [`Host`] such as
//! entities, players, inventory slots and blocks.
//!
//! A [`Transfer`] resolves a source and an optional destination from
//! [`Descriptor`]s, reads one tree and writes it. Without a destination the
//! tree is rendered as sNBT instead.
//!
//! ```no_run
//! use tagio::{Descriptor, NoHost, Outcome, Transfer};
//!
//! let from: Descriptor = "bin:level.dat".parse().unwrap();
//! let to: Descriptor = "snbt:level.snbt".parse().unwrap();
//!
//! let outcome = Transfer::new(from, Some(to)).run(&mut NoHost).unwrap();
//! assert_eq!(outcome, Outcome::Written);
//! ```

pub mod descriptor;
pub mod endpoint;
pub mod error;
pub mod host;
pub mod transfer;

pub use descriptor::Descriptor;
pub use endpoint::{Adapter, Compression, Endpoint, FileEndpoint, FileFormat, LiveEndpoint, TextEndpoint};
pub use error::{Error, Result};
pub use host::{BlockPos, Host, LiveHandle, LiveKind, LiveTarget, MemoryHost, NoHost, Rejection};
pub use transfer::{Outcome, Transfer, TransferError, TransferOpts};

#[cfg(test)]
mod test;
