//! Errors raised while resolving, reading and writing endpoints.

use thiserror::Error;

use crate::host::{LiveKind, Rejection};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not resolve {0}")]
    Resolution(String),

    #[error("malformed binary nbt: {0}")]
    Binary(#[from] tagtree::error::Error),

    #[error("malformed snbt: {0}")]
    Text(#[from] tagsnbt::error::Error),

    #[error("host rejected the tree: {0}")]
    HostRejection(#[from] Rejection),

    #[error("host could not serialize the {0}")]
    Unavailable(LiveKind),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid descriptor `{descriptor}`: {reason}")]
    Descriptor { descriptor: String, reason: String },

    #[error("invalid world snapshot: {0}")]
    Snapshot(String),
}

impl Error {
    pub(crate) fn descriptor(descriptor: &str, reason: impl Into<String>) -> Self {
        Error::Descriptor {
            descriptor: descriptor.to_owned(),
            reason: reason.into(),
        }
    }
}
