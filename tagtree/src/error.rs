//! Contains the Error and Result type used by the binary codec and the tree.
use crate::Tag;

/// Various errors that can occur while encoding, decoding or building a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error(String);

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error(format!("io error: {}", e))
    }
}

impl Error {
    pub(crate) fn invalid_tag(tag: u8) -> Error {
        Error(format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn no_root() -> Error {
        Error("invalid nbt: root tag is End".to_owned())
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Error {
        Error(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error("eof: unexpectedly ran out of input".to_owned())
    }

    pub(crate) fn trailing_input(remaining: usize) -> Error {
        Error(format!("{} bytes of input left after root value", remaining))
    }

    pub(crate) fn too_deep(limit: usize) -> Error {
        Error(format!("nbt nested deeper than {} levels", limit))
    }

    pub(crate) fn list_of_end(len: i32) -> Error {
        Error(format!("list of {} End tags", len))
    }

    pub(crate) fn negative_len(len: i32) -> Error {
        Error(format!("negative length: {}", len))
    }

    pub(crate) fn mismatched_element(list: Tag, element: Tag) -> Error {
        Error(format!("cannot add {} to a list of {}", element, list))
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error(msg)
    }
}
