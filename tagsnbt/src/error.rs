//! Contains the Error and Result type used when reading and writing sNBT.

/// Various errors that can occur while parsing or writing sNBT. Parse errors
/// carry the byte offset in the input where the problem was found.
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
    pub(crate) fn invalid_input(pos: usize) -> Error {
        Error(format!("invalid input at {}", pos))
    }

    pub(crate) fn invalid_number(pos: usize, token: &str) -> Error {
        Error(format!("invalid number at {}: {}", pos, token))
    }

    pub(crate) fn input_not_consumed(pos: usize) -> Error {
        Error(format!("input wasn't fully consumed, trailing data at {}", pos))
    }

    pub(crate) fn expected_key(pos: usize) -> Error {
        Error(format!("expected compound key at {}", pos))
    }

    pub(crate) fn expected_colon(pos: usize) -> Error {
        Error(format!("expected colon at {}", pos))
    }

    pub(crate) fn expected_array_end(pos: usize) -> Error {
        Error(format!("expected comma or array end at {}", pos))
    }

    pub(crate) fn expected_map_end(pos: usize) -> Error {
        Error(format!("expected comma or compound tag end at {}", pos))
    }

    pub(crate) fn unterminated_string(pos: usize) -> Error {
        Error(format!("unterminated string starting at {}", pos))
    }

    pub(crate) fn unexpected_eof() -> Error {
        Error("eof: unexpectedly ran out of input".to_owned())
    }

    pub(crate) fn mixed_list(pos: usize, cause: tagtree::error::Error) -> Error {
        Error(format!("list element at {}: {}", pos, cause))
    }

    pub(crate) fn array_element(pos: usize, array: char) -> Error {
        Error(format!("element at {} does not belong in a [{};] array", pos, array))
    }

    pub(crate) fn too_deep(limit: usize) -> Error {
        Error(format!("snbt nested deeper than {} levels", limit))
    }

    pub(crate) fn bespoke(msg: String) -> Error {
        Error(msg)
    }
}
