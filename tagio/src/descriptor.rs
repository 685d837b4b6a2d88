//! Textual endpoint descriptors, as typed on a command line, and their
//! resolution into [`Adapter`]s.
//!
//! | form                      | endpoint                                 |
//! |---------------------------|------------------------------------------|
//! | `entity:<selector>`       | first entity the selector matches        |
//! | `player:<selector>`       | first player the selector matches        |
//! | `block:<x>,<y>,<z>`       | the block at a position                  |
//! | `block-entity:<x>,<y>,<z>`| the block entity at a position           |
//! | `slot:<n>`                | an inventory slot                        |
//! | `bin:<path>`              | binary NBT file                          |
//! | `gz:<path>`               | binary NBT file, gzipped when written    |
//! | `snbt:<path>`             | sNBT file                                |
//! | `text:<snbt>`             | literal sNBT, only usable as a source    |

use std::{fmt, path::PathBuf, str::FromStr};

use log::debug;

use crate::{
    endpoint::{Adapter, Compression, FileEndpoint, FileFormat, LiveEndpoint, TextEndpoint},
    error::Error,
    host::{BlockPos, Host, LiveTarget},
};

/// Where a tree should be read from or written to, before it has been
/// resolved against a host or the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    Live(LiveTarget),
    File {
        path: PathBuf,
        format: FileFormat,
        compression: Compression,
    },
    Snbt(String),
}

impl Descriptor {
    /// Resolve as the source of a transfer. Files must already exist.
    pub fn resolve_source(&self, host: &dyn Host) -> Option<Adapter> {
        let adapter = match self {
            Descriptor::File { path, .. } if !path.is_file() => None,
            _ => self.resolve_common(host),
        };
        debug!("source {} resolved: {}", self, adapter.is_some());
        adapter
    }

    /// Resolve as the destination of a transfer. Files need not exist yet;
    /// literal text cannot be written to.
    pub fn resolve_destination(&self, host: &dyn Host) -> Option<Adapter> {
        let adapter = match self {
            Descriptor::Snbt(_) => None,
            _ => self.resolve_common(host),
        };
        debug!("destination {} resolved: {}", self, adapter.is_some());
        adapter
    }

    fn resolve_common(&self, host: &dyn Host) -> Option<Adapter> {
        match self {
            Descriptor::Live(target) => host
                .resolve(target)
                .map(|handle| LiveEndpoint::new(handle).into()),
            Descriptor::File {
                path,
                format,
                compression,
            } => Some(
                FileEndpoint::new(path.clone(), *format)
                    .compression(*compression)
                    .into(),
            ),
            Descriptor::Snbt(text) => Some(TextEndpoint::new(text.as_str()).into()),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Descriptor::Live(target) => write!(f, "{}", target),
            Descriptor::File {
                path,
                format: FileFormat::Snbt,
                ..
            } => write!(f, "snbt file {}", path.display()),
            Descriptor::File { path, .. } => write!(f, "nbt file {}", path.display()),
            Descriptor::Snbt(_) => write!(f, "literal snbt"),
        }
    }
}

impl FromStr for Descriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = s
            .split_once(':')
            .ok_or_else(|| Error::descriptor(s, "expected <kind>:<value>"))?;

        let non_empty = |what: &str| {
            if rest.is_empty() {
                Err(Error::descriptor(s, format!("missing {}", what)))
            } else {
                Ok(rest.to_owned())
            }
        };
        let pos = || {
            rest.parse::<BlockPos>()
                .map_err(|reason| Error::descriptor(s, reason))
        };
        let file = |format, compression| -> Result<Self, Error> {
            Ok(Descriptor::File {
                path: PathBuf::from(non_empty("path")?),
                format,
                compression,
            })
        };

        match kind {
            "entity" => Ok(Descriptor::Live(LiveTarget::Entity(non_empty("selector")?))),
            "player" => Ok(Descriptor::Live(LiveTarget::Player(non_empty("selector")?))),
            "block" => Ok(Descriptor::Live(LiveTarget::Block(pos()?))),
            "block-entity" => Ok(Descriptor::Live(LiveTarget::BlockEntity(pos()?))),
            "slot" => rest
                .parse()
                .map(|slot| Descriptor::Live(LiveTarget::Slot(slot)))
                .map_err(|e| Error::descriptor(s, format!("bad slot: {}", e))),
            "bin" => file(FileFormat::Binary, Compression::None),
            "gz" => file(FileFormat::Binary, Compression::Gzip),
            "snbt" => file(FileFormat::Snbt, Compression::None),
            "text" => Ok(Descriptor::Snbt(rest.to_owned())),
            _ => Err(Error::descriptor(s, format!("unknown kind `{}`", kind))),
        }
    }
}
