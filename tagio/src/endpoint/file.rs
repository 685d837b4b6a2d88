use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use flate2::{read::GzDecoder, write::GzEncoder};
use log::debug;
use tagtree::Value;
use tempfile::NamedTempFile;

use super::Endpoint;
use crate::{error::Result, host::Host};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// How a file stores its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Binary NBT.
    Binary,
    /// sNBT text.
    Snbt,
}

/// Compression applied when writing a binary file. Reading detects gzip by
/// its magic bytes regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    #[default]
    None,
    Gzip,
}

/// A file on disk holding one tree.
///
/// Writes never leave a partially written file behind: the tree is written
/// to a temporary file next to the target, which then replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEndpoint {
    path: PathBuf,
    format: FileFormat,
    compression: Compression,
}

impl FileEndpoint {
    pub fn new(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: path.into(),
            format,
            compression: Compression::None,
        }
    }

    pub fn compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        Ok(match (self.format, self.compression) {
            (FileFormat::Snbt, _) => {
                let mut text = tagsnbt::to_string(value)?;
                text.push('\n');
                text.into_bytes()
            }
            (FileFormat::Binary, Compression::None) => tagtree::to_bytes(value)?,
            (FileFormat::Binary, Compression::Gzip) => {
                let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
                tagtree::to_writer(&mut encoder, value)?;
                encoder.finish()?
            }
        })
    }
}

impl Endpoint for FileEndpoint {
    fn read(&mut self, _: &mut dyn Host) -> Result<Value> {
        debug!("reading {:?} from {}", self.format, self.path.display());
        let data = fs::read(&self.path)?;

        match self.format {
            FileFormat::Binary if data.starts_with(&GZIP_MAGIC) => {
                let mut inflated = Vec::new();
                GzDecoder::new(data.as_slice()).read_to_end(&mut inflated)?;
                Ok(tagtree::from_bytes(&inflated)?)
            }
            FileFormat::Binary => Ok(tagtree::from_bytes(&data)?),
            FileFormat::Snbt => {
                let text = String::from_utf8(data).map_err(|e| {
                    std::io::Error::new(std::io::ErrorKind::InvalidData, e)
                })?;
                Ok(tagsnbt::from_str(&text)?)
            }
        }
    }

    fn write(&mut self, _: &mut dyn Host, value: &Value) -> Result<()> {
        debug!("writing {:?} to {}", self.format, self.path.display());
        // Encode first so a tree that cannot be encoded leaves the target alone.
        let data = self.encode(value)?;

        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = temp_file_in(dir)?;
        tmp.write_all(&data)?;
        tmp.as_file().sync_all()?;
        // The replacement keeps the mode of the file it replaces.
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// A temporary file that, once persisted as a new file, has the mode any
/// newly created file would get under the process umask.
#[cfg(unix)]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}
