//! Uniform reading and writing of tag trees, whatever holds them.

use tagtree::Value;

use crate::{error::Result, host::Host};

mod file;
mod live;
mod text;

pub use file::{Compression, FileEndpoint, FileFormat};
pub use live::LiveEndpoint;
pub use text::TextEndpoint;

/// Something a tag tree can be read from or written to.
///
/// The host is passed to every call rather than held, so that the source and
/// destination of a transfer may both be live objects of the same host.
pub trait Endpoint {
    fn read(&mut self, host: &mut dyn Host) -> Result<Value>;
    fn write(&mut self, host: &mut dyn Host, value: &Value) -> Result<()>;
}

/// Any of the endpoints in this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Adapter {
    File(FileEndpoint),
    Text(TextEndpoint),
    Live(LiveEndpoint),
}

impl Adapter {
    /// Whether writing here changes an object the host owns.
    pub fn is_live(&self) -> bool {
        matches!(self, Adapter::Live(_))
    }
}

impl Endpoint for Adapter {
    fn read(&mut self, host: &mut dyn Host) -> Result<Value> {
        match self {
            Adapter::File(e) => e.read(host),
            Adapter::Text(e) => e.read(host),
            Adapter::Live(e) => e.read(host),
        }
    }

    fn write(&mut self, host: &mut dyn Host, value: &Value) -> Result<()> {
        match self {
            Adapter::File(e) => e.write(host, value),
            Adapter::Text(e) => e.write(host, value),
            Adapter::Live(e) => e.write(host, value),
        }
    }
}

impl From<FileEndpoint> for Adapter {
    fn from(e: FileEndpoint) -> Self {
        Adapter::File(e)
    }
}

impl From<TextEndpoint> for Adapter {
    fn from(e: TextEndpoint) -> Self {
        Adapter::Text(e)
    }
}

impl From<LiveEndpoint> for Adapter {
    fn from(e: LiveEndpoint) -> Self {
        Adapter::Live(e)
    }
}
