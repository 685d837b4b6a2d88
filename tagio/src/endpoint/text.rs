use tagtree::Value;

use super::Endpoint;
use crate::{error::Result, host::Host};

/// An in-memory sNBT buffer. Writing replaces the buffer with the text form
/// of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEndpoint {
    buffer: String,
}

impl TextEndpoint {
    pub fn new(buffer: impl Into<String>) -> Self {
        Self {
            buffer: buffer.into(),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn into_buffer(self) -> String {
        self.buffer
    }
}

impl Endpoint for TextEndpoint {
    fn read(&mut self, _: &mut dyn Host) -> Result<Value> {
        Ok(tagsnbt::from_str(&self.buffer)?)
    }

    fn write(&mut self, _: &mut dyn Host, value: &Value) -> Result<()> {
        self.buffer = tagsnbt::to_string(value)?;
        Ok(())
    }
}
