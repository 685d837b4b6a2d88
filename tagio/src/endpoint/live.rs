use log::debug;
use tagtree::Value;

use super::Endpoint;
use crate::{
    error::{Error, Result},
    host::{Host, LiveHandle},
};

/// A live object owned by the host. Reads and writes go straight to the
/// host's serialize and deserialize calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveEndpoint {
    handle: LiveHandle,
}

impl LiveEndpoint {
    pub fn new(handle: LiveHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> LiveHandle {
        self.handle
    }
}

impl Endpoint for LiveEndpoint {
    fn read(&mut self, host: &mut dyn Host) -> Result<Value> {
        host.serialize(&self.handle)
            .ok_or(Error::Unavailable(self.handle.kind))
    }

    fn write(&mut self, host: &mut dyn Host, value: &Value) -> Result<()> {
        debug!("writing {} {}", self.handle.kind, self.handle.id);
        host.deserialize(&self.handle, value)?;
        Ok(())
    }
}
