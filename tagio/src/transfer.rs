//! Moving one tree from a source endpoint to a destination endpoint.

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    descriptor::Descriptor,
    endpoint::Endpoint,
    error::Error,
    host::Host,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferOpts {
    /// Treat a destination that cannot be resolved as a failure instead of
    /// rendering the source as text.
    pub strict_destination: bool,
}

/// How a successful transfer ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The tree was written to the destination.
    Written,
    /// There was no destination; this is the source tree as sNBT.
    Rendered(String),
}

/// The two failures a caller gets to see. The underlying cause of a
/// `Failed` transfer is available through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("no input")]
    NoInput,
    #[error("unknown error")]
    Failed(#[source] Error),
}

impl From<Error> for TransferError {
    fn from(e: Error) -> Self {
        TransferError::Failed(e)
    }
}

/// A single read from `from` and write to `to`.
///
/// Without a destination, or with one that cannot be resolved, the source
/// tree is rendered as sNBT instead and nothing is written anywhere.
#[derive(Debug, Clone)]
pub struct Transfer {
    from: Descriptor,
    to: Option<Descriptor>,
    opts: TransferOpts,
}

impl Transfer {
    pub fn new(from: Descriptor, to: Option<Descriptor>) -> Self {
        Self {
            from,
            to,
            opts: TransferOpts::default(),
        }
    }

    pub fn with_opts(mut self, opts: TransferOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn run(self, host: &mut dyn Host) -> Result<Outcome, TransferError> {
        let mut source = self.from.resolve_source(host).ok_or_else(|| {
            info!("nothing found for {}", self.from);
            TransferError::NoInput
        })?;

        let destination = self.to.as_ref().map(|to| (to, to.resolve_destination(host)));
        let mut destination = match destination {
            Some((_, Some(adapter))) => adapter,
            Some((to, None)) if self.opts.strict_destination => {
                // A source that fails to read is reported ahead of the destination.
                source.read(host)?;
                warn!("nothing found for {}", to);
                return Err(Error::Resolution(to.to_string()).into());
            }
            unresolved => {
                if let Some((to, _)) = unresolved {
                    info!("nothing found for {}, rendering {} instead", to, self.from);
                }
                let value = source.read(host)?;
                return Ok(Outcome::Rendered(tagsnbt::to_string(&value).map_err(Error::from)?));
            }
        };

        let value = source.read(host)?;
        if destination.is_live() {
            host.refresh_live_views();
        }
        destination.write(host, &value)?;
        debug!("transfer from {} written", self.from);

        Ok(Outcome::Written)
    }
}
