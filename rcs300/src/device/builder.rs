// rcs300/src/device/builder.rs

use crate::config::ReaderConfig;
use crate::device::reader::Reader;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
}

impl ReaderBuilder {
    /// Builder with no transport and the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use the first attached RC-S300.
    #[cfg(feature = "usb")]
    pub fn with_first_usb_reader(self) -> Result<Self> {
        let usb = crate::transport::UsbTransport::find()?;
        Ok(self.with_transport(Box::new(usb)))
    }

    /// Replace the reader configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return a closed Reader.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build(self) -> Result<Reader> {
        match self.transport {
            Some(t) => Reader::with_config(t, self.config),
            None => Err(Error::DeviceNotFound),
        }
    }

    /// Build and open in one step.
    pub fn open(self) -> Result<Reader> {
        let mut reader = self.build()?;
        reader.open()?;
        Ok(reader)
    }
}
