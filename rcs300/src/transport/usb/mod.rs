// rcs300/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::transport::traits::Transport;
use crate::types::{DeviceId, InTransfer, InterfaceInfo, SUPPORTED_DEVICES, TransferStatus};
use crate::{Error, Result};

mod descriptor;
use descriptor::find_interface;

/// Settings for the rusb backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsbConfig {
    /// Wait limit for each bulk transfer. `Duration::ZERO` waits forever.
    pub transfer_timeout: Duration,
    /// Detach a kernel driver bound to the interface before claiming it.
    pub detach_kernel_driver: bool,
}

impl Default for UsbConfig {
    fn default() -> Self {
        Self {
            transfer_timeout: Duration::ZERO,
            detach_kernel_driver: true,
        }
    }
}

/// rusb-backed transport for one reader. Feature-gated behind
/// `--features usb`.
pub struct UsbTransport {
    device: Device<Context>,
    handle: Option<DeviceHandle<Context>>,
    device_id: DeviceId,
    interface: Option<InterfaceInfo>,
    config: UsbConfig,
}

impl UsbTransport {
    /// List every device on the bus whose vendor/product pair is in `filter`.
    pub fn list(filter: &[DeviceId]) -> Result<Vec<Self>> {
        let ctx = Context::new()?;
        let mut found = Vec::new();
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            let id = DeviceId::new(dd.vendor_id(), dd.product_id());
            if filter.contains(&id) {
                debug!(
                    "reader {} at bus {} address {}",
                    id,
                    device.bus_number(),
                    device.address()
                );
                let interface = find_interface(&device);
                found.push(Self {
                    device,
                    handle: None,
                    device_id: id,
                    interface,
                    config: UsbConfig::default(),
                });
            }
        }
        Ok(found)
    }

    /// First supported RC-S300 on the bus.
    pub fn find() -> Result<Self> {
        Self::list(&SUPPORTED_DEVICES)?
            .into_iter()
            .next()
            .ok_or(Error::DeviceNotFound)
    }

    /// Replace the backend settings.
    pub fn with_config(mut self, config: UsbConfig) -> Self {
        self.config = config;
        self
    }

    fn handle(&mut self) -> Result<&mut DeviceHandle<Context>> {
        self.handle
            .as_mut()
            .ok_or_else(|| Error::Configuration("usb device is not open".into()))
    }
}

impl Transport for UsbTransport {
    fn device_id(&self) -> DeviceId {
        self.device_id
    }

    fn interface_info(&self) -> Option<InterfaceInfo> {
        self.interface
    }

    fn open(&mut self) -> Result<()> {
        if self.handle.is_none() {
            self.handle = Some(self.device.open()?);
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle closes the device
        self.handle = None;
        Ok(())
    }

    fn select_configuration(&mut self, configuration: u8) -> Result<()> {
        let handle = self.handle()?;
        if handle.active_configuration()? != configuration {
            handle.set_active_configuration(configuration)?;
        }
        Ok(())
    }

    fn claim_interface(&mut self, interface: u8) -> Result<()> {
        let detach = self.config.detach_kernel_driver;
        let handle = self.handle()?;
        // On Linux a kernel driver (e.g. the CCID class driver) may own the
        // reader; it has to go before the interface can be claimed.
        if detach {
            if let Ok(true) = handle.kernel_driver_active(interface) {
                if let Err(e) = handle.detach_kernel_driver(interface) {
                    warn!("detach kernel driver from interface {}: {}", interface, e);
                }
            }
        }
        handle.claim_interface(interface)?;
        Ok(())
    }

    fn release_interface(&mut self, interface: u8) -> Result<()> {
        self.handle()?.release_interface(interface)?;
        Ok(())
    }

    fn bulk_out(&mut self, endpoint: u8, data: &[u8]) -> Result<TransferStatus> {
        let timeout = self.config.transfer_timeout;
        match self.handle()?.write_bulk(endpoint, data, timeout) {
            Ok(_) => Ok(TransferStatus::Ok),
            Err(rusb::Error::Pipe) => Ok(TransferStatus::Stall),
            Err(rusb::Error::Timeout) => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }

    fn bulk_in(&mut self, endpoint: u8, max_len: usize) -> Result<InTransfer> {
        let timeout = self.config.transfer_timeout;
        let mut buf = vec![0u8; max_len];
        match self.handle()?.read_bulk(endpoint, &mut buf, timeout) {
            Ok(n) => {
                buf.truncate(n);
                Ok(InTransfer::ok(buf))
            }
            Err(rusb::Error::Pipe) => Ok(InTransfer {
                status: TransferStatus::Stall,
                data: Vec::new(),
            }),
            Err(rusb::Error::Overflow) => Ok(InTransfer {
                status: TransferStatus::Babble,
                data: buf,
            }),
            Err(rusb::Error::Timeout) => Err(Error::Timeout),
            Err(e) => Err(e.into()),
        }
    }
}
