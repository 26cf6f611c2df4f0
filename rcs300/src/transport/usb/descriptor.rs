// rcs300/src/transport/usb/descriptor.rs

use log::debug;
use rusb::{Device, Direction, TransferType, UsbContext};

use crate::types::InterfaceInfo;

/// Walk the configuration descriptor and return the first interface that
/// exposes both a bulk IN and a bulk OUT endpoint.
pub fn find_interface<D: UsbContext>(device: &Device<D>) -> Option<InterfaceInfo> {
    let config = device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
        .ok()?;

    for interface in config.interfaces() {
        for interface_desc in interface.descriptors() {
            let mut endpoint_in = None;
            let mut endpoint_out = None;

            for endpoint_desc in interface_desc.endpoint_descriptors() {
                if endpoint_desc.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match endpoint_desc.direction() {
                    Direction::In if endpoint_in.is_none() => {
                        endpoint_in = Some(endpoint_desc.address())
                    }
                    Direction::Out if endpoint_out.is_none() => {
                        endpoint_out = Some(endpoint_desc.address())
                    }
                    _ => {}
                }
            }

            if let (Some(endpoint_in), Some(endpoint_out)) = (endpoint_in, endpoint_out) {
                let info = InterfaceInfo {
                    configuration: config.number(),
                    interface: interface_desc.interface_number(),
                    endpoint_in,
                    endpoint_out,
                };
                debug!("bulk interface found: {:?}", info);
                return Some(info);
            }
        }
    }

    None
}
