// rcs300/src/device/reader.rs

use log::{debug, info, trace, warn};

use crate::config::ReaderConfig;
use crate::protocol::commands::{Command, encode_apdu_header, encode_felica_envelope, encode_polling};
use crate::protocol::responses::{
    POLLING_MIN_LEN, PollingResult, ThroughResponse, decode_polling, decode_through,
};
use crate::protocol::{Frame, ResponseFrame, SequenceCounter};
use crate::transport::Transport;
use crate::types::{
    DeviceId, Direction, InterfaceInfo, Protocol, ReaderMode, ReaderModel, SystemCode,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// A session with one RC-S300.
///
/// Every operation is a single send followed by the matching receive.
/// Methods take `&mut self`, so one reader never has two exchanges in
/// flight; share it across threads behind a `Mutex`.
pub struct Reader {
    transport: Box<dyn Transport>,
    device_id: DeviceId,
    interface: InterfaceInfo,
    sequence: SequenceCounter,
    /// Sequence number of the last frame written, for response correlation
    last_sent: Option<u8>,
    mode: ReaderMode,
    rf_on: bool,
    config: ReaderConfig,
}

impl Reader {
    /// Bind a session to `transport` with default settings.
    pub fn new(transport: Box<dyn Transport>) -> Result<Self> {
        Self::with_config(transport, ReaderConfig::default())
    }

    /// Bind a session to `transport`. Fails if the device is not a supported
    /// reader or does not expose a bulk interface.
    pub fn with_config(transport: Box<dyn Transport>, config: ReaderConfig) -> Result<Self> {
        let device_id = transport.device_id();
        if !device_id.is_supported() {
            return Err(Error::DeviceMismatch {
                vendor_id: device_id.vendor_id,
                product_id: device_id.product_id,
            });
        }

        let interface = transport.interface_info().ok_or_else(|| {
            Error::Configuration(format!("{}: no interface with bulk in/out endpoints", device_id))
        })?;

        Ok(Self {
            transport,
            device_id,
            interface,
            sequence: SequenceCounter::default(),
            last_sent: None,
            mode: ReaderMode::Closed,
            rf_on: false,
            config,
        })
    }

    /// Claim the device and bring it to transparent mode with the RF field on.
    ///
    /// Steps run in order and stop at the first failure. There is no
    /// rollback: after an error the reader is in an unknown state and should
    /// be closed and discarded.
    pub fn open(&mut self) -> Result<()> {
        info!("opening {} ({})", self.device_id, self.model_name());

        self.transport.open()?;
        self.transport
            .select_configuration(self.interface.configuration)?;
        self.transport.claim_interface(self.interface.interface)?;
        self.mode = ReaderMode::TransparentInactive;

        self.end_transparent()?;
        self.start_transparent()?;
        self.rf_off()?;
        self.rf_on()?;
        Ok(())
    }

    /// Turn the RF field off, leave transparent mode and release the device.
    ///
    /// Every step is attempted even if an earlier one fails; the first
    /// failure is returned. Do not retry a failed close.
    pub fn close(&mut self) -> Result<()> {
        info!("closing {}", self.device_id);
        let mut first_err = None;

        let r = self.rf_off();
        keep_first(&mut first_err, "rf-off", r);
        let r = self.end_transparent();
        keep_first(&mut first_err, "end-transparent", r);
        let r = self.transport.release_interface(self.interface.interface);
        keep_first(&mut first_err, "release interface", r);
        let r = self.transport.close();
        keep_first(&mut first_err, "close device", r);

        self.mode = ReaderMode::Closed;
        self.rf_on = false;
        self.last_sent = None;

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Enter transparent mode, where commands pass through to the card.
    pub fn start_transparent(&mut self) -> Result<ResponseFrame> {
        let frame = self.exchange(&Command::StartTransparent, self.config.control_read_len)?;
        self.mode = ReaderMode::TransparentActive;
        Ok(frame)
    }

    /// Leave transparent mode.
    pub fn end_transparent(&mut self) -> Result<ResponseFrame> {
        let frame = self.exchange(&Command::EndTransparent, self.config.control_read_len)?;
        self.mode = ReaderMode::TransparentInactive;
        Ok(frame)
    }

    /// Turn the RF field on.
    pub fn rf_on(&mut self) -> Result<ResponseFrame> {
        let frame = self.exchange(&Command::RfOn, self.config.control_read_len)?;
        self.rf_on = true;
        Ok(frame)
    }

    /// Turn the RF field off.
    pub fn rf_off(&mut self) -> Result<ResponseFrame> {
        let frame = self.exchange(&Command::RfOff, self.config.control_read_len)?;
        self.rf_on = false;
        Ok(frame)
    }

    /// Switch the radio to `protocol`.
    pub fn switch_protocol(&mut self, protocol: Protocol) -> Result<ResponseFrame> {
        debug!("switching protocol to {}", protocol);
        let frame = self.exchange(
            &Command::SwitchProtocol(protocol),
            self.config.switch_protocol_read_len,
        )?;
        self.mode = ReaderMode::ProtocolSelected(protocol);
        Ok(frame)
    }

    /// Switch the radio by protocol name ("Type-F", "Type-B", "ISO 15693", ...).
    /// An unknown name fails before anything is sent.
    pub fn switch_protocol_named(&mut self, name: &str) -> Result<ResponseFrame> {
        let protocol: Protocol = name.parse()?;
        self.switch_protocol(protocol)
    }

    /// Frame `payload` and write it to the bulk OUT endpoint. The sequence
    /// number advances once the frame is built, whether or not the write
    /// succeeds.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        let frame = Frame::encode(payload, self.sequence.current())?;
        let seq = self.sequence.advance();
        trace!("SEND-> {}", bytes_to_hex_spaced(&frame));

        let status = self
            .transport
            .bulk_out(self.interface.endpoint_out, &frame)?;
        if !status.is_ok() {
            return Err(Error::Transfer {
                direction: Direction::Out,
                status,
            });
        }
        self.last_sent = Some(seq);
        Ok(())
    }

    /// Read one response frame of at most `max_len` bytes.
    pub fn receive(&mut self, max_len: usize) -> Result<ResponseFrame> {
        let transfer = self
            .transport
            .bulk_in(self.interface.endpoint_in, max_len)?;
        trace!("RECE-> {}", bytes_to_hex_spaced(&transfer.data));

        if !transfer.status.is_ok() {
            return Err(Error::Transfer {
                direction: Direction::In,
                status: transfer.status,
            });
        }

        let frame = Frame::decode(&transfer.data)?;
        if let Some(expected) = self.last_sent {
            if frame.sequence != expected {
                warn!(
                    "response sequence {} does not match request {}",
                    frame.sequence, expected
                );
            }
        }
        Ok(frame)
    }

    /// Send `command` to the selected card and parse the TLV reply. A
    /// rejection by the card or reader is `Ok(ThroughResponse::Rejected)`.
    pub fn communicate_through_ex(
        &mut self,
        command: &[u8],
        read_len: usize,
    ) -> Result<ThroughResponse> {
        let frame = self.exchange(&Command::CommunicateThrough(command.to_vec()), read_len)?;
        decode_through(&frame.payload)
    }

    /// [`Self::communicate_through_ex`] with the configured read length.
    pub fn communicate(&mut self, command: &[u8]) -> Result<ThroughResponse> {
        self.communicate_through_ex(command, self.config.through_read_len)
    }

    /// Wrap `command` in the transceive envelope with the card-side
    /// `timeout_ms` and pass it through to the card.
    pub fn felica_communicate_through_ex(
        &mut self,
        command: &[u8],
        timeout_ms: u32,
        read_len: usize,
    ) -> Result<ThroughResponse> {
        let envelope = encode_felica_envelope(command, timeout_ms)?;
        self.communicate_through_ex(&envelope, read_len)
    }

    /// FeliCa polling. `Ok(None)` when no card answered, or when the answer
    /// is too short to carry an IDm and PMm.
    pub fn felica_polling(
        &mut self,
        system_code: SystemCode,
        request_code: u8,
        timeout_ms: u32,
    ) -> Result<Option<PollingResult>> {
        let cmd = encode_polling(system_code, request_code);
        let resp =
            self.felica_communicate_through_ex(&cmd, timeout_ms, self.config.felica_read_len)?;

        match resp.response_data() {
            Some(value) if value.len() < POLLING_MIN_LEN => {
                debug!("polling reply too short: {}", bytes_to_hex_spaced(value));
                Ok(None)
            }
            Some(value) => {
                let result = decode_polling(value)?;
                debug!("polled card idm={}", result.idm.to_hex());
                Ok(Some(result))
            }
            None => Ok(None),
        }
    }

    /// Polling with the configured system code, request code and timeout.
    pub fn polling(&mut self) -> Result<Option<PollingResult>> {
        self.felica_polling(
            self.config.polling_system_code,
            self.config.polling_request_code,
            self.config.felica_timeout_ms,
        )
    }

    /// Send a 4-byte APDU header (no data field) and return the card's
    /// response bytes, or `None` if the card did not answer.
    pub fn send_apdu(
        &mut self,
        cla: u8,
        ins: u8,
        p1: u8,
        p2: u8,
        timeout_ms: u32,
    ) -> Result<Option<Vec<u8>>> {
        let cmd = encode_apdu_header(cla, ins, p1, p2);
        let resp =
            self.felica_communicate_through_ex(&cmd, timeout_ms, self.config.felica_read_len)?;
        Ok(resp.response_data().map(<[u8]>::to_vec))
    }

    fn exchange(&mut self, cmd: &Command, read_len: usize) -> Result<ResponseFrame> {
        debug!("{} (read {} bytes)", cmd.name(), read_len);
        let payload = cmd.encode()?;
        self.send(&payload)?;
        self.receive(read_len)
    }

    fn model_name(&self) -> String {
        self.model()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown model".to_string())
    }

    /// Logical reader state as tracked by this session.
    pub fn mode(&self) -> ReaderMode {
        self.mode
    }

    /// True after a successful `rf_on` until `rf_off` or `close`.
    pub fn is_rf_on(&self) -> bool {
        self.rf_on
    }

    /// Sequence number the next frame will carry.
    pub fn sequence(&self) -> u8 {
        self.sequence.current()
    }

    /// Vendor/product pair of the bound device.
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Reader model, if the product id is a known one.
    pub fn model(&self) -> Option<ReaderModel> {
        self.device_id.model()
    }

    /// Interface and endpoints the session talks through.
    pub fn interface(&self) -> InterfaceInfo {
        self.interface
    }

    /// Settings this session was built with.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Give the transport back, ending the session without closing it.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}

fn keep_first<T>(first: &mut Option<Error>, step: &str, result: Result<T>) {
    if let Err(e) = result {
        warn!("close: {} failed: {}", step, e);
        if first.is_none() {
            *first = Some(e);
        }
    }
}
