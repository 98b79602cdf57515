//! Core instance for one attached remote.
//!
//! Owns the report channel and the device state and exposes the entry
//! points used by the surrounding collaborators:
//!
//! | caller            | entry point                         |
//! |-------------------|-------------------------------------|
//! | transport         | `on_attach`, `on_detach`, `on_report_arrived` |
//! | consumer          | `drain`                             |
//! | operator          | `request_status`                    |
//! | diagnostics       | `query_state`                       |
//!
//! All entry points take `&self` and may be called concurrently from
//! different contexts. Locks are held for one channel or state operation
//! at a time; decoding, formatting and sending happen outside them.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::channel::ReportChannel;
use crate::config::CHANNEL_CAPACITY;
use crate::control;
use crate::device::{DeviceSnapshot, DeviceState};
use crate::error::Error;
use crate::hid::{self, DecodedEvent};
use crate::transport::Transport;

/// Report decoder, channel and state machine for one Wii Remote.
///
/// `new` is `const`, so an instance can live in a `static` on targets
/// without an allocator.
pub struct Wiimote<T, const N: usize = CHANNEL_CAPACITY> {
    channel: ReportChannel<N>,
    device: Mutex<CriticalSectionRawMutex, RefCell<DeviceState<T>>>,
}

impl<T, const N: usize> Wiimote<T, N> {
    pub const fn new() -> Self {
        Self {
            channel: ReportChannel::new(),
            device: Mutex::new(RefCell::new(DeviceState::new())),
        }
    }

    /// The remote connected; keep `link` for control requests.
    pub fn on_attach(&self, link: T) {
        let replaced = self
            .device
            .lock(|device| device.borrow_mut().on_attach(link));
        if replaced.is_some() {
            warn!("Wii Remote attached twice - replacing previous link");
        } else {
            info!("Wii Remote attached");
        }
    }

    /// The remote went away; later status requests fail with `NoDevice`.
    pub fn on_detach(&self) {
        let released = self.device.lock(|device| device.borrow_mut().on_detach());
        if released.is_some() {
            info!("Wii Remote detached");
        } else {
            debug!("Detach without an attached Wii Remote");
        }
    }

    /// Decode one inbound report and publish the result.
    ///
    /// Status reports update the cached battery level before their entry
    /// is queued, so a consumer that sees `Battery:` in the channel also
    /// sees the level in [`query_state`](Self::query_state). Rejected
    /// reports are logged and go nowhere.
    pub fn on_report_arrived(&self, raw: &[u8]) -> DecodedEvent {
        let event = hid::decode(raw);

        match &event {
            DecodedEvent::Rejected(reason) => {
                warn!(
                    "Dropping {} byte report: {}",
                    raw.len(),
                    reason.as_str()
                );
                return event;
            }
            DecodedEvent::Status(status) => {
                debug!("Status report: battery={}", status.battery_level);
                self.device
                    .lock(|device| device.borrow_mut().on_status_observed(status.battery_level));
            }
            DecodedEvent::Buttons(b) => {
                debug!(
                    "Wii Remote report: ID={}, dpad(R:{} L:{} U:{} D:{}), plus={}, minus={}, home={}, A={}, B={}, 1={}, 2={}",
                    b.report_id,
                    b.dpad_right,
                    b.dpad_left,
                    b.dpad_up,
                    b.dpad_down,
                    b.plus,
                    b.minus,
                    b.home,
                    b.a,
                    b.b,
                    b.one,
                    b.two
                );
            }
        }

        if let Some(entry) = event.to_entry() {
            if let Err(Error::ChannelFull { written, dropped }) =
                self.channel.write(entry.as_bytes()).into_result()
            {
                warn!(
                    "Report channel full - wrote {} bytes, dropped {}",
                    written,
                    dropped
                );
            }
        }

        event
    }

    /// Copy queued text into `out`; returns the byte count, zero if empty.
    pub fn drain(&self, out: &mut [u8]) -> usize {
        self.channel.drain(out)
    }

    /// Point-in-time connection state and cached battery level.
    pub fn query_state(&self) -> DeviceSnapshot {
        self.device.lock(|device| device.borrow().snapshot())
    }

    /// The underlying report channel.
    pub fn channel(&self) -> &ReportChannel<N> {
        &self.channel
    }
}

impl<T: Transport + Clone, const N: usize> Wiimote<T, N> {
    /// Ask the remote for a status report.
    ///
    /// Returns as soon as the request frame is handed to the transport; the
    /// reply shows up later via [`on_report_arrived`](Self::on_report_arrived).
    /// A request that is never answered simply never shows up.
    pub fn request_status(&self) -> Result<(), Error> {
        let link = self.device.lock(|device| device.borrow().link().cloned());
        let result = control::send_status_request(link.as_ref());
        match result {
            Ok(()) => debug!("Status request sent"),
            Err(Error::NoDevice) => warn!("Status request without an attached Wii Remote"),
            Err(e) => error!("Status request failed: {}", e),
        }
        result
    }
}

impl<T, const N: usize> Default for Wiimote<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
