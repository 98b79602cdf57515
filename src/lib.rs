//! Wii Remote HID report core.
//!
//! Decodes raw input reports from a Bluetooth-connected Wii Remote,
//! publishes them as text lines through a bounded byte channel, tracks the
//! connection and last battery level, and issues status requests whose
//! replies come back through the normal report path.
//!
//! ```text
//!  transport ──on_report_arrived──▶ hid::decode ──▶ ReportChannel ──drain──▶ consumer
//!      ▲                                 │
//!      │                                 └──────▶ DeviceState ──query_state──▶ diagnostics
//!      └──────── request_status (0x15) ◀──────────── operator
//! ```
//!
//! The library is `no_std` and allocation-free. Locking goes through
//! `critical-section`; host builds enable the `std` feature (or link
//! another critical-section implementation).

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod channel;
pub mod config;
pub mod control;
pub mod device;
pub mod error;
pub mod hid;
pub mod transport;
pub mod wiimote;

pub use channel::{ReportChannel, WriteOutcome};
pub use control::StatusRequestFrame;
pub use device::{ConnectionState, DeviceSnapshot, DeviceState};
pub use error::Error;
pub use hid::{decode, Button, ButtonSnapshot, DecodedEvent, FormattedEntry, StatusSnapshot};
pub use transport::{Bus, DeviceId, Transport, TransportError};
pub use wiimote::Wiimote;
