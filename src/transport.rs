//! Transport seam.
//!
//! Pairing, discovery and report delivery belong to the host stack. The
//! core only needs to recognise a Wii Remote and push output reports back
//! through whatever link delivered its input reports.

use core::fmt;

use crate::config::{WIIMOTE_PRODUCT_ID, WIIMOTE_VENDOR_ID};

/// Failure reported by a transport when sending an output report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// The link went away between attach and send.
    Disconnected,
    /// Lower-layer I/O failure.
    Io,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Disconnected => f.write_str("link disconnected"),
            TransportError::Io => f.write_str("I/O failure"),
        }
    }
}

/// Outbound half of the link to an attached remote.
///
/// Implementations are handles: they are cloned out of the device state so
/// that sending never happens while the state lock is held.
pub trait Transport {
    /// Send a raw output report (report id first).
    fn send(&self, frame: &[u8]) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, frame: &[u8]) -> Result<(), TransportError> {
        (**self).send(frame)
    }
}

/// Bus a HID device is attached through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bus {
    Usb,
    Bluetooth,
}

/// Entry in the table of devices this crate drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceId {
    pub bus: Bus,
    pub vendor: u16,
    pub product: u16,
}

impl DeviceId {
    pub fn matches(&self, bus: Bus, vendor: u16, product: u16) -> bool {
        self.bus == bus && self.vendor == vendor && self.product == product
    }
}

/// Devices handled by this driver.
pub const SUPPORTED_DEVICES: [DeviceId; 1] = [DeviceId {
    bus: Bus::Bluetooth,
    vendor: WIIMOTE_VENDOR_ID,
    product: WIIMOTE_PRODUCT_ID,
}];

/// Check a newly discovered HID device against [`SUPPORTED_DEVICES`].
pub fn is_supported(bus: Bus, vendor: u16, product: u16) -> bool {
    SUPPORTED_DEVICES
        .iter()
        .any(|id| id.matches(bus, vendor, product))
}
