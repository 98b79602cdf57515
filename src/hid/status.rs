//! Status report (id `0x20`).
//!
//! Only the battery byte is decoded; the remaining status flags
//! (extension present, LEDs, speaker) are not tracked.

/// Battery level reported by the remote.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Raw battery level (0-255).
    pub battery_level: u8,
}

impl StatusSnapshot {
    pub const fn new(battery_level: u8) -> Self {
        Self { battery_level }
    }
}
