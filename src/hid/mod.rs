//! Wii Remote input report classification and decoding.

pub mod buttons;
pub mod format;
pub mod keymap;
pub mod status;


use crate::config::{MIN_BUTTON_REPORT_LEN, MIN_STATUS_REPORT_LEN, STATUS_REPORT_ID};

pub use buttons::{Button, ButtonSnapshot};
pub use format::FormattedEntry;
pub use keymap::{KeyCode, KeyEvent};
pub use status::StatusSnapshot;

/// Why a raw report was not decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RejectReason {
    /// Fewer bytes than the report id requires.
    TooShort,
}

impl RejectReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            RejectReason::TooShort => "too short",
        }
    }
}

/// Result of classifying one raw report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodedEvent {
    Buttons(ButtonSnapshot),
    Status(StatusSnapshot),
    Rejected(RejectReason),
}

impl DecodedEvent {
    /// Channel entry for this event; `None` for rejected reports.
    pub fn to_entry(&self) -> Option<FormattedEntry> {
        match self {
            DecodedEvent::Buttons(b) => Some(FormattedEntry::from_buttons(b)),
            DecodedEvent::Status(s) => Some(FormattedEntry::from_status(s)),
            DecodedEvent::Rejected(_) => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, DecodedEvent::Rejected(_))
    }
}

/// Classify a raw report by its first byte and decode it.
///
/// Total over all inputs: a status report needs [`MIN_STATUS_REPORT_LEN`]
/// bytes, anything else needs [`MIN_BUTTON_REPORT_LEN`] to carry both
/// button bytes.
pub fn decode(raw: &[u8]) -> DecodedEvent {
    match raw.first() {
        Some(&STATUS_REPORT_ID) if raw.len() >= MIN_STATUS_REPORT_LEN => {
            DecodedEvent::Status(StatusSnapshot::new(raw[1]))
        }
        Some(&report_id) if raw.len() >= MIN_BUTTON_REPORT_LEN => {
            DecodedEvent::Buttons(ButtonSnapshot::from_bytes(report_id, raw[1], raw[2]))
        }
        _ => DecodedEvent::Rejected(RejectReason::TooShort),
    }
}
