//! Unified error type for the report core.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (behind the `defmt` feature) for on-target
//! logging and `Display` for host logging.

use core::fmt;

use crate::hid::RejectReason;
use crate::transport::TransportError;

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A raw report was too short to classify or decode.
    TooShort,

    /// The report channel had no room for the tail of an entry.
    ChannelFull {
        /// Bytes that made it into the channel.
        written: usize,
        /// Bytes discarded.
        dropped: usize,
    },

    /// A control request was issued while no remote is attached.
    NoDevice,

    /// The transport refused an outbound frame.
    Transport(TransportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooShort => f.write_str("report too short"),
            Error::ChannelFull { written, dropped } => write!(
                f,
                "report channel full ({written} bytes written, {dropped} dropped)"
            ),
            Error::NoDevice => f.write_str("no remote attached"),
            Error::Transport(e) => write!(f, "transport error: {e}"),
        }
    }
}

// Convenience conversions

impl From<RejectReason> for Error {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::TooShort => Error::TooShort,
        }
    }
}

impl From<TransportError> for Error {
    fn from(e: TransportError) -> Self {
        Error::Transport(e)
    }
}
