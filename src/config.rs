//! Protocol constants and compile-time configuration.
//!
//! Report identifiers, frame layouts and buffer sizes live here so they
//! can be tuned in one place.

// Device identity

/// Nintendo vendor id.
pub const WIIMOTE_VENDOR_ID: u16 = 0x057E;

/// Wii Remote (RVL-CNT-01) product id.
pub const WIIMOTE_PRODUCT_ID: u16 = 0x0306;

// Input reports

/// Report id of the status report carrying the battery level.
pub const STATUS_REPORT_ID: u8 = 0x20;

/// Minimum length of a status report (id + battery byte).
pub const MIN_STATUS_REPORT_LEN: usize = 2;

/// Minimum length of a button report (id + two bitmask bytes).
pub const MIN_BUTTON_REPORT_LEN: usize = 3;

// Output reports

/// Output report id that asks the remote for a status report.
pub const STATUS_REQUEST_ID: u8 = 0x15;

/// Complete status request frame. The second byte carries the rumble bit,
/// which we always leave clear.
pub const STATUS_REQUEST_FRAME: [u8; 2] = [STATUS_REQUEST_ID, 0x00];

// Report channel

/// Default ring size in bytes. One slot is kept free to tell a full ring
/// from an empty one, so `CHANNEL_CAPACITY - 1` bytes are usable.
pub const CHANNEL_CAPACITY: usize = 1024;

/// Capacity of a single formatted entry.
///
/// The longest entry is a button report with all eleven buttons held and a
/// three-digit id: 16 bytes of header, 63 bytes of labels and the newline.
pub const FORMATTED_ENTRY_CAPACITY: usize = 96;
