//! Text rendering of decoded reports.
//!
//! Entries are the unit written into the report channel. Consumers parse
//! this text, so the wording and ordering must not change:
//! ```text
//! Report: ID=49, Dpad_Right A \n
//! Report: ID=48, No buttons pressed\n
//! Battery: 90\n
//! ```

use core::fmt::Write;

use heapless::String;

use super::buttons::ButtonSnapshot;
use super::status::StatusSnapshot;
use crate::config::FORMATTED_ENTRY_CAPACITY;

/// Printable, newline-terminated rendering of one decoded report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedEntry {
    text: String<FORMATTED_ENTRY_CAPACITY>,
}

impl FormattedEntry {
    /// Render a button report.
    pub fn from_buttons(snapshot: &ButtonSnapshot) -> Self {
        let mut text = String::new();
        // Capacity covers the longest possible entry.
        let _ = write!(text, "Report: ID={}, ", snapshot.report_id);
        if snapshot.is_idle() {
            let _ = text.push_str("No buttons pressed");
        } else {
            for button in snapshot.pressed() {
                let _ = text.push_str(button.label());
                let _ = text.push(' ');
            }
        }
        let _ = text.push('\n');
        Self { text }
    }

    /// Render a status report.
    pub fn from_status(snapshot: &StatusSnapshot) -> Self {
        let mut text = String::new();
        let _ = writeln!(text, "Battery: {}", snapshot.battery_level);
        Self { text }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FormattedEntry {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.text.as_str())
    }
}
