//! Button to input-subsystem key mapping.
//!
//! Each report carries the full button state, so every report produces one
//! key event per button (held or released) followed by a sync by the
//! consumer. Codes are Linux input event codes (`linux/input-event-codes.h`).

use super::buttons::{Button, ButtonSnapshot};

/// Linux input key code.
pub type KeyCode = u16;

pub const KEY_1: KeyCode = 2;
pub const KEY_2: KeyCode = 3;
pub const KEY_A: KeyCode = 30;
pub const KEY_B: KeyCode = 48;
pub const KEY_KPMINUS: KeyCode = 74;
pub const KEY_KPPLUS: KeyCode = 78;
pub const KEY_HOME: KeyCode = 102;
pub const KEY_UP: KeyCode = 103;
pub const KEY_LEFT: KeyCode = 105;
pub const KEY_RIGHT: KeyCode = 106;
pub const KEY_DOWN: KeyCode = 108;

impl Button {
    /// Key code this button is reported as.
    pub const fn key_code(self) -> KeyCode {
        match self {
            Button::DpadRight => KEY_RIGHT,
            Button::DpadLeft => KEY_LEFT,
            Button::DpadDown => KEY_DOWN,
            Button::DpadUp => KEY_UP,
            Button::Plus => KEY_KPPLUS,
            Button::Minus => KEY_KPMINUS,
            Button::Home => KEY_HOME,
            Button::A => KEY_A,
            Button::B => KEY_B,
            Button::One => KEY_1,
            Button::Two => KEY_2,
        }
    }
}

/// Key state change to forward to an input device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub code: KeyCode,
    pub pressed: bool,
}

impl ButtonSnapshot {
    /// One key event per button, released buttons included.
    pub fn key_events(&self) -> impl Iterator<Item = KeyEvent> + '_ {
        Button::ALL.into_iter().map(move |button| KeyEvent {
            code: button.key_code(),
            pressed: self.is_pressed(button),
        })
    }
}
