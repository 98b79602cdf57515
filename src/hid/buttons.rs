//! Wii Remote core button report.
//!
//! Layout (3 bytes minimum):
//! ```text
//! Byte 0: Report ID
//! Byte 1: Bit 0 = D-pad Right, Bit 1 = D-pad Left,
//!         Bit 2 = D-pad Down,  Bit 3 = D-pad Up,
//!         Bit 4 = Plus,        Bit 5 = Minus,
//!         Bit 6 = Home
//! Byte 2: Bit 0 = A, Bit 1 = B, Bit 2 = 1, Bit 3 = 2
//! ```
//! Any further bytes (accelerometer, extension data) are ignored.

/// One of the eleven digital buttons on the remote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    DpadRight,
    DpadLeft,
    DpadDown,
    DpadUp,
    Plus,
    Minus,
    Home,
    A,
    B,
    One,
    Two,
}

impl Button {
    /// Every button, in the order entries are rendered.
    pub const ALL: [Button; 11] = [
        Button::DpadRight,
        Button::DpadLeft,
        Button::DpadDown,
        Button::DpadUp,
        Button::Plus,
        Button::Minus,
        Button::Home,
        Button::A,
        Button::B,
        Button::One,
        Button::Two,
    ];

    /// Label used in formatted channel entries.
    pub const fn label(self) -> &'static str {
        match self {
            Button::DpadRight => "Dpad_Right",
            Button::DpadLeft => "Dpad_Left",
            Button::DpadDown => "Dpad_Down",
            Button::DpadUp => "Dpad_Up",
            Button::Plus => "Plus",
            Button::Minus => "Minus",
            Button::Home => "Home",
            Button::A => "A",
            Button::B => "B",
            Button::One => "1",
            Button::Two => "2",
        }
    }
}

/// Decoded state of every digital button in one report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonSnapshot {
    /// Report id byte the buttons arrived in.
    pub report_id: u8,
    pub dpad_right: bool,
    pub dpad_left: bool,
    pub dpad_down: bool,
    pub dpad_up: bool,
    pub plus: bool,
    pub minus: bool,
    pub home: bool,
    pub a: bool,
    pub b: bool,
    pub one: bool,
    pub two: bool,
}

impl ButtonSnapshot {
    /// Project the two button bitmask bytes onto named flags.
    pub const fn from_bytes(report_id: u8, byte1: u8, byte2: u8) -> Self {
        Self {
            report_id,
            dpad_right: byte1 & 0x01 != 0,
            dpad_left: byte1 & 0x02 != 0,
            dpad_down: byte1 & 0x04 != 0,
            dpad_up: byte1 & 0x08 != 0,
            plus: byte1 & 0x10 != 0,
            minus: byte1 & 0x20 != 0,
            home: byte1 & 0x40 != 0,
            a: byte2 & 0x01 != 0,
            b: byte2 & 0x02 != 0,
            one: byte2 & 0x04 != 0,
            two: byte2 & 0x08 != 0,
        }
    }

    /// Whether `button` is held in this snapshot.
    pub const fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::DpadRight => self.dpad_right,
            Button::DpadLeft => self.dpad_left,
            Button::DpadDown => self.dpad_down,
            Button::DpadUp => self.dpad_up,
            Button::Plus => self.plus,
            Button::Minus => self.minus,
            Button::Home => self.home,
            Button::A => self.a,
            Button::B => self.b,
            Button::One => self.one,
            Button::Two => self.two,
        }
    }

    /// Held buttons in render order.
    pub fn pressed(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL
            .into_iter()
            .filter(move |&button| self.is_pressed(button))
    }

    /// Returns `true` when no button is held.
    pub fn is_idle(&self) -> bool {
        self.pressed().next().is_none()
    }
}
