//! Connection state machine for one remote.
//!
//! ```text
//!                on_attach(link)
//!   Disconnected ───────────────▶ Connected
//!        ▲                            │
//!        └────────── on_detach() ─────┘
//! ```
//!
//! The retained transport handle *is* the connection state: `Connected`
//! means a handle is held. The last observed battery level is cached in
//! either state and survives a detach.

/// Connection state of the remote.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    Disconnected,
    Connected,
}

/// Point-in-time view of the device state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceSnapshot {
    pub connected: bool,
    /// Last battery level seen, `None` until a status report arrives.
    pub last_battery: Option<u8>,
}

/// Device state. Not synchronised on its own; the core wraps it in a mutex.
pub struct DeviceState<T> {
    link: Option<T>,
    last_battery: Option<u8>,
}

impl<T> DeviceState<T> {
    pub const fn new() -> Self {
        Self {
            link: None,
            last_battery: None,
        }
    }

    /// Enter `Connected`, retaining `link` for control requests.
    ///
    /// Returns the handle it replaced if the remote was already attached.
    pub fn on_attach(&mut self, link: T) -> Option<T> {
        self.link.replace(link)
    }

    /// Enter `Disconnected`, releasing the transport handle.
    pub fn on_detach(&mut self) -> Option<T> {
        self.link.take()
    }

    /// Cache a battery level. Valid in either state.
    pub fn on_status_observed(&mut self, level: u8) {
        self.last_battery = Some(level);
    }

    pub fn state(&self) -> ConnectionState {
        if self.link.is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Disconnected
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    pub fn link(&self) -> Option<&T> {
        self.link.as_ref()
    }

    pub fn snapshot(&self) -> DeviceSnapshot {
        DeviceSnapshot {
            connected: self.is_connected(),
            last_battery: self.last_battery,
        }
    }
}

impl<T> Default for DeviceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_disconnected_with_unknown_battery() {
        let state: DeviceState<u8> = DeviceState::new();
        assert_eq!(state.state(), ConnectionState::Disconnected);
        assert_eq!(state.snapshot(), DeviceSnapshot::default());
        assert!(state.link().is_none());
    }

    #[test]
    fn attach_and_detach_toggle_connection() {
        let mut state = DeviceState::new();
        assert_eq!(state.on_attach(7u8), None);
        assert!(state.is_connected());
        assert_eq!(state.link(), Some(&7));

        assert_eq!(state.on_detach(), Some(7));
        assert!(!state.is_connected());
        assert_eq!(state.on_detach(), None);
    }

    #[test]
    fn reattach_replaces_link() {
        let mut state = DeviceState::new();
        state.on_attach(1u8);
        assert_eq!(state.on_attach(2), Some(1));
        assert_eq!(state.link(), Some(&2));
    }

    #[test]
    fn battery_is_cached_in_any_state() {
        let mut state: DeviceState<u8> = DeviceState::new();
        state.on_status_observed(40);
        assert_eq!(
            state.snapshot(),
            DeviceSnapshot {
                connected: false,
                last_battery: Some(40)
            }
        );

        state.on_attach(0);
        state.on_status_observed(90);
        state.on_detach();
        assert_eq!(state.snapshot().last_battery, Some(90));
    }
}
