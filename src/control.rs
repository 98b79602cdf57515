//! Status request protocol.
//!
//! Sending output report `0x15` makes the remote answer with a status
//! report (`0x20`). The answer is not returned here: it comes back later
//! through the normal input path, which updates the cached battery level
//! and queues a `Battery:` entry. Callers observe the reply by polling
//! the device state or draining the channel.

use crate::config::STATUS_REQUEST_FRAME;
use crate::error::Error;
use crate::transport::Transport;

/// The fixed two-byte status request output report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRequestFrame([u8; 2]);

impl StatusRequestFrame {
    pub const fn new() -> Self {
        Self(STATUS_REQUEST_FRAME)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Default for StatusRequestFrame {
    fn default() -> Self {
        Self::new()
    }
}

/// Send a status request over `link`.
///
/// Fire-and-forget: returns once the frame is handed to the transport.
/// `None` means no remote is attached and nothing is sent.
pub fn send_status_request<T: Transport>(link: Option<&T>) -> Result<(), Error> {
    let link = link.ok_or(Error::NoDevice)?;
    let frame = StatusRequestFrame::new();
    link.send(frame.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use core::cell::RefCell;
    use std::vec::Vec;

    struct Recorder {
        frames: RefCell<Vec<Vec<u8>>>,
        fail: bool,
    }

    impl Transport for Recorder {
        fn send(&self, frame: &[u8]) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Io);
            }
            self.frames.borrow_mut().push(frame.to_vec());
            Ok(())
        }
    }

    #[test]
    fn frame_is_fixed() {
        assert_eq!(StatusRequestFrame::new().as_bytes(), &[0x15, 0x00]);
    }

    #[test]
    fn request_without_link_is_no_device() {
        assert_eq!(send_status_request::<Recorder>(None), Err(Error::NoDevice));
    }

    #[test]
    fn request_sends_frame() {
        let link = Recorder {
            frames: RefCell::new(Vec::new()),
            fail: false,
        };
        assert_eq!(send_status_request(Some(&link)), Ok(()));
        assert_eq!(*link.frames.borrow(), [[0x15u8, 0x00].to_vec()]);
    }

    #[test]
    fn transport_failure_is_surfaced() {
        let link = Recorder {
            frames: RefCell::new(Vec::new()),
            fail: true,
        };
        assert_eq!(
            send_status_request(Some(&link)),
            Err(Error::Transport(TransportError::Io))
        );
    }
}
