//! Integration tests for the report core, driven the way a transport,
//! a consumer and an operator would drive it.

use std::sync::{Arc, Mutex};

use wiimote_hid::{
    DecodedEvent, DeviceSnapshot, Error, Transport, TransportError, Wiimote,
};

/// Transport double that records every output report.
#[derive(Clone, Default)]
struct RecordingLink {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl RecordingLink {
    fn frames(&self) -> Vec<Vec<u8>> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for RecordingLink {
    fn send(&self, frame: &[u8]) -> Result<(), TransportError> {
        self.sent.lock().unwrap().push(frame.to_vec());
        Ok(())
    }
}

#[derive(Clone)]
struct DeadLink;

impl Transport for DeadLink {
    fn send(&self, _frame: &[u8]) -> Result<(), TransportError> {
        Err(TransportError::Disconnected)
    }
}

fn drain_text<T, const N: usize>(wiimote: &Wiimote<T, N>) -> String {
    let mut text = Vec::new();
    let mut chunk = [0u8; 64];
    loop {
        let n = wiimote.drain(&mut chunk);
        if n == 0 {
            break;
        }
        text.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8(text).expect("channel text is ASCII")
}

#[test]
fn button_and_battery_scenario() {
    let wiimote: Wiimote<RecordingLink> = Wiimote::new();

    wiimote.on_report_arrived(&[0x31, 0x01, 0x00]);
    wiimote.on_report_arrived(&[0x20, 0x5A]);

    assert_eq!(
        drain_text(&wiimote),
        "Report: ID=49, Dpad_Right \nBattery: 90\n"
    );
    assert_eq!(wiimote.query_state().last_battery, Some(90));
}

#[test]
fn short_reports_never_reach_the_channel() {
    let wiimote: Wiimote<RecordingLink> = Wiimote::new();
    for raw in [&[][..], &[0x30][..], &[0x31, 0xFF][..], &[0x20][..]] {
        let event = wiimote.on_report_arrived(raw);
        assert!(event.is_rejected());
    }
    assert!(wiimote.channel().is_empty());
    assert_eq!(wiimote.query_state(), DeviceSnapshot::default());
}

#[test]
fn status_request_round_trip() {
    let wiimote: Wiimote<RecordingLink> = Wiimote::new();
    let link = RecordingLink::default();

    // Nothing attached yet.
    assert_eq!(wiimote.request_status(), Err(Error::NoDevice));

    wiimote.on_attach(link.clone());
    assert_eq!(wiimote.request_status(), Ok(()));
    assert_eq!(link.frames(), vec![vec![0x15, 0x00]]);

    // The request does not produce anything by itself.
    assert_eq!(wiimote.query_state().last_battery, None);
    assert!(wiimote.channel().is_empty());

    // The reply arrives later on the input path.
    wiimote.on_report_arrived(&[0x20, 0x42]);
    assert_eq!(
        wiimote.query_state(),
        DeviceSnapshot {
            connected: true,
            last_battery: Some(0x42),
        }
    );
    assert_eq!(drain_text(&wiimote), "Battery: 66\n");

    wiimote.on_detach();
    assert_eq!(wiimote.request_status(), Err(Error::NoDevice));
    assert_eq!(link.frames().len(), 1);
    // Cached level outlives the link.
    assert_eq!(wiimote.query_state().last_battery, Some(0x42));
}

#[test]
fn status_while_detached_still_updates_cache() {
    let wiimote: Wiimote<RecordingLink> = Wiimote::new();
    wiimote.on_report_arrived(&[0x20, 0x07]);
    assert_eq!(
        wiimote.query_state(),
        DeviceSnapshot {
            connected: false,
            last_battery: Some(7),
        }
    );
}

#[test]
fn transport_failure_is_reported() {
    let wiimote: Wiimote<DeadLink> = Wiimote::new();
    wiimote.on_attach(DeadLink);
    assert_eq!(
        wiimote.request_status(),
        Err(Error::Transport(TransportError::Disconnected))
    );
    assert!(wiimote.query_state().connected);
}

#[test]
fn full_channel_keeps_earlier_entries_intact() {
    let wiimote: Wiimote<RecordingLink, 64> = Wiimote::new();
    let idle = "Report: ID=48, No buttons pressed\n";

    wiimote.on_report_arrived(&[0x30, 0x00, 0x00]);
    wiimote.on_report_arrived(&[0x30, 0x00, 0x00]);

    let channel = wiimote.channel();
    assert_eq!(channel.len(), channel.capacity());
    assert_eq!(channel.dropped_total(), 2 * idle.len() - channel.capacity());

    let text = drain_text(&wiimote);
    assert!(text.starts_with(idle));
    assert_eq!(&text[idle.len()..], &idle[..channel.capacity() - idle.len()]);

    // Space is reclaimed once drained.
    let dropped = channel.dropped_total();
    wiimote.on_report_arrived(&[0x30, 0x00, 0x00]);
    assert_eq!(channel.dropped_total(), dropped);
    assert_eq!(drain_text(&wiimote), idle);
}

#[test]
fn borrowed_link_drives_status_requests() {
    let link = RecordingLink::default();
    let wiimote: Wiimote<&RecordingLink> = Wiimote::new();

    wiimote.on_attach(&link);
    assert_eq!(wiimote.request_status(), Ok(()));
    assert_eq!(link.frames(), vec![vec![0x15, 0x00]]);

    wiimote.on_detach();
    assert_eq!(wiimote.request_status(), Err(Error::NoDevice));
}

#[test]
fn returned_event_exposes_key_events() {
    let wiimote: Wiimote<RecordingLink> = Wiimote::new();
    let DecodedEvent::Buttons(buttons) = wiimote.on_report_arrived(&[0x30, 0x08, 0x02]) else {
        panic!("expected a button report");
    };
    let pressed: Vec<u16> = buttons
        .key_events()
        .filter(|e| e.pressed)
        .map(|e| e.code)
        .collect();
    // KEY_UP, KEY_B
    assert_eq!(pressed, vec![103, 48]);
}
