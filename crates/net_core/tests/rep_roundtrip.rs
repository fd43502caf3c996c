//! Framed replication messages through the hub, end to end.

use net_core::channel::Hub;
use net_core::wire::RepMsg;

#[test]
fn framed_publish_roundtrips_per_subscriber() {
    let mut hub = Hub::new();
    let rx = hub.subscribe();

    let sent = [
        RepMsg::State { id: 0 },
        RepMsg::Target { player: 7 },
        RepMsg::SkillIndex { index: 2 },
        RepMsg::SkillActive { active: true },
        RepMsg::State { id: 1 },
        RepMsg::SkillActive { active: false },
    ];
    for m in &sent {
        assert_eq!(hub.publish(&m.to_frame()), 1);
    }

    let got: Vec<RepMsg> = rx
        .drain()
        .iter()
        .map(|f| RepMsg::from_frame(f).expect("decode"))
        .collect();
    assert_eq!(got, sent);
}

#[test]
fn corrupt_frame_is_rejected_not_misread() {
    let mut frame = RepMsg::State { id: 3 }.to_frame();
    frame[0] ^= 0xFF; // version byte
    assert!(RepMsg::from_frame(&frame).is_err());

    let mut frame = RepMsg::Target { player: 1 }.to_frame();
    frame.push(0); // trailing byte outside the frame
    assert!(RepMsg::from_frame(&frame).is_err());
}
