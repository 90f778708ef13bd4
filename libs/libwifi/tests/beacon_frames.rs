use libwifi::frame::components::{MacAddress, StationInfo};
use libwifi::frame::*;
use libwifi::{parse_frame, Addresses, FrameSubType};

#[test]
fn test_beacon() {
    let payload = [
        128, 0, // FrameControl
        0, 0, // Duration
        255, 255, 255, 255, 255, 255, // First Address
        8, 0, 39, 161, 88, 141, // Second Address
        8, 0, 39, 161, 88, 141, // Third Address
        0, 0, // SequenceControl
        0, 0, 0, 0, 0, 0, 0, 0, // Timestamp
        100, 0, // Beacon interval
        1, 0, // Capability info
        0, 12, 72, 101, 108, 108, 111, 32, 87, 111, 114, 108, 100, 33, // SSID
        1, 4, 130, 132, 11, 22, // Supported rates
        3, 1, 6, // DS parameter set
    ];

    let frame = parse_frame(&payload).expect("Payload should be valid");
    println!("{frame:?}");
    let Frame::Beacon(beacon) = frame;

    assert_eq!(beacon.beacon_interval, 100);
    assert_eq!(beacon.capability_info, 0x0001);
    assert_eq!(
        beacon.station_info.ssid_string().as_deref(),
        Some("Hello World!")
    );
    assert_eq!(
        beacon.station_info.supported_rates,
        Some(vec![130, 132, 11, 22])
    );
    assert_eq!(beacon.station_info.ds_parameter_set, Some(6));
    assert!(beacon.dest().is_broadcast());
    assert_eq!(
        beacon.bssid(),
        Some(&MacAddress([8, 0, 39, 161, 88, 141]))
    );
}

#[test]
fn test_encoded_beacon_parses_back() {
    let ap = MacAddress([0x02, 0xde, 0xad, 0xbe, 0xef, 0x01]);
    let station_info = StationInfo {
        ssid: Some(b"lab".to_vec()),
        supported_rates: Some(vec![0x82, 0x84, 0x8b, 0x96, 0x0c, 0x12, 0x18, 0x24]),
        ds_parameter_set: Some(11),
        data: Vec::new(),
    };
    let bytes = Beacon::new(ap, station_info.clone()).encode().unwrap();

    let Frame::Beacon(beacon) = parse_frame(&bytes).unwrap();
    assert_eq!(beacon.station_info, station_info);
    assert_eq!(beacon.src(), Some(&ap));
    assert_eq!(beacon.timestamp, 0);
}

#[test]
fn test_non_beacon_subtype_is_unhandled() {
    let payload = [
        64, 0, // FrameControl
        0, 0, // Duration
        255, 255, 255, 255, 255, 255, // First Address
        2, 0, 0, 0, 0, 1, // Second Address
        255, 255, 255, 255, 255, 255, // Third Address
        0, 0, // SequenceControl
    ];

    match parse_frame(&payload) {
        Err(libwifi::error::Error::UnhandledFrameSubtype(frame_control, _)) => {
            assert_eq!(frame_control.frame_subtype, FrameSubType::ProbeRequest)
        }
        other => panic!("Expected an unhandled subtype, got {other:?}"),
    }
}

#[test]
fn test_truncated_beacon() {
    let payload = [128, 0, 0, 0, 255, 255, 255];
    assert!(parse_frame(&payload).is_err());
}
