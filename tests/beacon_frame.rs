use fake_ap::descriptor::RATE_VALUE_MASK;
use fake_ap::{beacon_frame_len, build_beacon_frame, AccessPointDescriptor};
use libwifi::frame::components::MacAddress;
use libwifi::frame::Frame;
use libwifi::{parse_frame, Addresses, FrameSubType};
use radiotap::Radiotap;

#[test]
fn test_radiotap_parser_accepts_capture_header() {
    let frame = build_beacon_frame(0x84, 6, &AccessPointDescriptor::default()).unwrap();

    let radiotap = Radiotap::from_bytes(&frame).expect("radiotap header should parse");
    assert_eq!(radiotap.header.length, 9);

    let rate = radiotap.rate.expect("rate field should be present");
    assert_eq!(rate.value, ((0x84 & RATE_VALUE_MASK) as f32) / 2.0);
}

#[test]
fn test_beacon_parses_back() {
    let ap = AccessPointDescriptor::default();
    let frame = build_beacon_frame(0x4, 6, &ap).unwrap();
    assert_eq!(frame.len(), beacon_frame_len(&ap));

    let radiotap = Radiotap::from_bytes(&frame).unwrap();
    let payload = &frame[radiotap.header.length..];

    let Frame::Beacon(beacon) = parse_frame(payload).expect("beacon should parse");
    assert_eq!(beacon.header.frame_control.frame_subtype, FrameSubType::Beacon);
    assert!(beacon.dest().is_broadcast());
    assert_eq!(beacon.src(), Some(&ap.mac_address));
    assert_eq!(beacon.bssid(), Some(&ap.mac_address));
    assert_eq!(beacon.timestamp, 0);
    assert_eq!(beacon.beacon_interval, 100);
    assert_eq!(beacon.capability_info, 0x0001);
    assert_eq!(beacon.station_info.ssid.as_deref(), Some(&b"Hello World!"[..]));
    assert_eq!(
        beacon.station_info.supported_rates,
        Some(vec![0x82, 0x84, 0x0b, 0x16])
    );
    assert_eq!(beacon.station_info.ds_parameter_set, Some(6));
    assert!(beacon.station_info.data.is_empty());
}

#[test]
fn test_custom_access_point() {
    let mac: MacAddress = "02:13:37:00:be:ef".parse().unwrap();
    let ap = AccessPointDescriptor::default()
        .with_mac(mac)
        .with_ssid(vec![0xffu8; 255])
        .with_rates(vec![0x8c, 0x12, 0x98, 0x24, 0xb0, 0x48, 0x60, 0x6c]);

    let frame = build_beacon_frame(0x0c, 255, &ap).unwrap();
    assert_eq!(frame.len(), 52 + 255 + 8);

    let Frame::Beacon(beacon) = parse_frame(&frame[9..]).unwrap();
    assert_eq!(beacon.bssid(), Some(&mac));
    assert_eq!(beacon.station_info.ssid, Some(vec![0xffu8; 255]));
    assert_eq!(beacon.station_info.supported_rates, Some(ap.data_rates.clone()));
    assert_eq!(beacon.station_info.ds_parameter_set, Some(255));
}
