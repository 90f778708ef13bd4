use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use libwifi::frame::components::{ElementId, InformationElement, ManagementHeader};
use libwifi::frame::{Beacon, BEACON_BODY_LEN};

use crate::descriptor::{AccessPointDescriptor, RATE_VALUE_MASK};
use crate::error::Error;

/// Version, pad, length and the present bitmap.
pub const RADIOTAP_HEADER_LEN: usize = 8;

/// Bit of the radiotap present word announcing a rate field.
pub const RADIOTAP_RATE: u32 = 2;

/// Rate code used when none is given: 2 Mbps.
pub const DEFAULT_DATA_RATE: u8 = 0x04;

/// Radiotap header declaring a single rate field, followed by that rate byte.
///
/// ```text
/// 0x00        version
/// 0x00        pad
/// 0x09 0x00   header length, including the rate byte
/// 0x04 0x00 0x00 0x00   present: rate
/// rate
/// ```
fn write_radiotap<W: Write>(wtr: &mut W, data_rate: u8) -> std::io::Result<()> {
    wtr.write_u8(0)?;
    wtr.write_u8(0)?;
    wtr.write_u16::<LittleEndian>((RADIOTAP_HEADER_LEN + 1) as u16)?;
    wtr.write_u32::<LittleEndian>(1 << RADIOTAP_RATE)?;
    wtr.write_u8(data_rate & RATE_VALUE_MASK)
}

/// Exact size of the frame [build_beacon_frame] produces for `ap`.
pub fn beacon_frame_len(ap: &AccessPointDescriptor) -> usize {
    RADIOTAP_HEADER_LEN
        + 1
        + ManagementHeader::LEN
        + BEACON_BODY_LEN
        + InformationElement::new(ElementId::Ssid, &ap.ssid).encoded_len()
        + InformationElement::new(ElementId::SupportedRates, &ap.data_rates).encoded_len()
        + InformationElement::new(ElementId::DsParameterSet, &[0]).encoded_len()
}

/// Build the radiotap-prefixed beacon announcing `ap` on `channel`.
///
/// Layout: radiotap header, rate byte, management header, timestamp, interval,
/// capabilities, then the SSID, Supported Rates and DS Parameter Set elements. Nothing is
/// padded. The rate byte is `data_rate` without its basic flag; the rate table in the
/// element is copied verbatim.
///
/// `channel` is expected to be validated already, see [parse_channel].
pub fn build_beacon_frame(
    data_rate: u8,
    channel: u8,
    ap: &AccessPointDescriptor,
) -> Result<Vec<u8>, Error> {
    let expected = beacon_frame_len(ap);

    let mut frame: Vec<u8> = Vec::new();
    frame.try_reserve_exact(expected)?;

    let beacon = Beacon::new(ap.mac_address, ap.station_info(channel));

    write_radiotap(&mut frame, data_rate).map_err(libwifi::error::EncodeError::from)?;
    beacon.write_to(&mut frame)?;

    if frame.len() != expected {
        return Err(Error::LengthMismatch {
            written: frame.len(),
            expected,
        });
    }

    Ok(frame)
}

/// Parse a channel argument. Channels 1 through 255 are accepted.
pub fn parse_channel(input: &str) -> Result<u8, Error> {
    match input.trim().parse::<u8>() {
        Ok(channel) if channel != 0 => Ok(channel),
        _ => Err(Error::InvalidChannel(input.to_string())),
    }
}
