use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::frame::components::{ElementId, StationInfo};

/// Parse variable length and variable field information.
/// The general structure of the data looks like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
///
/// Elements are read until the input is exhausted. An element whose length runs past
/// the end of the input is an error.
pub fn parse_station_info(mut input: &[u8]) -> IResult<&[u8], StationInfo> {
    let mut station_info = StationInfo::default();

    let mut element_id;
    let mut length;
    let mut data;
    while !input.is_empty() {
        (input, (element_id, length)) = tuple((get_u8, get_u8))(input)?;
        (input, data) = take(length)(input)?;

        match element_id {
            id if id == ElementId::Ssid as u8 => station_info.ssid = Some(data.to_vec()),
            id if id == ElementId::SupportedRates as u8 => {
                station_info.supported_rates = Some(data.to_vec())
            }
            id if id == ElementId::DsParameterSet as u8 && length == 1 => {
                station_info.ds_parameter_set = Some(data[0])
            }
            _ => {
                log::debug!("Keeping unhandled element {element_id} ({length} bytes)");
                station_info.data.push((element_id, data.to_vec()));
            }
        }
    }

    Ok((input, station_info))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_elements() {
        let bytes = [0, 2, b'h', b'i', 1, 2, 0x82, 0x0b, 3, 1, 6];
        let (remaining, info) = parse_station_info(&bytes).unwrap();

        assert!(remaining.is_empty());
        assert_eq!(info.ssid_string().as_deref(), Some("hi"));
        assert_eq!(info.supported_rates, Some(vec![0x82, 0x0b]));
        assert_eq!(info.ds_parameter_set, Some(6));
        assert!(info.data.is_empty());
    }

    #[test]
    fn test_hidden_ssid_and_unknown_element() {
        let bytes = [0, 0, 5, 4, 0, 1, 0, 0];
        let (_, info) = parse_station_info(&bytes).unwrap();

        assert_eq!(info.ssid, Some(Vec::new()));
        assert_eq!(info.data, vec![(5, vec![0, 1, 0, 0])]);
    }

    #[test]
    fn test_truncated_element() {
        let bytes = [0, 12, b'H', b'e'];
        assert!(parse_station_info(&bytes).is_err());
    }
}
