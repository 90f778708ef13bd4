use libwifi::frame::components::{MacAddress, StationInfo};

use crate::error::Error;

/// Marks a rate code as basic (mandatory) in the supported rates element.
pub const RATE_BASIC: u8 = 0x80;

/// The rate value bits of a rate code, in units of 500 kbps.
pub const RATE_VALUE_MASK: u8 = 0x7f;

/// 802.11b rates: 1 and 2 Mbps basic, 5.5 and 11 Mbps optional.
pub const DEFAULT_RATES: [u8; 4] = [RATE_BASIC | 2, RATE_BASIC | 4, 11, 22];

pub const DEFAULT_MAC: MacAddress = MacAddress([0x08, 0x00, 0x27, 0xa1, 0x58, 0x8d]);

pub const DEFAULT_SSID: &[u8] = b"Hello World!";

/// Everything a beacon says about the access point it impersonates.
///
/// The SSID and the rate table each travel in an element with a one byte length field,
/// so neither may exceed 255 bytes. That isn't checked here; the frame builder refuses
/// oversize values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessPointDescriptor {
    pub mac_address: MacAddress,
    pub ssid: Vec<u8>,
    pub data_rates: Vec<u8>,
}

impl Default for AccessPointDescriptor {
    fn default() -> Self {
        AccessPointDescriptor {
            mac_address: DEFAULT_MAC,
            ssid: DEFAULT_SSID.to_vec(),
            data_rates: DEFAULT_RATES.to_vec(),
        }
    }
}

impl AccessPointDescriptor {
    pub fn with_mac(mut self, mac_address: MacAddress) -> Self {
        self.mac_address = mac_address;
        self
    }

    pub fn with_ssid(mut self, ssid: impl Into<Vec<u8>>) -> Self {
        self.ssid = ssid.into();
        self
    }

    pub fn with_rates(mut self, data_rates: impl Into<Vec<u8>>) -> Self {
        self.data_rates = data_rates.into();
        self
    }

    pub fn ssid_string(&self) -> String {
        String::from_utf8_lossy(&self.ssid).to_string()
    }

    /// The elements a beacon for this AP carries on `channel`.
    pub fn station_info(&self, channel: u8) -> StationInfo {
        StationInfo {
            ssid: Some(self.ssid.clone()),
            supported_rates: Some(self.data_rates.clone()),
            ds_parameter_set: Some(channel),
            data: Vec::new(),
        }
    }
}

/// Parse a BSSID argument. Group addresses are refused, since no station treats a
/// multicast or broadcast transmitter as an access point.
pub fn parse_bssid(input: &str) -> Result<MacAddress, Error> {
    let mac: MacAddress = input
        .parse()
        .map_err(|e: libwifi::frame::components::MacParseError| {
            Error::InvalidBssid(input.to_string(), e.to_string())
        })?;

    if !mac.is_real_device() {
        return Err(Error::InvalidBssid(
            input.to_string(),
            "group address".to_string(),
        ));
    }

    Ok(mac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ap() {
        let ap = AccessPointDescriptor::default();
        assert_eq!(ap.mac_address.to_string(), "08:00:27:a1:58:8d");
        assert_eq!(ap.ssid_string(), "Hello World!");
        assert_eq!(ap.data_rates, vec![0x82, 0x84, 0x0b, 0x16]);
    }

    #[test]
    fn test_setters() {
        let mac = MacAddress([0x02, 0, 0, 0, 0, 0x42]);
        let ap = AccessPointDescriptor::default()
            .with_mac(mac)
            .with_ssid("guest")
            .with_rates(vec![0x0c]);

        assert_eq!(ap.mac_address, mac);
        assert_eq!(ap.ssid, b"guest".to_vec());
        assert_eq!(ap.data_rates, vec![0x0c]);
    }

    #[test]
    fn test_parse_bssid() {
        assert_eq!(parse_bssid("08:00:27:a1:58:8d").unwrap(), DEFAULT_MAC);
        assert!(matches!(
            parse_bssid("ff:ff:ff:ff:ff:ff"),
            Err(Error::InvalidBssid(..))
        ));
        assert!(matches!(
            parse_bssid("01:00:5e:00:00:01"),
            Err(Error::InvalidBssid(..))
        ));
        assert!(matches!(parse_bssid("08:00:27"), Err(Error::InvalidBssid(..))));
    }

    #[test]
    fn test_station_info_keeps_basic_flags() {
        let info = AccessPointDescriptor::default().station_info(9);
        assert_eq!(info.supported_rates, Some(DEFAULT_RATES.to_vec()));
        assert_eq!(info.ds_parameter_set, Some(9));
    }
}
