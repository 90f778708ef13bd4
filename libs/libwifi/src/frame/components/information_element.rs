use std::io::Write;

use byteorder::WriteBytesExt;

use crate::error::EncodeError;

/// Element ids of the tagged fields this library knows by name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ElementId {
    Ssid = 0,
    SupportedRates = 1,
    DsParameterSet = 3,
}

/// A single tagged field of a management frame body.
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InformationElement<'a> {
    pub id: u8,
    pub payload: &'a [u8],
}

impl<'a> InformationElement<'a> {
    pub fn new(id: ElementId, payload: &'a [u8]) -> Self {
        InformationElement {
            id: id as u8,
            payload,
        }
    }

    /// Id and length byte plus the payload.
    pub fn encoded_len(&self) -> usize {
        2 + self.payload.len()
    }

    /// Write the element, refusing payloads whose size doesn't fit the length byte.
    pub fn write_to<W: Write>(&self, wtr: &mut W) -> Result<(), EncodeError> {
        let length = u8::try_from(self.payload.len()).map_err(|_| EncodeError::ElementTooLong {
            id: self.id,
            len: self.payload.len(),
        })?;

        wtr.write_u8(self.id)?;
        wtr.write_u8(length)?;
        wtr.write_all(self.payload)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// StationInfo stores the variable length fields that are sent with management frames.
///
/// Each field has an `id`, the length of the bytes for this field, and then payload of the field.
/// The fields that a beacon of ours carries get their own member; the bytes of every other
/// element are kept in `data` under their element id.
pub struct StationInfo {
    pub ssid: Option<Vec<u8>>,
    /// Rate codes in 500 kbps units. Bit 7 marks a basic (mandatory) rate and is kept as-is.
    pub supported_rates: Option<Vec<u8>>,
    pub ds_parameter_set: Option<u8>,
    pub data: Vec<(u8, Vec<u8>)>,
}

impl StationInfo {
    /// The SSID as text, with invalid UTF-8 replaced.
    pub fn ssid_string(&self) -> Option<String> {
        self.ssid
            .as_ref()
            .map(|ssid| String::from_utf8_lossy(ssid).to_string())
    }

    /// The elements in the order they go on the wire:
    /// SSID, Supported Rates, DS Parameter Set, then everything else.
    pub fn elements(&self) -> Vec<InformationElement<'_>> {
        let mut elements = Vec::with_capacity(3 + self.data.len());

        if let Some(ssid) = &self.ssid {
            elements.push(InformationElement::new(ElementId::Ssid, ssid));
        }

        if let Some(rates) = &self.supported_rates {
            elements.push(InformationElement::new(ElementId::SupportedRates, rates));
        }

        if let Some(channel) = &self.ds_parameter_set {
            elements.push(InformationElement::new(
                ElementId::DsParameterSet,
                std::slice::from_ref(channel),
            ));
        }

        for (id, payload) in &self.data {
            elements.push(InformationElement { id: *id, payload });
        }

        elements
    }

    pub fn encoded_len(&self) -> usize {
        self.elements().iter().map(|e| e.encoded_len()).sum()
    }

    pub fn write_to<W: Write>(&self, wtr: &mut W) -> Result<(), EncodeError> {
        for element in self.elements() {
            element.write_to(wtr)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_layout() {
        let mut bytes = Vec::new();
        InformationElement::new(ElementId::Ssid, b"lab")
            .write_to(&mut bytes)
            .unwrap();
        assert_eq!(bytes, [0, 3, b'l', b'a', b'b']);
    }

    #[test]
    fn test_element_too_long() {
        let payload = vec![0u8; 256];
        let mut bytes = Vec::new();
        let result = InformationElement::new(ElementId::Ssid, &payload).write_to(&mut bytes);

        assert!(matches!(
            result,
            Err(EncodeError::ElementTooLong { id: 0, len: 256 })
        ));
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_element_max_length() {
        let payload = vec![0x41u8; 255];
        let mut bytes = Vec::new();
        InformationElement::new(ElementId::Ssid, &payload)
            .write_to(&mut bytes)
            .unwrap();
        assert_eq!(bytes.len(), 257);
        assert_eq!(bytes[1], 255);
    }

    #[test]
    fn test_station_info_order() {
        let info = StationInfo {
            ssid: Some(b"net".to_vec()),
            supported_rates: Some(vec![0x82, 0x84]),
            ds_parameter_set: Some(11),
            data: vec![(221, vec![0x00, 0x50, 0xf2])],
        };

        let mut bytes = Vec::new();
        info.write_to(&mut bytes).unwrap();

        assert_eq!(
            bytes,
            [0, 3, b'n', b'e', b't', 1, 2, 0x82, 0x84, 3, 1, 11, 221, 3, 0x00, 0x50, 0xf2]
        );
        assert_eq!(info.encoded_len(), bytes.len());
    }

    #[test]
    fn test_empty_payloads_still_emitted() {
        let info = StationInfo {
            ssid: Some(Vec::new()),
            supported_rates: Some(Vec::new()),
            ds_parameter_set: Some(1),
            data: Vec::new(),
        };

        let mut bytes = Vec::new();
        info.write_to(&mut bytes).unwrap();

        assert_eq!(bytes, [0, 0, 1, 0, 3, 1, 1]);
        assert_eq!(info.encoded_len(), 7);
    }

    #[test]
    fn test_empty_station_info() {
        let info = StationInfo::default();
        assert!(info.elements().is_empty());
        assert_eq!(info.encoded_len(), 0);
    }
}
