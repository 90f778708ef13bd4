#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceControl {
    /// The 4 bit fragment number from a sequence control field.
    pub fragment_number: u8,
    /// The 12 bit sequence number from a sequence control field.
    pub sequence_number: u16,
}

impl SequenceControl {
    pub fn encode(&self) -> [u8; 2] {
        // The sequence number occupies the upper 12 bits
        let sequence_number_bits = (self.sequence_number & 0x0FFF) << 4;
        // The fragment number occupies the lower 4 bits
        let fragment_number_bits = self.fragment_number & 0x0F;

        (sequence_number_bits | fragment_number_bits as u16).to_le_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::parse_sequence_control;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(SequenceControl::default().encode(), [0, 0]);
    }

    #[test]
    fn test_encode_parse() {
        let control = SequenceControl {
            fragment_number: 3,
            sequence_number: 1234,
        };
        let encoded = control.encode();
        assert_eq!(encoded, [0x23, 0x4d]);
        assert_eq!(parse_sequence_control(&encoded).unwrap().1, control);
    }
}
