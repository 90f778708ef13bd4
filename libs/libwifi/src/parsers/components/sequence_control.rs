use nom::combinator::map;
use nom::number::complete::le_u16;
use nom::IResult;

use crate::frame::components::SequenceControl;

/// Parse the little endian sequence control field.
/// The fragment number lives in the low nibble, the sequence number in the upper 12 bits.
pub fn parse_sequence_control(input: &[u8]) -> IResult<&[u8], SequenceControl> {
    map(le_u16, |value| SequenceControl {
        fragment_number: (value & 0x0F) as u8,
        sequence_number: value >> 4,
    })(input)
}
