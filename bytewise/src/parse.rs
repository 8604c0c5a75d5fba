//! Parsing of human-readable bit strings.

use nom::bytes::complete::take_while;
use nom::combinator::all_consuming;
use nom::IResult;

use crate::{BadFormatSnafu, ByteSequence, Result, ValidationFailureSnafu};

fn is_bit_digit(c: char) -> bool {
    c == '0' || c == '1'
}

fn bit_digits(input: &str) -> IResult<&str, &str> {
    all_consuming(take_while(is_bit_digit))(input)
}

/// Checks that `digits` holds nothing but `'0'` and `'1'`.
fn validate(digits: &str) -> Result<()> {
    match bit_digits(digits) {
        Ok(_) => Ok(()),
        Err(nom::Err::Error(e)) => match e.input.chars().next() {
            Some(character) => BadFormatSnafu { character }.fail(),
            None => ValidationFailureSnafu {
                reason: format!("rejected at end of input ({:?})", e.code),
            }
            .fail(),
        },
        Err(nom::Err::Failure(e)) => ValidationFailureSnafu {
            reason: format!("unrecoverable failure ({:?})", e.code),
        }
        .fail(),
        Err(nom::Err::Incomplete(needed)) => ValidationFailureSnafu {
            reason: format!("incomplete input ({needed:?})"),
        }
        .fail(),
    }
}

/// Parses a string of binary digits into a [`ByteSequence`].
///
/// Space characters may appear anywhere and are ignored. If the number of
/// digits is not a multiple of eight, the value is zero-extended on the left
/// to the next whole byte. The empty string parses to an empty sequence.
///
/// # Errors
///
/// Returns [`Error::BadFormat`](crate::Error::BadFormat) if any character
/// other than `'0'`, `'1'` or `' '` is present.
///
/// # Examples
///
/// ```
/// # use bytewise::prelude::*;
/// let x = parse_bits("01 110 1110 1010 1101 1001")?;
/// assert_eq!(x.as_bytes(), &[0x0e, 0xea, 0xd9]);
/// assert_eq!(x.to_uint::<u32>(), Some(977625));
///
/// assert!(matches!(
///     parse_bits("0 1110 1010 1101 1001a"),
///     Err(Error::BadFormat { character: 'a', .. }),
/// ));
/// # Ok::<(), bytewise::Error>(())
/// ```
pub fn parse_bits(bits: &str) -> Result<ByteSequence> {
    let digits = bits.replace(' ', "");
    validate(&digits)?;

    let padding = (8 - digits.len() % 8) % 8;
    let padded = "0".repeat(padding) + &digits;
    Ok(ByteSequence::from_vec(
        padded
            .as_bytes()
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, digit| acc << 1 | (digit - b'0')))
            .collect(),
    ))
}
