//! Unicode escape decoding for mapping files
//!
//! Keys such as a lone combining mark or a look-alike Cyrillic letter are
//! easier to audit when written as escapes, so mapping files accept
//! `\uXXXX` (exactly four hex digits) and `\u{X...}` (one to six hex digits).

use anyhow::{anyhow, bail, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, one_of},
    combinator::{map, map_res, recognize},
    multi::{count, many0, many_m_n},
    sequence::{delimited, preceded},
    IResult, Parser,
};

const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

#[derive(Debug, PartialEq)]
enum Piece {
    Char(char),
    Escape(u32),
}

fn hex_value(digits: &str) -> Result<u32, std::num::ParseIntError> {
    u32::from_str_radix(digits, 16)
}

fn braced_esc(input: &str) -> IResult<&str, Piece> {
    let mut parser = map_res(
        preceded(
            tag("\\u"),
            delimited(
                char('{'),
                recognize(many_m_n(1, 6, one_of(HEX_DIGITS))),
                char('}'),
            ),
        ),
        hex_value,
    );
    let (input, num) = parser.parse(input)?;
    Ok((input, Piece::Escape(num)))
}

fn uni_esc(input: &str) -> IResult<&str, Piece> {
    let mut parser = map_res(
        preceded(tag("\\u"), recognize(count(one_of(HEX_DIGITS), 4))),
        hex_value,
    );
    let (input, num) = parser.parse(input)?;
    Ok((input, Piece::Escape(num)))
}

fn parse_pieces(input: &str) -> IResult<&str, Vec<Piece>> {
    let mut parser = many0(alt((braced_esc, uni_esc, map(anychar, Piece::Char))));
    parser.parse(input)
}

/// Decode `\uXXXX` and `\u{X...}` escapes, copying everything else verbatim
///
/// A backslash that does not start a well-formed escape is kept as is.
///
/// # Errors
/// Fails when an escape names a surrogate or a value above U+10FFFF.
pub fn decode_escapes(input: &str) -> Result<String> {
    let (_, pieces) =
        parse_pieces(input).map_err(|e| anyhow!("failed to scan escapes in {input:?}: {e}"))?;
    let mut decoded = String::with_capacity(input.len());
    for piece in pieces {
        match piece {
            Piece::Char(c) => decoded.push(c),
            Piece::Escape(num) => match std::char::from_u32(num) {
                Some(c) => decoded.push(c),
                None => bail!("escape U+{num:04X} in {input:?} is not a Unicode scalar value"),
            },
        }
    }
    Ok(decoded)
}
