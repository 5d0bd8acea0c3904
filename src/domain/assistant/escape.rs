//! Decoding of backslash escape sequences in incoming prompts.
//!
//! Clients may send prompts with literal escape sequences (`\n`, `\u00f3`,
//! ...). They are expanded before the prompt reaches the oracle. Unknown
//! escapes are kept as written.

use nom::{
    branch::alt,
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{anychar, char},
    combinator::{all_consuming, cut, map, map_opt, map_res, value},
    error::{context, VerboseError, VerboseErrorKind},
    multi::fold_many0,
    sequence::preceded,
    Finish, IResult,
};
use thiserror::Error;

/// Failure to decode an escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("truncated \\{kind} escape at position {position}")]
    Truncated { kind: char, position: usize },

    #[error("illegal Unicode character in \\{kind} escape at position {position}")]
    InvalidCodePoint { kind: char, position: usize },

    #[error("\\ at end of string")]
    TrailingBackslash,
}

const TRUNCATED: &str = "hex digits";
const CODE_POINT: &str = "a Unicode scalar value";
const DANGLING: &str = "an escape character";

type DecodeResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

#[derive(Debug, Clone)]
enum Piece<'a> {
    Text(&'a str),
    Char(char),
    /// Unknown escape, written back with its backslash.
    Kept(char),
    /// Backslash-newline.
    Nothing,
}

/// Expands escape sequences in `input`.
///
/// Supported: `\\`, `\'`, `\"`, `\a`, `\b`, `\f`, `\n`, `\r`, `\t`, `\v`,
/// octal `\ooo` (one to three digits), `\xHH`, `\uHHHH`, `\UHHHHHHHH` and
/// backslash-newline (removed).
pub fn decode_escapes(input: &str) -> Result<String, EscapeError> {
    let (_, decoded) = all_consuming(fold_many0(
        alt((map(take_while1(|c: char| c != '\\'), Piece::Text), escape)),
        String::new,
        |mut out: String, piece| {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Char(c) => out.push(c),
                Piece::Kept(c) => {
                    out.push('\\');
                    out.push(c);
                }
                Piece::Nothing => {}
            }
            out
        },
    ))(input)
    .finish()
    .map_err(|err| escape_error(input, err))?;
    Ok(decoded)
}

fn escape(input: &str) -> DecodeResult<'_, Piece<'_>> {
    preceded(
        char('\\'),
        cut(context(
            DANGLING,
            alt((
                value(Piece::Nothing, char('\n')),
                map(
                    alt((
                        value('\\', char('\\')),
                        value('\'', char('\'')),
                        value('"', char('"')),
                        value('\u{07}', char('a')),
                        value('\u{08}', char('b')),
                        value('\u{0C}', char('f')),
                        value('\n', char('n')),
                        value('\r', char('r')),
                        value('\t', char('t')),
                        value('\u{0B}', char('v')),
                    )),
                    Piece::Char,
                ),
                map(octal, Piece::Char),
                map(hex('x', 2), Piece::Char),
                map(hex('u', 4), Piece::Char),
                map(hex('U', 8), Piece::Char),
                map(anychar, Piece::Kept),
            )),
        )),
    )(input)
}

/// One to three octal digits; at most 0o777, always a valid scalar.
fn octal(input: &str) -> DecodeResult<'_, char> {
    map_opt(
        map_res(
            take_while_m_n(1, 3, |c: char| c.is_digit(8)),
            |digits: &str| u32::from_str_radix(digits, 8),
        ),
        char::from_u32,
    )(input)
}

fn hex<'a>(kind: char, width: usize) -> impl FnMut(&'a str) -> DecodeResult<'a, char> {
    preceded(
        char(kind),
        cut(context(
            CODE_POINT,
            map_opt(
                context(
                    TRUNCATED,
                    map_res(
                        take_while_m_n(width, width, |c: char| c.is_ascii_hexdigit()),
                        |digits: &str| u32::from_str_radix(digits, 16),
                    ),
                ),
                char::from_u32,
            ),
        )),
    )
}

/// Positions point at the backslash that opened the failing escape.
fn escape_error(text: &str, err: VerboseError<&str>) -> EscapeError {
    let labelled = err.errors.iter().find_map(|(rest, kind)| match kind {
        VerboseErrorKind::Context(label) => Some((text.len() - rest.len(), *label)),
        _ => None,
    });
    match labelled {
        Some((digits_at, label)) if label == TRUNCATED || label == CODE_POINT => {
            let position = digits_at.saturating_sub(2);
            let kind = text[position..].chars().nth(1).unwrap_or('\\');
            if label == TRUNCATED {
                EscapeError::Truncated { kind, position }
            } else {
                EscapeError::InvalidCodePoint { kind, position }
            }
        }
        _ => EscapeError::TrailingBackslash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(
            decode_escapes("Tell me about importing laptops").unwrap(),
            "Tell me about importing laptops"
        );
    }

    #[test]
    fn expands_simple_escapes() {
        assert_eq!(decode_escapes(r"a\nb\tc").unwrap(), "a\nb\tc");
        assert_eq!(decode_escapes(r#"say \"hi\""#).unwrap(), "say \"hi\"");
        assert_eq!(decode_escapes(r"back\\slash").unwrap(), "back\\slash");
    }

    #[test]
    fn expands_unicode_escapes() {
        assert_eq!(decode_escapes(r"informaci\u00f3n").unwrap(), "información");
        assert_eq!(decode_escapes(r"\x41\U0001F600").unwrap(), "A\u{1F600}");
    }

    #[test]
    fn expands_octal_escapes() {
        assert_eq!(decode_escapes(r"\101\0").unwrap(), "A\0");
        assert_eq!(decode_escapes(r"\1019").unwrap(), "A9");
    }

    #[test]
    fn keeps_unknown_escapes_verbatim() {
        assert_eq!(decode_escapes(r"C:\path\qux").unwrap(), r"C:\path\qux");
    }

    #[test]
    fn removes_escaped_newline() {
        assert_eq!(decode_escapes("line\\\ncontinued").unwrap(), "linecontinued");
    }

    #[test]
    fn non_ascii_input_survives() {
        assert_eq!(
            decode_escapes("¿Qué necesito para importar zapatos?").unwrap(),
            "¿Qué necesito para importar zapatos?"
        );
    }

    #[test]
    fn truncated_hex_is_an_error() {
        assert_eq!(
            decode_escapes(r"bad \x4").unwrap_err(),
            EscapeError::Truncated {
                kind: 'x',
                position: 4
            }
        );
        assert!(decode_escapes(r"\u12").is_err());
        assert!(decode_escapes(r"\uZZZZ").is_err());
    }

    #[test]
    fn surrogate_code_point_is_an_error() {
        assert!(matches!(
            decode_escapes(r"\ud800"),
            Err(EscapeError::InvalidCodePoint { kind: 'u', .. })
        ));
        assert!(decode_escapes(r"\U00110000").is_err());
    }

    #[test]
    fn trailing_backslash_is_an_error() {
        assert_eq!(
            decode_escapes("oops\\").unwrap_err(),
            EscapeError::TrailingBackslash
        );
    }
}
