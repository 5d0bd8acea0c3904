//! Parser for the mapping literal the extraction oracle replies with.
//!
//! The oracle is asked for a dictionary such as
//! `{'Nombre del Producto': 'Laptop', 'HS Code': '8471.30.01', ...}`.
//! Replies arrive in Python or JSON flavour, sometimes wrapped in a code
//! fence. Only flat mappings are accepted: values are strings, numbers,
//! booleans, null, or lists of those.

use std::collections::BTreeMap;

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1, take_while_m_n},
    character::complete::{anychar, char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{cut, map, map_opt, map_res, not, opt, recognize, value},
    error::{context, ErrorKind, ParseError, VerboseError, VerboseErrorKind},
    multi::{fold_many0, many0, separated_list0},
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
    Finish, IResult,
};
use thiserror::Error;

/// A scalar or list value from the literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Str(String),
    /// Numbers keep their source text so `16.0` stays `16.0`.
    Number(String),
    Bool(bool),
    Null,
    List(Vec<LiteralValue>),
}

impl LiteralValue {
    /// Text form used for storage. Lists are joined with `, `; null is empty.
    pub fn to_text(&self) -> String {
        match self {
            LiteralValue::Str(s) => s.clone(),
            LiteralValue::Number(n) => n.clone(),
            LiteralValue::Bool(true) => "True".to_string(),
            LiteralValue::Bool(false) => "False".to_string(),
            LiteralValue::Null => String::new(),
            LiteralValue::List(items) => items
                .iter()
                .map(LiteralValue::to_text)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

/// Parsed key/value pairs.
pub type LiteralMap = BTreeMap<String, LiteralValue>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty extraction reply")]
    Empty,

    #[error("expected {expected} at position {position}")]
    Unexpected {
        expected: &'static str,
        position: usize,
    },

    #[error("unexpected trailing content at position {position}")]
    TrailingContent { position: usize },
}

/// Removes code fences and a leading `python`/`json` language tag.
pub fn strip_code_fence(reply: &str) -> &str {
    let mut text = reply.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
        for tag in ["python", "json"] {
            if let Some(rest) = text.strip_prefix(tag) {
                text = rest;
                break;
            }
        }
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parses an extraction reply into a map.
pub fn parse_mapping(reply: &str) -> Result<LiteralMap, LiteralError> {
    let text = strip_code_fence(reply);
    if text.is_empty() {
        return Err(LiteralError::Empty);
    }
    let (rest, map) = mapping(text)
        .finish()
        .map_err(|err| syntax_error(text, err))?;
    if !rest.is_empty() {
        return Err(LiteralError::TrailingContent {
            position: text.len() - rest.len(),
        });
    }
    Ok(map)
}

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Maps the innermost nom error to a position and the nearest label.
fn syntax_error(text: &str, err: VerboseError<&str>) -> LiteralError {
    let position = err
        .errors
        .first()
        .map(|(rest, _)| text.len() - rest.len())
        .unwrap_or(0);
    let expected = err
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(label) => Some(*label),
            _ => None,
        })
        .unwrap_or("a mapping literal");
    LiteralError::Unexpected { expected, position }
}

fn symbol<'a>(c: char) -> impl FnMut(&'a str) -> ParseResult<'a, char> {
    delimited(multispace0, char(c), multispace0)
}

fn mapping(input: &str) -> ParseResult<'_, LiteralMap> {
    delimited(
        context("'{'", symbol('{')),
        map(
            terminated(separated_list0(symbol(','), entry), opt(symbol(','))),
            |entries| entries.into_iter().collect(),
        ),
        context("',' or '}'", symbol('}')),
    )(input)
}

fn entry(input: &str) -> ParseResult<'_, (String, LiteralValue)> {
    separated_pair(string, cut(context("':'", symbol(':'))), cut(literal_value))(input)
}

fn literal_value(input: &str) -> ParseResult<'_, LiteralValue> {
    preceded(
        multispace0,
        context(
            "a value",
            alt((
                map(string, LiteralValue::Str),
                map(sequence('[', ']', "',' or ']'"), LiteralValue::List),
                map(sequence('(', ')', "',' or ')'"), LiteralValue::List),
                map(number, |n: &str| LiteralValue::Number(n.to_string())),
                keyword,
            )),
        ),
    )(input)
}

fn sequence<'a>(
    open: char,
    close: char,
    expected: &'static str,
) -> impl FnMut(&'a str) -> ParseResult<'a, Vec<LiteralValue>> {
    preceded(
        char(open),
        cut(terminated(
            terminated(separated_list0(symbol(','), literal_value), opt(symbol(','))),
            context(expected, symbol(close)),
        )),
    )
}

fn number(input: &str) -> ParseResult<'_, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

fn keyword(input: &str) -> ParseResult<'_, LiteralValue> {
    terminated(
        alt((
            value(LiteralValue::Null, alt((tag("None"), tag("null")))),
            value(LiteralValue::Bool(true), alt((tag("True"), tag("true")))),
            value(LiteralValue::Bool(false), alt((tag("False"), tag("false")))),
        )),
        not(satisfy(|c: char| c.is_alphanumeric() || c == '_')),
    )(input)
}

/// One or more quoted literals; adjacent literals are concatenated.
fn string(input: &str) -> ParseResult<'_, String> {
    map(
        pair(
            preceded(multispace0, quoted),
            many0(preceded(multispace0, quoted)),
        ),
        |(first, rest)| {
            rest.into_iter().fold(first, |mut acc, part| {
                acc.push_str(&part);
                acc
            })
        },
    )(input)
}

fn quoted(input: &str) -> ParseResult<'_, String> {
    alt((quoted_by('\''), quoted_by('"')))(input)
}

enum Fragment<'a> {
    Literal(&'a str),
    Char(char),
    /// Unrecognised escapes keep their backslash.
    Unknown(char),
}

fn quoted_by<'a>(quote: char) -> impl FnMut(&'a str) -> ParseResult<'a, String> {
    preceded(
        char(quote),
        cut(terminated(
            fold_many0(
                alt((
                    map(
                        take_while1(move |c: char| c != quote && c != '\\'),
                        Fragment::Literal,
                    ),
                    escape,
                )),
                String::new,
                |mut out: String, fragment: Fragment<'a>| {
                    match fragment {
                        Fragment::Literal(s) => out.push_str(s),
                        Fragment::Char(c) => out.push(c),
                        Fragment::Unknown(c) => {
                            out.push('\\');
                            out.push(c);
                        }
                    }
                    out
                },
            ),
            context("closing quote", char(quote)),
        )),
    )
}

fn escape(input: &str) -> ParseResult<'_, Fragment<'_>> {
    preceded(
        char('\\'),
        alt((
            map(
                alt((
                    value('\n', char('n')),
                    value('\t', char('t')),
                    value('\r', char('r')),
                    value('\\', char('\\')),
                    value('\'', char('\'')),
                    value('"', char('"')),
                    value('/', char('/')),
                )),
                Fragment::Char,
            ),
            map(
                context(
                    "a hex escape",
                    alt((
                        preceded(char('x'), cut(hex_char(2))),
                        preceded(char('u'), cut(utf16_escape)),
                        preceded(char('U'), cut(hex_char(8))),
                    )),
                ),
                Fragment::Char,
            ),
            map(anychar, Fragment::Unknown),
        )),
    )(input)
}

fn hex_code<'a>(digits: usize) -> impl FnMut(&'a str) -> ParseResult<'a, u32> {
    map_res(
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u32::from_str_radix(hex, 16),
    )
}

fn hex_char<'a>(digits: usize) -> impl FnMut(&'a str) -> ParseResult<'a, char> {
    map_opt(hex_code(digits), char::from_u32)
}

/// `\uXXXX`, joining a JSON-style surrogate pair into one character.
fn utf16_escape(input: &str) -> ParseResult<'_, char> {
    let (rest, high) = hex_code(4)(input)?;
    let (rest, code) = if (0xD800..0xDC00).contains(&high) {
        let (rest, low) = preceded(tag("\\u"), hex_code(4))(rest)?;
        if !(0xDC00..0xE000).contains(&low) {
            return Err(nom::Err::Error(VerboseError::from_error_kind(
                rest,
                ErrorKind::Char,
            )));
        }
        (rest, 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    } else {
        (rest, high)
    };
    match char::from_u32(code) {
        Some(c) => Ok((rest, c)),
        None => Err(nom::Err::Error(VerboseError::from_error_kind(
            input,
            ErrorKind::Char,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_python_dict_with_fence() {
        let reply = "```python\n{'Nombre del Producto': 'Laptop', 'HS Code': '8471.30.01', 'IVA (%)': 16}\n```";
        let map = parse_mapping(reply).unwrap();

        assert_eq!(map["Nombre del Producto"], LiteralValue::Str("Laptop".into()));
        assert_eq!(map["HS Code"].to_text(), "8471.30.01");
        assert_eq!(map["IVA (%)"].to_text(), "16");
    }

    #[test]
    fn parses_json_flavour() {
        let map = parse_mapping(r#"{"DTA (%)": null, "flag": true, "n": -0.5}"#).unwrap();
        assert_eq!(map["DTA (%)"], LiteralValue::Null);
        assert_eq!(map["flag"].to_text(), "True");
        assert_eq!(map["n"].to_text(), "-0.5");
    }

    #[test]
    fn lists_are_joined() {
        let map = parse_mapping("{'x': ['TLCAN', 'T-MEC',], 'y': ()}").unwrap();
        assert_eq!(map["x"].to_text(), "TLCAN, T-MEC");
        assert_eq!(map["y"].to_text(), "");
    }

    #[test]
    fn keeps_apostrophes_inside_double_quotes() {
        let map = parse_mapping(r#"{"Origen del País": "People's Republic of China"}"#).unwrap();
        assert_eq!(map["Origen del País"].to_text(), "People's Republic of China");
    }

    #[test]
    fn handles_escaped_quotes() {
        let map = parse_mapping(r"{'a': 'it\'s'}").unwrap();
        assert_eq!(map["a"].to_text(), "it's");
    }

    #[test]
    fn trailing_comma_in_mapping_is_accepted() {
        let map = parse_mapping("{'a': '1',}").unwrap();
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn rejects_prose() {
        assert!(matches!(
            parse_mapping("Sorry, I cannot find that."),
            Err(LiteralError::Unexpected { .. })
        ));
    }

    #[test]
    fn rejects_empty_reply() {
        assert_eq!(parse_mapping("``````"), Err(LiteralError::Empty));
    }

    #[test]
    fn rejects_unterminated_string() {
        assert_eq!(
            parse_mapping("{'a': 'open"),
            Err(LiteralError::Unexpected {
                expected: "closing quote",
                position: 11,
            })
        );
    }

    #[test]
    fn decodes_unicode_escapes_in_keys_and_values() {
        let map = parse_mapping(r#"{"Origen del Pa\u00eds": "M\u00e9xico", "IVA (%)": "16\x25"}"#).unwrap();
        assert_eq!(map["Origen del País"].to_text(), "México");
        assert_eq!(map["IVA (%)"].to_text(), "16%");
    }

    #[test]
    fn decodes_long_escapes_and_surrogate_pairs() {
        let map = parse_mapping(r#"{"a": "\U0001F4BB", "b": "\ud83d\udcbb"}"#).unwrap();
        assert_eq!(map["a"].to_text(), "\u{1F4BB}");
        assert_eq!(map["b"].to_text(), "\u{1F4BB}");
    }

    #[test]
    fn short_hex_escape_is_rejected() {
        assert_eq!(
            parse_mapping(r"{'a': '\u12'}"),
            Err(LiteralError::Unexpected {
                expected: "a hex escape",
                position: 9,
            })
        );
    }

    #[test]
    fn unknown_escapes_keep_their_backslash() {
        let map = parse_mapping(r"{'a': 'C:\q'}").unwrap();
        assert_eq!(map["a"].to_text(), r"C:\q");
    }

    #[test]
    fn adjacent_literals_are_concatenated() {
        let map = parse_mapping("{'Nombre del Producto': 'Lap' 'top', 'Origen ' \"del País\": 'China'}").unwrap();
        assert_eq!(map["Nombre del Producto"].to_text(), "Laptop");
        assert_eq!(map["Origen del País"].to_text(), "China");
    }

    #[test]
    fn keyword_prefixes_are_not_keywords() {
        assert!(parse_mapping("{'a': Nonesense}").is_err());
    }

    #[test]
    fn rejects_trailing_content() {
        assert!(matches!(
            parse_mapping("{'a': 1} and more"),
            Err(LiteralError::TrailingContent { .. })
        ));
    }

    #[test]
    fn rejects_bare_identifiers() {
        assert!(parse_mapping("{'a': value}").is_err());
    }
}
