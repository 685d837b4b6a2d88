//! Token level parsers for sNBT, built from `nom` combinators. The recursive
//! structure (compounds, lists, arrays) is handled by [`crate::de`].

use std::borrow::Cow;

use nom::{
    branch::alt,
    bytes::complete::{is_a, tag_no_case},
    character::complete::{alphanumeric1, char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize, verify},
    error::{Error, ErrorKind, ParseError},
    multi::many1,
    sequence::{pair, terminated, tuple},
    IResult,
};
use tagtree::Value;

/// Parses a single or double quoted string, including both quotes.
/// A backslash escapes whatever character follows it.
pub fn parse_quoted(input: &str) -> IResult<&str, Cow<'_, str>> {
    match input.chars().next() {
        Some(quote @ ('"' | '\'')) => {
            let (rest, content) = parse_escaped(quote, &input[1..])?;
            let (rest, _) = char(quote)(rest)?;
            Ok((rest, content))
        }
        _ => Err(nom::Err::Error(Error::from_error_kind(input, ErrorKind::Char))),
    }
}

/// Reads up to (not including) the closing `surround` quote.
fn parse_escaped(surround: char, input: &str) -> IResult<&str, Cow<'_, str>> {
    let mut owned = String::new();
    let mut start = 0;
    let mut skip = false;
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if skip {
            skip = false;
            owned.push(c);
            start = input.len() - chars.as_str().len();
        } else if c == '\\' {
            let len = input.len() - chars.as_str().len() - 1;
            owned.push_str(&input[start..len]);
            skip = true;
        } else if c == surround {
            let len = input.len() - chars.as_str().len() - surround.len_utf8();
            if start == 0 && owned.is_empty() {
                return Ok((&input[len..], Cow::from(&input[..len])));
            }
            owned.push_str(&input[start..len]);
            return Ok((&input[len..], Cow::from(owned)));
        }
    }
    Err(nom::Err::Error(Error::from_error_kind(input, ErrorKind::MapRes)))
}

/// Parses an unquoted run of `[A-Za-z0-9_\-.+]`.
pub fn parse_simple_string(input: &str) -> IResult<&str, &str> {
    recognize(many1(alt((alphanumeric1, is_a("_-.+")))))(input)
}

/// True if `s` can be written without quotes and read back as the same
/// string key.
pub fn is_simple_string(s: &str) -> bool {
    matches!(all_consuming(parse_simple_string)(s), Ok(_))
}

pub fn parse_bool(input: &str) -> IResult<&str, bool> {
    alt((
        map(tag_no_case("true"), |_| true),
        map(tag_no_case("false"), |_| false),
    ))(input)
}

pub fn parse_i8(input: &str) -> IResult<&str, i8> {
    map_res(terminated(integer, one_of("bB")), |s: &str| s.parse())(input)
}

pub fn parse_i16(input: &str) -> IResult<&str, i16> {
    map_res(terminated(integer, one_of("sS")), |s: &str| s.parse())(input)
}

pub fn parse_i32(input: &str) -> IResult<&str, i32> {
    map_res(integer, |s: &str| s.parse())(input)
}

pub fn parse_i64(input: &str) -> IResult<&str, i64> {
    map_res(terminated(integer, one_of("lL")), |s: &str| s.parse())(input)
}

pub fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        terminated(alt((special_float, float)), one_of("fF")),
        |s: &str| s.parse(),
    )(input)
}

/// A double either carries the `d` suffix or is a bare decimal with a
/// fraction or exponent, so that `1` stays an int.
pub fn parse_f64(input: &str) -> IResult<&str, f64> {
    map_res(
        alt((
            terminated(alt((special_float, float)), one_of("dD")),
            verify(float, |s: &str| s.contains(['.', 'e', 'E'])),
        )),
        |s: &str| s.parse(),
    )(input)
}

fn sign(input: &str) -> IResult<&str, Option<char>> {
    opt(one_of("+-"))(input)
}

fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(sign, digit1))(input)
}

fn float(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        sign,
        alt((
            recognize(tuple((digit1, char('.'), digit0))),
            recognize(pair(char('.'), digit1)),
            digit1,
        )),
        opt(tuple((one_of("eE"), sign, digit1))),
    )))(input)
}

// The forms `ryu` writes for non-finite values.
fn special_float(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("nan"),
        recognize(pair(sign, tag_no_case("infinity"))),
        recognize(pair(sign, tag_no_case("inf"))),
    ))(input)
}

/// Does this unquoted token start the way a number does? Such tokens must be
/// a valid number; they are never taken as strings.
pub fn looks_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let mut chars = unsigned.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => matches!(chars.next(), Some(c) if c.is_ascii_digit()),
        _ => false,
    }
}

/// Classifies a whole unquoted token as a scalar value. Returns `None` if the
/// token is not a number or boolean.
pub fn parse_scalar(token: &str) -> Option<Value> {
    fn whole<'a, O>(
        token: &'a str,
        parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
    ) -> Option<O> {
        all_consuming(parser)(token).ok().map(|(_, o)| o)
    }

    if let Some(v) = whole(token, parse_i8) {
        return Some(Value::Byte(v));
    }
    if let Some(v) = whole(token, parse_i16) {
        return Some(Value::Short(v));
    }
    if let Some(v) = whole(token, parse_i64) {
        return Some(Value::Long(v));
    }
    if let Some(v) = whole(token, parse_f32) {
        return Some(Value::Float(v));
    }
    if let Some(v) = whole(token, parse_f64) {
        return Some(Value::Double(v));
    }
    if let Some(v) = whole(token, parse_i32) {
        return Some(Value::Int(v));
    }
    whole(token, parse_bool).map(Value::from)
}
