//! Text → [`SchemaAndValue`] parser built on nom combinators.
//!
//! # Grammar
//!
//! ```text
//! element := array | map | quoted | bare
//! array   := '[' ( ']' | element (',' element)* ']' )
//! map     := '{' ( '}' | entry (',' entry)* '}' )
//! entry   := element ':' element
//! quoted  := '"' ( '\' any | any but '"' )* '"'
//! bare    := run of characters other than [ ] { } , : "
//! ```
//!
//! Whitespace is allowed around every element. Once an opening bracket has
//! been seen the parser commits (`cut`), so a malformed container is reported
//! rather than silently read as text. Containers nest at most [`MAX_DEPTH`]
//! levels deep; anything deeper is malformed.

use connect_data::{STRING_SCHEMA, SchemaAndValue, Value};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{cut, map, value},
    error::{Error, ErrorKind},
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated},
};

/// Deepest nesting of arrays and maps accepted by [`parse_text`].
pub const MAX_DEPTH: usize = 64;

use crate::{
    error::ParseError,
    inference::infer_parsed,
    lex::{classify_token, is_structural, parse_temporal},
};

/// Parse header text, inferring a schema for it.
///
/// Text that does not open an array or map is read as a single token: a
/// boolean, `null`, a number, an ISO-8601 timestamp, date or time, or else
/// the original text as a string. Arrays and maps must be well formed and
/// followed by nothing but whitespace; trailing text turns the whole input
/// into a plain string.
pub fn parse_text(text: &str) -> Result<SchemaAndValue, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(plain(text));
    }

    if trimmed.starts_with(['[', '{']) {
        return match element(trimmed, 0) {
            Ok((rest, parsed)) if rest.trim().is_empty() => Ok(infer_parsed(parsed)),
            Ok(_) => Ok(plain(text)),
            Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(to_parse_error(trimmed, e)),
            Err(nom::Err::Incomplete(_)) => Err(ParseError::Exhausted),
        };
    }

    if let Some(temporal) = parse_temporal(trimmed) {
        return Ok(temporal);
    }
    match classify_token(trimmed) {
        Some(Value::Null) => Ok(SchemaAndValue::NULL),
        Some(parsed) => Ok(infer_parsed(parsed)),
        None => Ok(plain(text)),
    }
}

fn plain(text: &str) -> SchemaAndValue {
    SchemaAndValue::new(Some(STRING_SCHEMA.clone()), Value::string(text))
}

fn to_parse_error(input: &str, error: Error<&str>) -> ParseError {
    if error.input.trim().is_empty() {
        return ParseError::Exhausted;
    }
    let detail = match error.code {
        ErrorKind::TooLarge => format!("nesting deeper than {MAX_DEPTH} levels"),
        code => format!("{} near {:?}", code.description(), snippet(error.input)),
    };
    ParseError::Malformed {
        offset: input.len() - error.input.len(),
        detail,
    }
}

fn snippet(input: &str) -> &str {
    match input.char_indices().nth(16) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

fn element(input: &str, depth: usize) -> IResult<&str, Value> {
    let (input, _) = multispace0::<_, Error<&str>>(input)?;
    match input.chars().next() {
        Some('[') => array(input, depth),
        Some('{') => map_literal(input, depth),
        Some('"') => quoted(input),
        _ => bare(input),
    }
}

fn separator(input: &str) -> IResult<&str, char> {
    preceded(multispace0, char(','))(input)
}

fn closing(delimiter: char) -> impl Fn(&str) -> IResult<&str, char> {
    move |input| preceded(multispace0, char(delimiter))(input)
}

/// Depth of the container opening at `input`, or a failure past [`MAX_DEPTH`].
fn nested(input: &str, depth: usize) -> Result<usize, nom::Err<Error<&str>>> {
    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    Ok(depth + 1)
}

fn array(input: &str, depth: usize) -> IResult<&str, Value> {
    let depth = nested(input, depth)?;
    preceded(
        char('['),
        cut(alt((
            value(Value::Array(Vec::new()), closing(']')),
            map(
                terminated(
                    separated_list1(separator, cut(|i| element(i, depth))),
                    closing(']'),
                ),
                Value::Array,
            ),
        ))),
    )(input)
}

fn map_literal(input: &str, depth: usize) -> IResult<&str, Value> {
    let depth = nested(input, depth)?;
    preceded(
        char('{'),
        cut(alt((
            value(Value::Map(Vec::new()), closing('}')),
            map(
                terminated(
                    separated_list1(separator, cut(|i| entry(i, depth))),
                    closing('}'),
                ),
                Value::Map,
            ),
        ))),
    )(input)
}

fn entry(input: &str, depth: usize) -> IResult<&str, (Value, Value)> {
    separated_pair(
        |i| element(i, depth),
        cut(closing(':')),
        cut(|i| element(i, depth)),
    )(input)
}

/// A double-quoted string; a backslash escapes the character after it.
fn quoted(input: &str) -> IResult<&str, Value> {
    let Some(body) = input.strip_prefix('"') else {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
    };
    let mut text = String::new();
    let mut chars = body.char_indices();
    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => return Ok((&body[i + 1..], Value::string(text))),
            '\\' => match chars.next() {
                Some((_, escaped)) => text.push(escaped),
                None => break,
            },
            _ => text.push(ch),
        }
    }
    Err(nom::Err::Failure(Error::new(
        &body[body.len()..],
        ErrorKind::Char,
    )))
}

fn bare(input: &str) -> IResult<&str, Value> {
    map(take_while1(|c: char| !is_structural(c)), |token: &str| {
        let token = token.trim();
        classify_token(token).unwrap_or_else(|| Value::string(token))
    })(input)
}
