//! Recursive descent parser for sNBT, built from `nom` combinators.
//!
//! Recoverable errors (`nom::Err::Error`) let the caller try another
//! alternative. Once a container has been opened the parser is committed,
//! and errors inside it become `nom::Err::Failure` so the innermost failure
//! is what gets reported.

use std::str::FromStr;

use log::{debug, trace};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{alphanumeric1, char, digit0, digit1, multispace0, one_of},
    combinator::{eof, map, opt, recognize},
    error::{ErrorKind, ParseError},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use crate::{
    error::{Error, Result},
    ByteArray, IntArray, List, LongArray, Tag, Value,
};

/// Parser error: the remaining input at the failure, and what was expected
/// there.
#[derive(Debug, Clone, PartialEq)]
struct Syntax<'a> {
    input: &'a str,
    expected: &'static str,
}

impl<'a> ParseError<&'a str> for Syntax<'a> {
    fn from_error_kind(input: &'a str, _kind: ErrorKind) -> Self {
        Syntax {
            input,
            expected: "valid snbt",
        }
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

type PResult<'a, O> = IResult<&'a str, O, Syntax<'a>>;

/// How many lists, arrays and compounds may be nested inside each other.
const MAX_DEPTH: usize = 512;
const TOO_DEEP: &str = "nesting no deeper than 512";

pub(crate) fn parse(input: &str) -> Result<Value> {
    trace!("parsing {} bytes of snbt", input.len());

    let res = terminated(value(MAX_DEPTH), preceded(ws, expect("end of input", eof)))(input);
    res.map(|(_, v)| v).map_err(|e| {
        let err = match e {
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                Error::expected_at(input.len() - e.input.len(), e.expected)
            }
            // Only streaming parsers ask for more input, and none are used.
            nom::Err::Incomplete(_) => Error::expected_at(input.len(), "a tag"),
        };
        debug!("invalid snbt: {}", err);
        err
    })
}

fn error<'a, O>(input: &'a str, expected: &'static str) -> PResult<'a, O> {
    Err(nom::Err::Error(Syntax { input, expected }))
}

fn failure<'a, O>(input: &'a str, expected: &'static str) -> PResult<'a, O> {
    Err(nom::Err::Failure(Syntax { input, expected }))
}

fn commit<O>(res: PResult<'_, O>) -> PResult<'_, O> {
    res.map_err(|e| match e {
        nom::Err::Error(e) => nom::Err::Failure(e),
        e => e,
    })
}

/// Replace a recoverable error from `parser` with `expected`, reported at
/// the position `parser` started from.
fn expect<'a, O, F>(expected: &'static str, mut parser: F) -> impl FnMut(&'a str) -> PResult<'a, O>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    move |input| match parser(input) {
        Err(nom::Err::Error(_)) => error(input, expected),
        res => res,
    }
}

fn ws(input: &str) -> PResult<'_, &str> {
    multispace0(input)
}

fn symbol<'a>(c: char) -> impl FnMut(&'a str) -> PResult<'a, char> {
    char(c)
}

fn suffix<'a>(s: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    tag_no_case(s)
}

/// Any tag. `depth` is how many more containers may be opened below this
/// point.
fn value<'a>(depth: usize) -> impl FnMut(&'a str) -> PResult<'a, Value> {
    move |input| {
        let (input, _) = ws(input)?;

        match input.chars().next() {
            Some('{' | '[') if depth == 0 => failure(input, TOO_DEEP),
            Some('{') => compound(input, depth - 1),
            Some('[') => array_or_list(input, depth - 1),
            Some('"') | Some('\'') => map(quoted, Value::String)(input),
            _ => expect(
                "a tag",
                alt((number, map(bare_word, |s: &str| Value::String(s.to_owned())))),
            )(input),
        }
    }
}

/// Comma separated `element`s up to and including `close`. The opening
/// bracket must already be consumed.
fn sequence<'a, O, F>(
    close: char,
    expected: &'static str,
    mut element: F,
) -> impl FnMut(&'a str) -> PResult<'a, Vec<O>>
where
    F: FnMut(&'a str) -> PResult<'a, O>,
{
    move |input| {
        let mut items = Vec::new();
        let (mut input, _) = ws(input)?;
        if let Some(rest) = input.strip_prefix(close) {
            return Ok((rest, items));
        }

        loop {
            let (rest, item) = commit(element(input))?;
            items.push(item);

            let (rest, _) = ws(rest)?;
            let mut chars = rest.chars();
            match chars.next() {
                Some(',') => input = chars.as_str(),
                Some(c) if c == close => return Ok((chars.as_str(), items)),
                _ => return failure(rest, expected),
            }
        }
    }
}

// ------------- Compounds -------------

fn compound(input: &str, depth: usize) -> PResult<'_, Value> {
    let (input, _) = symbol('{')(input)?;
    let (input, entries) = sequence('}', "',' or '}'", entry(depth))(input)?;

    // A repeated key keeps its first position and takes the last value.
    Ok((input, Value::Compound(entries.into_iter().collect())))
}

fn entry<'a>(depth: usize) -> impl FnMut(&'a str) -> PResult<'a, (String, Value)> {
    move |input| {
        let (input, _) = ws(input)?;
        let (input, key) = expect(
            "a compound key",
            alt((quoted, map(bare_word, |s: &str| s.to_owned()))),
        )(input)?;
        let (input, _) = ws(input)?;
        let (input, _) = expect("':'", symbol(':'))(input)?;
        let (input, value) = value(depth)(input)?;
        Ok((input, (key, value)))
    }
}

// ------------- Lists and arrays -------------

fn array_or_list(input: &str, depth: usize) -> PResult<'_, Value> {
    let (input, _) = symbol('[')(input)?;

    match array_prefix(input) {
        Ok((input, tag)) => typed_array(tag, input),
        Err(nom::Err::Error(_)) => {
            let (input, values) = sequence(']', "',' or ']'", value(depth))(input)?;
            Ok((input, Value::List(List::new(values))))
        }
        Err(e) => Err(e),
    }
}

/// The `B;`, `I;` or `L;` that marks a list as a typed array.
fn array_prefix(input: &str) -> PResult<'_, Tag> {
    let (input, _) = ws(input)?;
    let (input, tag) = alt((
        map(symbol('B'), |_| Tag::ByteArray),
        map(symbol('I'), |_| Tag::IntArray),
        map(symbol('L'), |_| Tag::LongArray),
    ))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = symbol(';')(input)?;
    Ok((input, tag))
}

fn typed_array(tag: Tag, input: &str) -> PResult<'_, Value> {
    const EXPECTED: &str = "',' or ']'";

    match tag {
        Tag::ByteArray => {
            let elem = array_element("b", "a byte between -128 and 127");
            let (input, data) = sequence(']', EXPECTED, elem)(input)?;
            Ok((input, Value::ByteArray(ByteArray::new(data))))
        }
        Tag::IntArray => {
            let elem = array_element("i", "an int between -2147483648 and 2147483647");
            let (input, data) = sequence(']', EXPECTED, elem)(input)?;
            Ok((input, Value::IntArray(IntArray::new(data))))
        }
        _ => {
            let elem = array_element("l", "a long in 64-bit range");
            let (input, data) = sequence(']', EXPECTED, elem)(input)?;
            Ok((input, Value::LongArray(LongArray::new(data))))
        }
    }
}

/// An integer array element. It may repeat the array's own letter as a
/// suffix, but no other suffix.
fn array_element<'a, T: FromStr>(
    letter: &'static str,
    range: &'static str,
) -> impl FnMut(&'a str) -> PResult<'a, T> {
    move |input| {
        let (input, _) = ws(input)?;
        let (rest, digits) = expect("an integer", integer)(input)?;
        let (rest, _) = opt(suffix(letter))(rest)?;
        match digits.parse() {
            Ok(v) => Ok((rest, v)),
            Err(_) => failure(input, range),
        }
    }
}

// ------------- Strings -------------

fn bare_word(input: &str) -> PResult<'_, &str> {
    alphanumeric1(input)
}

/// A string in double or single quotes. A backslash escapes the quote
/// character or another backslash, and is kept as is before anything else.
fn quoted(input: &str) -> PResult<'_, String> {
    let quote = match input.chars().next() {
        Some(c @ ('"' | '\'')) => c,
        _ => return error(input, "a quoted string"),
    };

    let body = &input[1..];
    let mut out = String::new();
    let mut chars = body.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if c == quote {
            return Ok((&body[i + 1..], out));
        }
        if c == '\\' {
            if let Some(&(_, next)) = chars.peek() {
                if next == quote || next == '\\' {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    failure(&body[body.len()..], "closing quote")
}

// ------------- Numbers -------------

fn integer(input: &str) -> PResult<'_, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn float(input: &str) -> PResult<'_, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        digit1,
        opt(pair(char('.'), digit0)),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/// The ways a number can be read.
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Numeric {
    // On equal length the earlier reading wins, so a bare `1` is an Int.
    const ALL: [Numeric; 6] = [
        Numeric::Byte,
        Numeric::Short,
        Numeric::Int,
        Numeric::Long,
        Numeric::Float,
        Numeric::Double,
    ];

    /// Recognise this reading, returning the number without its suffix.
    fn scan(self, input: &str) -> PResult<'_, &str> {
        match self {
            Numeric::Byte => terminated(integer, suffix("b"))(input),
            Numeric::Short => terminated(integer, suffix("s"))(input),
            Numeric::Int => integer(input),
            Numeric::Long => terminated(integer, suffix("l"))(input),
            Numeric::Float => terminated(float, suffix("f"))(input),
            Numeric::Double => terminated(float, opt(suffix("d")))(input),
        }
    }

    fn convert(self, text: &str) -> Option<Value> {
        match self {
            Numeric::Byte => text.parse().ok().map(Value::Byte),
            Numeric::Short => text.parse().ok().map(Value::Short),
            Numeric::Int => text.parse().ok().map(Value::Int),
            Numeric::Long => text.parse().ok().map(Value::Long),
            Numeric::Float => text
                .parse::<f32>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Float),
            Numeric::Double => text
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Value::Double),
        }
    }

    fn range(self) -> &'static str {
        match self {
            Numeric::Byte => "a byte between -128 and 127",
            Numeric::Short => "a short between -32768 and 32767",
            Numeric::Int => "an int between -2147483648 and 2147483647",
            Numeric::Long => "a long in 64-bit range",
            Numeric::Float => "a finite float",
            Numeric::Double => "a finite double",
        }
    }
}

/// Every reading is scanned and the longest match is converted. Taking the
/// first reading that matches would read `1.0f` as the int `1`.
fn number(input: &str) -> PResult<'_, Value> {
    let mut best: Option<(Numeric, &str, &str)> = None;

    for numeric in Numeric::ALL {
        match numeric.scan(input) {
            Ok((rest, text)) => {
                if best.map_or(true, |(_, _, best_rest)| rest.len() < best_rest.len()) {
                    best = Some((numeric, text, rest));
                }
            }
            Err(nom::Err::Error(_)) => {}
            Err(e) => return Err(e),
        }
    }

    match best {
        Some((numeric, text, rest)) => match numeric.convert(text) {
            Some(value) => Ok((rest, value)),
            None => failure(input, numeric.range()),
        },
        None => error(input, "a number"),
    }
}
