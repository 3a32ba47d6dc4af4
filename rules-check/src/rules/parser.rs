use std::fmt::Formatter;

use nom::branch::alt;
use nom::bytes::complete::{tag, take_while, take_while1};
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt, value};
use nom::error::{context, ErrorKind};
use nom::sequence::delimited;
use nom::InputTake;
use nom_locate::LocatedSpan;

use crate::rules::grammar::{GrammarShape, Operator, ParsedClause};

/// Clause text, with the name of the rules file it came from as `extra`.
pub(crate) type Span<'a> = LocatedSpan<&'a str, &'a str>;

#[derive(Clone, PartialEq, Debug)]
pub(crate) struct ParserError<'a> {
    pub(crate) context: String,
    pub(crate) span: Span<'a>,
    pub(crate) kind: ErrorKind,
}

pub(crate) type IResult<'a, I, O> = nom::IResult<I, O, ParserError<'a>>;

impl<'a> nom::error::ParseError<Span<'a>> for ParserError<'a> {
    fn from_error_kind(input: Span<'a>, kind: ErrorKind) -> Self {
        ParserError {
            context: "".to_string(),
            span: input,
            kind,
        }
    }

    fn append(_input: Span<'a>, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<'a> nom::error::ContextError<Span<'a>> for ParserError<'a> {
    fn add_context(input: Span<'a>, ctx: &'static str, other: Self) -> Self {
        let context = if other.context.is_empty() {
            ctx.to_string()
        } else {
            format!("{}/{}", ctx, other.context)
        };

        ParserError {
            context,
            span: input,
            kind: other.kind,
        }
    }
}

impl<'a> std::fmt::Display for ParserError<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = format!(
            "Error parsing file {} at column {}, when handling {}, fragment {}",
            self.span.extra,
            self.span.get_utf8_column(),
            self.context,
            *self.span.fragment()
        );
        f.write_str(&message)?;
        Ok(())
    }
}

fn is_argument_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "/_.*%-".contains(c)
}

fn white_space0(input: Span) -> IResult<Span, Span> {
    take_while(|c: char| c.is_whitespace())(input)
}

//
// KEY is the longest run of upper case letters, the grammar tables decide
// whether it names anything
//
pub(crate) fn key(input: Span) -> IResult<Span, Span> {
    take_while1(|c: char| c.is_ascii_uppercase())(input)
}

pub(crate) fn argument(input: Span) -> IResult<Span, Span> {
    delimited(char('{'), take_while1(is_argument_char), char('}'))(input)
}

//
// Longest tokens first, `=` is a prefix of `==`
//
pub(crate) fn operator(input: Span) -> IResult<Span, Operator> {
    alt((
        value(Operator::Match, tag("==")),
        value(Operator::Nomatch, tag("!=")),
        value(Operator::AssignAdd, tag("+=")),
        value(Operator::AssignFinal, tag(":=")),
        value(Operator::Assign, tag("=")),
    ))(input)
}

//
// "..." where `\` escapes the next character. Returns the text between the
// quotes untouched.
//
pub(crate) fn quoted_value(input: Span) -> IResult<Span, Span> {
    let (input, _begin) = char('"')(input)?;
    let mut chars = input.fragment().char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => {
                let (remainder, content) = input.take_split(idx);
                let (remainder, _end) = char('"')(remainder)?;
                return Ok((remainder, content));
            }
            '\\' => {
                if chars.next().is_none() {
                    break;
                }
            }
            _ => {}
        }
    }

    Err(nom::Err::Error(ParserError {
        context: String::from("unterminated quoted value"),
        span: input,
        kind: ErrorKind::Char,
    }))
}

pub(crate) fn clause(input: Span) -> IResult<Span, ParsedClause> {
    let (input, key) = context("key", key)(input)?;
    let (input, argument) = opt(argument)(input)?;
    let (input, _) = white_space0(input)?;
    let (input, operator) = context("operator", operator)(input)?;
    let (input, _) = white_space0(input)?;
    let (input, value) = context("value", quoted_value)(input)?;

    Ok((
        input,
        ParsedClause {
            key: *key.fragment(),
            argument: argument.map(|arg| *arg.fragment()),
            operator,
            value: *value.fragment(),
        },
    ))
}

/// Parses the whole of `text` as a single clause. Anything left over after
/// the closing quote is an error.
pub(crate) fn parse_clause<'a>(
    text: &'a str,
    origin: &'a str,
) -> Result<ParsedClause<'a>, nom::Err<ParserError<'a>>> {
    let (_, parsed) = all_consuming(clause)(Span::new_extra(text, origin))?;
    Ok(parsed)
}

/// Parse then dispatch. `None` when the clause is not well formed or when
/// no shape accepts its key, argument and operator combination.
pub fn classify_clause(text: &str) -> Option<GrammarShape> {
    match parse_clause(text, "") {
        Ok(parsed) => GrammarShape::classify(&parsed),
        Err(_) => None,
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
