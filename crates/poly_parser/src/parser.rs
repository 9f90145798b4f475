use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, opt, recognize, verify},
    multi::many0,
    sequence::{pair, preceded},
    IResult,
};
use num_bigint::BigInt;
use num_traits::One;
use poly_ast::{Polynomial, Term, Variable};

use crate::error::ParseError;

/// Terms that parsed, plus one error per segment that did not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    pub polynomial: Polynomial,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn terms(&self) -> &[Term] {
        self.polynomial.terms()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_parts(self) -> (Polynomial, Vec<ParseError>) {
        (self.polynomial, self.errors)
    }
}

/// Polynomial parser for a fixed variable marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    variable: Variable,
}

impl Parser {
    pub fn new(variable: Variable) -> Self {
        Parser { variable }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    /// Parse `text` into terms in input order.
    ///
    /// Never fails as a whole: a malformed segment is logged, recorded in
    /// [`ParseOutput::errors`] and skipped.
    pub fn parse(&self, text: &str) -> ParseOutput {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let mut output = ParseOutput::default();

        for seg in segments(&compact) {
            match parse_term(seg, self.variable) {
                Ok(term) => output.polynomial.push(term),
                Err(err) => {
                    tracing::warn!(segment = seg, code = err.code(), "skipping term: {}", err);
                    output.errors.push(err);
                }
            }
        }

        tracing::debug!(
            input = text,
            terms = output.polynomial.len(),
            errors = output.errors.len(),
            "parsed polynomial"
        );
        output
    }
}

/// Parse with the default `y` marker.
pub fn parse(text: &str) -> ParseOutput {
    Parser::default().parse(text)
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

// Optional sign, then everything up to the next sign.
fn segment(input: &str) -> IResult<&str, &str> {
    verify(
        recognize(pair(opt(one_of("+-")), take_till(is_sign))),
        |s: &str| !s.is_empty(),
    )(input)
}

// Every successful `segment` consumes at least one char, so many0 always
// reaches the end of the input.
fn segments(input: &str) -> Vec<&str> {
    match many0(segment)(input) {
        Ok((_, segs)) => segs,
        Err(_) => Vec::new(),
    }
}

/// Parse one whitespace-free segment such as `-3y^2`, `+y` or `7`.
pub fn parse_term(segment: &str, variable: Variable) -> Result<Term, ParseError> {
    let (body, negative) = match segment.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (segment.strip_prefix('+').unwrap_or(segment), false),
    };

    if body.is_empty() {
        return Err(ParseError::EmptyTerm {
            segment: segment.to_string(),
        });
    }

    let marker = variable.symbol();
    let (magnitude, degree) = match body.split_once(marker) {
        None => (parse_integer(body, segment)?, 0),
        Some((_, rest)) if rest.contains(marker) => {
            return Err(ParseError::MultipleVariables {
                segment: segment.to_string(),
                variable: marker,
            });
        }
        Some((coef_part, rest)) => {
            let magnitude = if coef_part.is_empty() {
                BigInt::one()
            } else {
                parse_integer(coef_part, segment)?
            };
            (magnitude, parse_exponent(rest, segment)?)
        }
    };

    let coefficient = if negative { -magnitude } else { magnitude };
    Ok(Term::new(coefficient, degree))
}

fn parse_integer(literal: &str, segment: &str) -> Result<BigInt, ParseError> {
    let invalid = || ParseError::InvalidInteger {
        segment: segment.to_string(),
        literal: literal.to_string(),
    };

    let digits: IResult<&str, &str> = all_consuming(digit1)(literal);
    let (_, digits) = digits.map_err(|_| invalid())?;
    digits.parse::<BigInt>().map_err(|_| invalid())
}

// `rest` is whatever follows the variable marker. The degree is taken from
// the first `^` followed by digits; anything else after the marker is ignored,
// and a bare marker means degree 1.
fn parse_exponent(rest: &str, segment: &str) -> Result<u32, ParseError> {
    if !rest.contains('^') {
        return Ok(1);
    }

    let first_run = rest.match_indices('^').find_map(|(i, _)| {
        let exponent: IResult<&str, &str> = preceded(char('^'), digit1)(&rest[i..]);
        exponent.ok().map(|(_, digits)| digits)
    });

    match first_run {
        Some(digits) => digits
            .parse::<u32>()
            .map_err(|_| ParseError::ExponentOutOfRange {
                segment: segment.to_string(),
                exponent: digits.to_string(),
            }),
        None => Err(ParseError::MalformedExponent {
            segment: segment.to_string(),
        }),
    }
}
