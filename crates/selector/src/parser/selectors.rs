use crate::combine::Combinator;
use crate::fragment::{Fragment, FragmentKind};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0},
    combinator::{map, opt, recognize},
    multi::many1,
    sequence::{delimited, pair, preceded},
};

/// Fragments of one compound selector, before validation.
pub type RawCompound = Vec<Fragment>;

/// Parses an identifier: letters, digits, `-` and `_`.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Consumes a parenthesized group, including nested groups such as
/// `(:nth-child(2))`.
fn parse_balanced_parens(input: &str) -> IResult<&str, &str> {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&input[i + 1..], &input[..i + 1]));
                }
            }
            _ if depth == 0 => break,
            _ => {}
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

/// Pseudo names may carry a parenthesized argument, e.g. `nth-child(2n+1)`
/// or `not(:nth-child(2))`.
fn parse_pseudo_name(input: &str) -> IResult<&str, &str> {
    recognize(pair(parse_ident, opt(parse_balanced_parens)))(input)
}

/// Parses a simple selector: Type, #ID, .Class, [attr], :pseudo or ::pseudo.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Fragment> {
    alt((
        map(preceded(tag("::"), parse_pseudo_name), |s| {
            Fragment::new(FragmentKind::PseudoElement, s)
        }),
        map(preceded(char('#'), parse_ident), |s| {
            Fragment::new(FragmentKind::Id, s)
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Fragment::new(FragmentKind::Class, s)
        }),
        map(preceded(char(':'), parse_pseudo_name), |s| {
            Fragment::new(FragmentKind::PseudoClass, s)
        }),
        map(delimited(char('['), take_until("]"), char(']')), |s: &str| {
            Fragment::new(FragmentKind::Attribute, s.trim())
        }),
        map(alt((parse_ident, tag("*"))), |s| {
            Fragment::new(FragmentKind::Element, s)
        }),
    ))(input)
}

/// Parses a compound selector (e.g., "a#x.y[href]:hover").
pub fn parse_compound_selector(input: &str) -> IResult<&str, RawCompound> {
    many1(parse_simple_selector)(input)
}

/// Parses a complex selector with combinators (e.g., "nav > ul li").
///
/// Returns the first compound and every following `(combinator, compound)`
/// pair in source order.
pub fn parse_complex_selector(
    input: &str,
) -> IResult<&str, (RawCompound, Vec<(Combinator, RawCompound)>)> {
    let (mut input, first) = parse_compound_selector(input)?;
    let mut rest = Vec::new();

    loop {
        let (rem, ws) = multispace0(input)?;

        let combinator_match: IResult<&str, Combinator> = alt((
            map(char('>'), |_| Combinator::Child),
            map(char('+'), |_| Combinator::AdjacentSibling),
            map(char('~'), |_| Combinator::GeneralSibling),
        ))(rem);

        if let Ok((after_op, found)) = combinator_match {
            let (after_ws, _) = multispace0(after_op)?;
            let (next_input, next) = parse_compound_selector(after_ws)?;
            rest.push((found, next));
            input = next_input;
            continue;
        }

        if !ws.is_empty() {
            if let Ok((next_input, next)) = parse_compound_selector(rem) {
                rest.push((Combinator::Descendant, next));
                input = next_input;
                continue;
            }
        }

        break;
    }

    Ok((input, (first, rest)))
}
