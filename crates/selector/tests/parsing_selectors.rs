//! Integration tests for selector text parsing.
//!
//! Parsed selectors are validated with the same rules as built ones.

use selector::parser::{parse_compound, parse_selector, specificity};
use selector::{BUILDER, Combinator, FragmentKind, SelectorError, Specificity, Stringify};

// ============================================================================
// COMPOUND SELECTORS
// ============================================================================

#[test]
fn test_parse_type_id_class() {
    let sel = parse_compound("a#x.y").unwrap();
    let kinds: Vec<_> = sel.fragments().iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![FragmentKind::Element, FragmentKind::Id, FragmentKind::Class]
    );
    assert_eq!(sel, BUILDER.element("a").id("x").unwrap().class("y").unwrap());
}

#[test]
fn test_parse_attribute_and_pseudos() {
    let mut sel = parse_compound(r#"a[href$=".png"]:focus::after"#).unwrap();
    assert_eq!(sel.fragments()[1].kind(), FragmentKind::Attribute);
    assert_eq!(sel.fragments()[2].kind(), FragmentKind::PseudoClass);
    assert_eq!(sel.fragments()[3].kind(), FragmentKind::PseudoElement);
    assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus::after"#);
}

#[test]
fn test_parse_pseudo_with_argument() {
    let sel = parse_compound("li:nth-child(2n+1)").unwrap();
    assert_eq!(sel.fragments()[1].value(), "nth-child(2n+1)");
}

#[test]
fn test_parse_nested_pseudo_argument() {
    let sel = parse_compound("li:not(:nth-child(2))").unwrap();
    assert_eq!(sel.fragments()[1].kind(), FragmentKind::PseudoClass);
    assert_eq!(sel.fragments()[1].value(), "not(:nth-child(2))");
    assert_eq!(sel.render(), "li:not(:nth-child(2))");
}

#[test]
fn test_parse_unclosed_pseudo_argument() {
    assert!(matches!(
        parse_compound("li:not(:hover"),
        Err(SelectorError::Syntax(_))
    ));
}

#[test]
fn test_parse_universal() {
    let sel = parse_compound("*.item").unwrap();
    assert_eq!(sel.fragments()[0].kind(), FragmentKind::Element);
    assert_eq!(sel.render(), "*.item");
}

#[test]
fn test_parse_surrounding_whitespace() {
    assert_eq!(parse_compound("  .x  ").unwrap().render(), ".x");
}

#[test]
fn test_parse_out_of_order() {
    assert_eq!(parse_compound(".c#x"), Err(SelectorError::OutOfOrder));
}

#[test]
fn test_parse_duplicate() {
    assert_eq!(parse_compound("#a#b"), Err(SelectorError::DuplicatePart));
}

#[test]
fn test_parse_compound_rejects_combinators() {
    assert!(matches!(
        parse_compound("a > b"),
        Err(SelectorError::Syntax(_))
    ));
}

#[test]
fn test_parse_empty() {
    assert!(matches!(parse_compound(""), Err(SelectorError::Syntax(_))));
}

// ============================================================================
// COMPLEX SELECTORS
// ============================================================================

#[test]
fn test_parse_combinators() {
    let sel = parse_selector("nav > ul li + a ~ b").unwrap();
    let combinators: Vec<_> = sel.parts.iter().map(|p| p.combinator).collect();
    assert_eq!(
        combinators,
        vec![
            Some(Combinator::Child),
            Some(Combinator::Descendant),
            Some(Combinator::AdjacentSibling),
            Some(Combinator::GeneralSibling),
            None,
        ]
    );
    assert_eq!(sel.to_string(), "nav > ul li + a ~ b");
}

#[test]
fn test_parse_combinator_without_spaces() {
    let sel = parse_selector("div>p").unwrap();
    assert_eq!(sel.parts.len(), 2);
    assert_eq!(sel.to_string(), "div > p");
}

#[test]
fn test_parse_into_combined() {
    let mut combined = parse_selector("div#main + table#data")
        .unwrap()
        .into_combined();
    assert_eq!(combined.stringify(), "div#main + table#data");
}

#[test]
fn test_parse_validates_each_compound() {
    assert_eq!(
        parse_selector("div > p.a#b"),
        Err(SelectorError::OutOfOrder)
    );
}

#[test]
fn test_parse_trailing_combinator() {
    assert!(matches!(
        parse_selector("div >"),
        Err(SelectorError::Syntax(_))
    ));
}

#[test]
fn test_parse_unexpected_tokens() {
    assert!(matches!(
        parse_selector("div, p"),
        Err(SelectorError::Syntax(_))
    ));
}

// ============================================================================
// SPECIFICITY
// ============================================================================

#[test]
fn test_specificity_of_compound() {
    let sel = BUILDER
        .element("a")
        .id("x")
        .and_then(|s| s.class("y"))
        .and_then(|s| s.attr("href"))
        .and_then(|s| s.pseudo_class("hover"))
        .and_then(|s| s.pseudo_element("after"))
        .unwrap();
    assert_eq!(
        sel.specificity(),
        Specificity {
            ids: 1,
            classes: 3,
            types: 2
        }
    );
}

#[test]
fn test_specificity_sums_parts() {
    assert_eq!(
        specificity("#nav > ul.menu li").unwrap(),
        Specificity {
            ids: 1,
            classes: 1,
            types: 2
        }
    );
}

#[test]
fn test_universal_adds_no_specificity() {
    assert_eq!(
        specificity("*.item").unwrap(),
        Specificity {
            ids: 0,
            classes: 1,
            types: 0
        }
    );
    assert_eq!(specificity("*").unwrap(), Specificity::default());
}

#[test]
fn test_specificity_ordering() {
    let id = specificity("#a").unwrap();
    let classes = specificity(".a.b.c").unwrap();
    assert!(id > classes);
}
