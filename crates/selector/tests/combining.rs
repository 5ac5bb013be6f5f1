//! Integration tests for `combine` and the `combine!` macro.

use insta::assert_snapshot;
use selector::{BUILDER, Combinator, Piece, Stringify, combine};

#[test]
fn test_adjacent_sibling() {
    let mut sel = combine!(
        BUILDER.element("div").id("main").unwrap(),
        "+",
        BUILDER.element("table").id("data").unwrap()
    );
    assert_eq!(sel.stringify(), "div#main + table#data");
}

#[test]
fn test_child_token_gets_spaces() {
    let mut sel = combine!(BUILDER.element("ul"), ">", BUILDER.element("li"));
    assert_eq!(sel.stringify(), "ul > li");
}

#[test]
fn test_combinator_enum_tokens() {
    let mut sel = combine!(
        BUILDER.element("h1"),
        Combinator::GeneralSibling,
        BUILDER.element("p"),
        Combinator::Child,
        BUILDER.element("em")
    );
    assert_snapshot!(sel.stringify(), @"h1 ~ p > em");
}

#[test]
fn test_nested_combine() {
    let inner = combine!(BUILDER.element("a"), "+", BUILDER.element("b"));
    let mut outer = combine!(
        BUILDER.element("section").class("news").unwrap(),
        "~",
        inner
    );
    assert_eq!(outer.stringify(), "section.news ~ a + b");
}

#[test]
fn test_combine_ignores_order_rules_across_pieces() {
    // each piece is its own compound, so an id after a pseudo-element is fine
    let mut sel = combine!(
        BUILDER.pseudo_element("before"),
        "+",
        BUILDER.id("x"),
        "+",
        BUILDER.id("y")
    );
    assert_eq!(sel.stringify(), "::before + #x + #y");
}

#[test]
fn test_combine_function_form() {
    let mut sel = combine(vec![
        Piece::from(BUILDER.class("a")),
        Piece::from(String::from(">")),
        Piece::from(BUILDER.class("b")),
    ]);
    assert_eq!(sel.stringify(), ".a > .b");
}

#[test]
fn test_combined_is_renderable_again() {
    let mut sel = combine!(BUILDER.element("a"), "+", BUILDER.element("b"));
    assert_eq!(sel.stringify(), "a + b");
    assert_eq!(sel.stringify(), "a + b");
    assert_eq!(sel.as_str(), "a + b");
}

#[test]
fn test_token_only() {
    let mut sel = combine!(">");
    assert_eq!(sel.stringify(), " > ");
}
