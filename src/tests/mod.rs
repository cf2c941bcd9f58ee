//! Construct-by-construct parser tests, hand-assembling token streams
//! (the tokenizer is a collaborator out of this crate's scope) rather
//! than lexing source text.

mod backreferences;
mod groups;
mod quantifiers;

use crate::ast::node::{CharacterSetKind, DirectiveKind, Node, VariableLengthKind};
use crate::flags::FlagsDelta;
use crate::options::Options;
use crate::token::{GroupOpenKind, Token};
use crate::{FlagsInput, ParseError, Tree};

fn default_flags() -> FlagsInput {
    FlagsInput::default()
}

fn parse(tokens: Vec<Token>) -> crate::Result<Tree> {
    crate::parse(&tokens, default_flags(), Options::default())
}

fn parse_optimized(tokens: Vec<Token>) -> crate::Result<Tree> {
    crate::parse(&tokens, default_flags(), Options { optimize: true })
}

fn character(value: char) -> Token {
    Token::Character { value: value as u32, raw: value.to_string() }
}

fn capturing_open(name: Option<&str>) -> Token {
    Token::GroupOpen {
        kind: GroupOpenKind::Capturing,
        negate: false,
        number: None,
        name: name.map(str::to_string),
        flags: None,
    }
}

fn group_open(flags: Option<FlagsDelta>) -> Token {
    Token::GroupOpen { kind: GroupOpenKind::Group, negate: false, number: None, name: None, flags }
}

fn atomic_open() -> Token {
    Token::GroupOpen { kind: GroupOpenKind::Atomic, negate: false, number: None, name: None, flags: None }
}

fn lookahead_open(negate: bool) -> Token {
    Token::GroupOpen {
        kind: GroupOpenKind::Lookahead,
        negate,
        number: None,
        name: None,
        flags: None,
    }
}

fn lookbehind_open(negate: bool) -> Token {
    Token::GroupOpen {
        kind: GroupOpenKind::Lookbehind,
        negate,
        number: None,
        name: None,
        flags: None,
    }
}

fn group_close() -> Token {
    Token::GroupClose
}

fn quantifier(min: u32, max: Option<u32>) -> Token {
    Token::Quantifier { min, max, greedy: true, possessive: false }
}

fn backreference(raw: &str) -> Token {
    Token::Backreference { raw: raw.to_string() }
}

fn subroutine(raw: &str) -> Token {
    Token::Subroutine { raw: raw.to_string() }
}

fn class_open(negate: bool) -> Token {
    Token::CharacterClassOpen { negate }
}

fn class_close() -> Token {
    Token::CharacterClassClose
}

fn class_hyphen() -> Token {
    Token::CharacterClassHyphen
}

fn class_intersector() -> Token {
    Token::CharacterClassIntersector
}

fn character_set(kind: CharacterSetKind, negate: bool, property: Option<&str>) -> Token {
    Token::CharacterSet {
        kind,
        negate,
        property: property.map(str::to_string),
        raw: String::new(),
    }
}

fn variable_length(kind: VariableLengthKind) -> Token {
    Token::VariableLengthCharacterSet { kind }
}

fn directive(kind: DirectiveKind, flags: Option<FlagsDelta>) -> Token {
    Token::Directive { kind, flags, raw: String::new() }
}

fn assertion(raw: &str) -> Token {
    Token::Assertion { raw: raw.to_string() }
}

/// The arena is append-only and the root is the last `RegExp` node
/// allocated by `Tree::new_root`; scanning for it keeps these tests
/// independent of exactly which allocation index that happens to be.
fn root_id(tree: &Tree) -> crate::NodeId {
    (0..tree.len() as u32)
        .map(crate::ast::arena::NodeId::from_raw)
        .find(|&id| matches!(tree.get(id), Node::RegExp(_)))
        .expect("tree has no RegExp root")
}

/// The single top-level alternative every non-alternated tree has.
fn root_elements(tree: &Tree) -> &[crate::NodeId] {
    match tree.get(root_id(tree)) {
        Node::RegExp(r) => match tree.get(r.pattern) {
            Node::Pattern(p) => match tree.get(p.alternatives[0]) {
                Node::Alternative(a) => &a.elements,
                _ => unreachable!(),
            },
            _ => unreachable!(),
        },
        _ => unreachable!(),
    }
}

fn assert_err(result: crate::Result<Tree>, expected: impl Fn(&ParseError) -> bool) {
    match result {
        Ok(_) => panic!("expected an error"),
        Err(e) => assert!(expected(&e), "unexpected error: {e:?}"),
    }
}
