use crate::ast::node::{Node, RefTarget};
use crate::tests::{backreference, capturing_open, character, group_close, parse, root_elements};
use crate::ParseError;

#[test]
fn bare_numeric_form_resolves_to_preceding_capture() {
    let tokens =
        vec![capturing_open(None), character('a'), group_close(), backreference("\\1")];
    let tree = parse(tokens).unwrap();
    let elements = root_elements(&tree);
    match tree.get(elements[1]) {
        Node::Backreference(b) => assert_eq!(b.reference, RefTarget::Number(1)),
        other => panic!("expected Backreference, got {other:?}"),
    }
}

#[test]
fn forward_numeric_reference_fails_insufficient_groups() {
    let err = parse(vec![backreference("\\1")]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InsufficientGroups { requested: 1, available: 0 }
    ));
}

#[test]
fn bracketed_name_resolves_after_named_capture() {
    let tokens = vec![
        capturing_open(Some("foo")),
        character('a'),
        group_close(),
        backreference("\\k<foo>"),
    ];
    let tree = parse(tokens).unwrap();
    match tree.get(root_elements(&tree)[1]) {
        Node::Backreference(b) => assert_eq!(b.reference, RefTarget::Name("foo".to_string())),
        other => panic!("expected Backreference, got {other:?}"),
    }
}

#[test]
fn bracketed_name_undefined_fails() {
    let err = parse(vec![backreference("\\k<foo>")]).unwrap_err();
    assert!(matches!(err, ParseError::UndefinedGroupName { name } if name == "foo"));
}

#[test]
fn bracketed_relative_negative_resolves_to_last_group() {
    let tokens = vec![
        capturing_open(None),
        character('a'),
        group_close(),
        capturing_open(None),
        character('b'),
        group_close(),
        backreference("\\k<-1>"),
    ];
    let tree = parse(tokens).unwrap();
    match tree.get(root_elements(&tree)[2]) {
        Node::Backreference(b) => assert_eq!(b.reference, RefTarget::Number(2)),
        other => panic!("expected Backreference, got {other:?}"),
    }
}

#[test]
fn bracketed_body_with_stray_sign_is_not_a_valid_name() {
    let tokens = vec![capturing_open(None), character('a'), group_close(), backreference("\\k<foo-bar>")];
    let err = parse(tokens).unwrap_err();
    assert!(matches!(err, ParseError::InvalidBackrefName { .. }));
}
