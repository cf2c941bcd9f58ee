use crate::ast::node::Node;
use crate::tests::{
    capturing_open, character, group_close, lookbehind_open, parse, quantifier, root_elements,
};
use crate::ParseError;

#[test]
fn quantifier_wraps_preceding_sibling() {
    let tokens = vec![character('a'), quantifier(0, Some(1))];
    let tree = parse(tokens).unwrap();
    let elements = root_elements(&tree);
    assert_eq!(elements.len(), 1);
    match tree.get(elements[0]) {
        Node::Quantifier(q) => {
            assert_eq!(q.min, 0);
            assert_eq!(q.max, Some(1));
            assert!(matches!(tree.get(q.element), Node::Character(_)));
        }
        other => panic!("expected Quantifier, got {other:?}"),
    }
}

#[test]
fn unbounded_max_is_none() {
    let tokens = vec![character('a'), quantifier(0, None)];
    let tree = parse(tokens).unwrap();
    match tree.get(root_elements(&tree)[0]) {
        Node::Quantifier(q) => assert_eq!(q.max, None),
        other => panic!("expected Quantifier, got {other:?}"),
    }
}

#[test]
fn quantifier_with_nothing_to_repeat_fails() {
    let err = parse(vec![quantifier(0, Some(1))]).unwrap_err();
    assert!(matches!(err, ParseError::NothingToRepeat));
}

#[test]
fn quantifier_with_max_less_than_min_fails() {
    let err = parse(vec![character('a'), quantifier(3, Some(2))]).unwrap_err();
    assert!(matches!(err, ParseError::RangeOutOfOrder));
}

#[test]
fn quantifier_right_after_group_close_repeats_the_group() {
    let tokens =
        vec![capturing_open(None), character('a'), group_close(), quantifier(1, Some(1))];
    let tree = parse(tokens).unwrap();
    match tree.get(root_elements(&tree)[0]) {
        Node::Quantifier(q) => {
            assert!(matches!(tree.get(q.element), Node::CapturingGroup(_)));
        }
        other => panic!("expected Quantifier, got {other:?}"),
    }
}

#[test]
fn scenario_7_variable_length_quantifier_inside_lookbehind_fails() {
    let tokens = vec![
        lookbehind_open(false),
        character('a'),
        quantifier(2, Some(3)),
        group_close(),
    ];
    let err = parse(tokens).unwrap_err();
    assert!(matches!(err, ParseError::VariableLookbehind));
}

#[test]
fn fixed_length_quantifier_inside_lookbehind_succeeds() {
    let tokens = vec![
        lookbehind_open(false),
        character('a'),
        quantifier(2, Some(2)),
        group_close(),
    ];
    assert!(parse(tokens).is_ok());
}

#[test]
fn variable_length_quantifier_outside_lookbehind_succeeds() {
    let tokens = vec![character('a'), quantifier(2, Some(3))];
    assert!(parse(tokens).is_ok());
}
