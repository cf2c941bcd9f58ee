use crate::ast::node::{AssertionKind, Node};
use crate::flags::FlagsDelta;
use crate::tests::{
    atomic_open, capturing_open, character, group_close, group_open, lookahead_open,
    lookbehind_open, parse, parse_optimized, root_elements,
};
use crate::ParseError;

#[test]
fn capturing_groups_number_sequentially_by_open_order() {
    let tokens = vec![
        capturing_open(None),
        capturing_open(None),
        group_close(),
        character('a'),
        group_close(),
        capturing_open(None),
        character('b'),
        group_close(),
    ];
    let tree = parse(tokens).unwrap();
    let elements = root_elements(&tree);
    assert_eq!(elements.len(), 2);
    let outer = match tree.get(elements[0]) {
        Node::CapturingGroup(g) => g,
        other => panic!("expected CapturingGroup, got {other:?}"),
    };
    assert_eq!(outer.number, 1);
    let inner_alt = tree.get(outer.alternatives[0]);
    let inner_id = match inner_alt {
        Node::Alternative(a) => a.elements[0],
        other => panic!("expected Alternative, got {other:?}"),
    };
    match tree.get(inner_id) {
        Node::CapturingGroup(g) => assert_eq!(g.number, 2),
        other => panic!("expected CapturingGroup, got {other:?}"),
    }
    match tree.get(elements[1]) {
        Node::CapturingGroup(g) => assert_eq!(g.number, 3),
        other => panic!("expected CapturingGroup, got {other:?}"),
    }
}

#[test]
fn named_capture_registers_under_its_name() {
    let tokens = vec![capturing_open(Some("word")), character('a'), group_close()];
    let tree = parse(tokens).unwrap();
    match tree.get(root_elements(&tree)[0]) {
        Node::CapturingGroup(g) => assert_eq!(g.name.as_deref(), Some("word")),
        other => panic!("expected CapturingGroup, got {other:?}"),
    }
}

#[test]
fn lookahead_and_lookbehind_carry_negate_and_kind() {
    let tree = parse(vec![lookahead_open(false), character('a'), group_close()]).unwrap();
    match tree.get(root_elements(&tree)[0]) {
        Node::Assertion(a) => {
            assert_eq!(a.kind, AssertionKind::Lookahead);
            assert!(!a.negate);
        }
        other => panic!("expected Assertion, got {other:?}"),
    }

    let tree = parse(vec![lookbehind_open(true), character('a'), group_close()]).unwrap();
    match tree.get(root_elements(&tree)[0]) {
        Node::Assertion(a) => {
            assert_eq!(a.kind, AssertionKind::Lookbehind);
            assert!(a.negate);
        }
        other => panic!("expected Assertion, got {other:?}"),
    }
}

#[test]
fn unclosed_group_fails() {
    let err = parse(vec![capturing_open(None), character('a')]).unwrap_err();
    assert!(matches!(err, ParseError::UnclosedGroup));
}

#[test]
fn stray_close_at_top_level_fails() {
    let err = parse(vec![group_close()]).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn redundant_plain_group_nesting_collapses_when_optimized() {
    let tokens = vec![group_open(None), group_open(None), character('a'), group_close(), group_close()];
    let tree = parse_optimized(tokens).unwrap();
    let elements = root_elements(&tree);
    assert_eq!(elements.len(), 1);
    match tree.get(elements[0]) {
        Node::Group(g) => {
            let inner_alt = tree.get(g.alternatives[0]);
            match inner_alt {
                Node::Alternative(a) => {
                    assert!(matches!(tree.get(a.elements[0]), Node::Character(_)));
                }
                other => panic!("expected Alternative, got {other:?}"),
            }
        }
        other => panic!("expected Group, got {other:?}"),
    }
}

#[test]
fn outer_flags_with_inner_atomic_does_not_collapse() {
    let delta = FlagsDelta { enable: "i".to_string(), disable: String::new() };
    let tokens =
        vec![group_open(Some(delta)), atomic_open(), character('a'), group_close(), group_close()];
    let tree = parse_optimized(tokens).unwrap();
    let elements = root_elements(&tree);
    match tree.get(elements[0]) {
        Node::Group(g) => assert!(g.flags.is_some()),
        other => panic!("expected Group, got {other:?}"),
    }
}

#[test]
fn plain_outer_wrapping_capturing_group_collapses_to_the_capture() {
    let tokens = vec![group_open(None), capturing_open(None), character('a'), group_close(), group_close()];
    let tree = parse_optimized(tokens).unwrap();
    let elements = root_elements(&tree);
    assert_eq!(elements.len(), 1);
    assert!(matches!(tree.get(elements[0]), Node::CapturingGroup(_)));
}
