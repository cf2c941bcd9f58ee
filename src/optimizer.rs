//! Optional tree rewrites (§4.4, §4.6), applied during construction
//! when [`crate::Options::optimize`] is set. Both preserve matching
//! semantics: the intersection-of-one collapse propagates negation by
//! XOR; the redundant-group collapse is gated by a flag/atomic
//! compatibility check that refuses combinations whose semantics would
//! change.

use crate::ast::arena::{NodeId, Tree};
use crate::ast::node::Node;

/// §4.4, applied once a `CharacterClass`'s body has been fully parsed
/// and its closing bracket consumed. Mutates `class_id` in place:
///
/// 1. Any inner base holding exactly one element that is itself a
///    `CharacterClass` is replaced, in its intersection's `classes`
///    list, by that nested class, with the nested class's `negate`
///    XORed against the base's own `negate`.
/// 2. If the intersection then holds exactly one class, its elements
///    and (XORed) negation are hoisted directly onto `class_id`,
///    eliminating both the intersection and that sole inner class.
pub(crate) fn optimize_character_class(tree: &mut Tree, class_id: NodeId) {
    let intersection_id = match tree.get(class_id) {
        Node::CharacterClass(c) => c.elements[0],
        _ => unreachable!("optimize_character_class: not a CharacterClass"),
    };

    let bases: Vec<NodeId> = match tree.get(intersection_id) {
        Node::CharacterClassIntersection(i) => i.classes.clone(),
        _ => unreachable!("optimize_character_class: elements[0] is not an Intersection"),
    };

    let mut collapsed_bases = Vec::with_capacity(bases.len());
    for base in bases {
        let single_nested_class = match tree.get(base) {
            Node::CharacterClass(base_node) if base_node.elements.len() == 1 => {
                match tree.get(base_node.elements[0]) {
                    Node::CharacterClass(_) => Some(base_node.elements[0]),
                    _ => None,
                }
            }
            _ => None,
        };

        match single_nested_class {
            Some(child) => {
                let base_negate = match tree.get(base) {
                    Node::CharacterClass(c) => c.negate,
                    _ => unreachable!(),
                };
                if let Node::CharacterClass(c) = tree.get_mut(child) {
                    c.negate ^= base_negate;
                }
                tree.set_parent(child, intersection_id);
                collapsed_bases.push(child);
            }
            None => collapsed_bases.push(base),
        }
    }

    if let Node::CharacterClassIntersection(i) = tree.get_mut(intersection_id) {
        i.classes = collapsed_bases.clone();
    }

    if let [only] = collapsed_bases.as_slice() {
        let only = *only;
        let (inner_elements, inner_negate) = match tree.get(only) {
            Node::CharacterClass(c) => (c.elements.clone(), c.negate),
            _ => unreachable!(),
        };
        for &el in &inner_elements {
            tree.set_parent(el, class_id);
        }
        if let Node::CharacterClass(c) = tree.get_mut(class_id) {
            c.elements = inner_elements;
            c.negate ^= inner_negate;
        }
    }
}

/// §4.6, applied once a `Group`'s closing paren has been consumed.
/// Returns the `NodeId` that should occupy the position `outer_id`
/// would have (either `outer_id` unchanged, or the inner group it
/// collapsed into): a `Group` with exactly one alternative holding
/// exactly one element, that element itself being a `Group` or
/// `CapturingGroup`, collapses onto that inner group when the merge of
/// `atomic`/`flags` is lossless.
///
/// Mergers: outer-atomic + inner-flags is legal (the inner keeps its
/// flags and gains atomicity); outer-flags + inner-atomic, and
/// outer-flags + inner-flags, are illegal (the merge would either
/// drop a scoped flag delta or silently change atomicity) and leave
/// `outer_id` in place uncollapsed. A `CapturingGroup` inner has no
/// `atomic`/`flags` slot to merge into, so it only collapses when the
/// outer carries neither.
pub(crate) fn collapse_redundant_group(tree: &mut Tree, outer_id: NodeId) -> NodeId {
    let (alternatives, outer_atomic, outer_flags) = match tree.get(outer_id) {
        Node::Group(g) => (g.alternatives.clone(), g.atomic, g.flags.clone()),
        _ => return outer_id,
    };

    if alternatives.len() != 1 {
        return outer_id;
    }
    let elements = match tree.get(alternatives[0]) {
        Node::Alternative(a) => a.elements.clone(),
        _ => unreachable!("collapse_redundant_group: alternative is not an Alternative"),
    };
    if elements.len() != 1 {
        return outer_id;
    }
    let inner_id = elements[0];

    match tree.get(inner_id).clone() {
        Node::Group(inner) => {
            let illegal = outer_flags.is_some() && (inner.atomic || inner.flags.is_some());
            if illegal {
                return outer_id;
            }
            let merged_atomic = outer_atomic || inner.atomic;
            let merged_flags = outer_flags.or(inner.flags);
            if let Node::Group(g) = tree.get_mut(inner_id) {
                g.atomic = merged_atomic;
                g.flags = merged_flags;
            }
            inner_id
        }
        Node::CapturingGroup(_) => {
            if outer_atomic || outer_flags.is_some() {
                outer_id
            } else {
                inner_id
            }
        }
        _ => outer_id,
    }
}
