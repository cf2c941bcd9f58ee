//! The closed AST node taxonomy (§3.1), the "AST Types Registry"
//! pipeline stage.
//!
//! Every variant is a tagged struct carrying its own `parent` back-link
//! plus the fields §3.1 lists for that variant. Downstream consumers
//! match on [`Node`] exhaustively; new variants are never added outside
//! this closed set, and this module is the only place that constructs
//! them, so invariants (range order, quantifier order, valid capture
//! names) are enforced once, at the point of construction, rather than
//! scattered across call sites.

use serde::{Deserialize, Serialize};

use crate::ast::arena::{NodeId, Tree};
use crate::error::{ParseError, Result};
use crate::flags::FlagsDelta;
use crate::names;

/// One AST node. See the module doc and §3.1 for the field-by-variant
/// breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Node {
    RegExp(RegExpNode),
    Pattern(PatternNode),
    Flags(FlagsNode),
    Alternative(AlternativeNode),
    Group(GroupNode),
    CapturingGroup(CapturingGroupNode),
    Assertion(AssertionNode),
    Character(CharacterNode),
    CharacterSet(CharacterSetNode),
    VariableLengthCharacterSet(VariableLengthCharacterSetNode),
    CharacterClass(CharacterClassNode),
    CharacterClassIntersection(CharacterClassIntersectionNode),
    CharacterClassRange(CharacterClassRangeNode),
    Quantifier(QuantifierNode),
    Backreference(BackreferenceNode),
    Subroutine(SubroutineNode),
    Directive(DirectiveNode),
}

impl Node {
    pub fn parent(&self) -> &Option<NodeId> {
        match self {
            Node::RegExp(n) => &n.parent,
            Node::Pattern(n) => &n.parent,
            Node::Flags(n) => &n.parent,
            Node::Alternative(n) => &n.parent,
            Node::Group(n) => &n.parent,
            Node::CapturingGroup(n) => &n.parent,
            Node::Assertion(n) => &n.parent,
            Node::Character(n) => &n.parent,
            Node::CharacterSet(n) => &n.parent,
            Node::VariableLengthCharacterSet(n) => &n.parent,
            Node::CharacterClass(n) => &n.parent,
            Node::CharacterClassIntersection(n) => &n.parent,
            Node::CharacterClassRange(n) => &n.parent,
            Node::Quantifier(n) => &n.parent,
            Node::Backreference(n) => &n.parent,
            Node::Subroutine(n) => &n.parent,
            Node::Directive(n) => &n.parent,
        }
    }

    pub(crate) fn parent_mut(&mut self) -> &mut Option<NodeId> {
        match self {
            Node::RegExp(n) => &mut n.parent,
            Node::Pattern(n) => &mut n.parent,
            Node::Flags(n) => &mut n.parent,
            Node::Alternative(n) => &mut n.parent,
            Node::Group(n) => &mut n.parent,
            Node::CapturingGroup(n) => &mut n.parent,
            Node::Assertion(n) => &mut n.parent,
            Node::Character(n) => &mut n.parent,
            Node::CharacterSet(n) => &mut n.parent,
            Node::VariableLengthCharacterSet(n) => &mut n.parent,
            Node::CharacterClass(n) => &mut n.parent,
            Node::CharacterClassIntersection(n) => &mut n.parent,
            Node::CharacterClassRange(n) => &mut n.parent,
            Node::Quantifier(n) => &mut n.parent,
            Node::Backreference(n) => &mut n.parent,
            Node::Subroutine(n) => &mut n.parent,
            Node::Directive(n) => &mut n.parent,
        }
    }

    pub fn as_character(&self) -> Option<&CharacterNode> {
        match self {
            Node::Character(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_character_class(&self) -> Option<&CharacterClassNode> {
        match self {
            Node::CharacterClass(n) => Some(n),
            _ => None,
        }
    }

    pub fn is_character_class(&self) -> bool {
        matches!(self, Node::CharacterClass(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegExpNode {
    pub parent: Option<NodeId>,
    pub pattern: NodeId,
    pub flags: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternNode {
    pub parent: Option<NodeId>,
    /// Ordered, non-empty.
    pub alternatives: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagsNode {
    pub parent: Option<NodeId>,
    pub ignore_case: bool,
    pub dot_all: bool,
    pub extended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeNode {
    pub parent: Option<NodeId>,
    /// Ordered; may be empty (an empty alternative is legal, §3.3).
    pub elements: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupNode {
    pub parent: Option<NodeId>,
    /// Ordered, non-empty.
    pub alternatives: Vec<NodeId>,
    pub atomic: bool,
    pub flags: Option<FlagsDelta>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturingGroupNode {
    pub parent: Option<NodeId>,
    /// Ordered, non-empty.
    pub alternatives: Vec<NodeId>,
    /// 1-based; equals 1 + the count of capturing groups opened
    /// strictly before this one (§3.3).
    pub number: u32,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssertionKind {
    LineStart,
    LineEnd,
    StringStart,
    StringEnd,
    StringEndNewline,
    SearchStart,
    WordBoundary,
    Lookahead,
    Lookbehind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertionNode {
    pub parent: Option<NodeId>,
    pub kind: AssertionKind,
    /// Meaningful for `WordBoundary` (`\B` vs `\b`) and for lookarounds
    /// (`(?!`/`(?<!` vs `(?=`/`(?<=`). Unused (always `false`) for the
    /// remaining zero-width assertion kinds.
    pub negate: bool,
    /// Ordered, non-empty; populated only for `Lookahead`/`Lookbehind`.
    pub alternatives: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterNode {
    pub parent: Option<NodeId>,
    pub value: u32,
}

/// `CharacterSet.kind`: identical enumeration between tokenizer and
/// parser (§6.1). The "…" in §3.1's closed set covers additional
/// Oniguruma character-set kinds this crate's dispatch table does not
/// need to distinguish beyond carrying them through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterSetKind {
    Any,
    Digit,
    Hex,
    Posix,
    Property,
    Space,
    Word,
}

impl CharacterSetKind {
    /// Kinds that carry a `negate` flag (§4.5).
    pub fn supports_negate(self) -> bool {
        matches!(
            self,
            CharacterSetKind::Digit
                | CharacterSetKind::Hex
                | CharacterSetKind::Posix
                | CharacterSetKind::Property
                | CharacterSetKind::Space
                | CharacterSetKind::Word
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterSetNode {
    pub parent: Option<NodeId>,
    pub kind: CharacterSetKind,
    pub negate: bool,
    /// Present for `kind == Posix` (normalized name) or `kind ==
    /// Property` (reformatted to the target convention, §4.9).
    pub property: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VariableLengthKind {
    Newline,
    Grapheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariableLengthCharacterSetNode {
    pub parent: Option<NodeId>,
    pub kind: VariableLengthKind,
}

/// `CharacterClass.elements`: either exactly one
/// `CharacterClassIntersection` child (the general case every class
/// starts in) or zero-or-more direct elements, after the §4.4
/// single-intersection collapse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterClassNode {
    pub parent: Option<NodeId>,
    pub negate: bool,
    pub elements: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterClassIntersectionNode {
    pub parent: Option<NodeId>,
    /// Ordered, non-empty; each entry is a `CharacterClass` inner base.
    pub classes: Vec<NodeId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterClassRangeNode {
    pub parent: Option<NodeId>,
    /// Both `Character`; `min.value <= max.value`.
    pub min: NodeId,
    pub max: NodeId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantifierNode {
    pub parent: Option<NodeId>,
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
    pub greedy: bool,
    pub possessive: bool,
    pub element: NodeId,
}

/// A backreference or subroutine target: either a 1-based group number
/// or a group name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefTarget {
    Number(u32),
    Name(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackreferenceNode {
    pub parent: Option<NodeId>,
    pub reference: RefTarget,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubroutineNode {
    pub parent: Option<NodeId>,
    pub reference: RefTarget,
}

/// `Directive.kind`: identical enumeration between tokenizer and
/// parser (§6.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectiveKind {
    Flags,
    Keep,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveNode {
    pub parent: Option<NodeId>,
    pub kind: DirectiveKind,
    /// Present only for `kind == Flags`.
    pub flags: Option<FlagsDelta>,
}

// --- Node constructors ------------------------------------------------
//
// Pure factories: each allocates one node (plus, for alternatives
// containers, the mandatory first empty `Alternative`), wires the
// `parent` back-link, and enforces the invariant `spec.md` assigns to
// that variant at construction time.

impl Tree {
    /// Allocates the root: a `RegExp` node owning a fresh `Pattern`
    /// (with one empty initial `Alternative`) and a `Flags` node.
    /// Returns `(root, initial_alternative)`.
    pub(crate) fn new_root(
        ignore_case: bool,
        dot_all: bool,
        extended: bool,
    ) -> (Tree, NodeId, NodeId) {
        let mut tree = Tree::new();

        let flags_id = tree.push(Node::Flags(FlagsNode {
            parent: None,
            ignore_case,
            dot_all,
            extended,
        }));

        let alt_id = tree.push(Node::Alternative(AlternativeNode {
            parent: None,
            elements: Vec::new(),
        }));
        let pattern_id = tree.push(Node::Pattern(PatternNode {
            parent: None,
            alternatives: vec![alt_id],
        }));
        tree.set_parent(alt_id, pattern_id);

        let regexp_id = tree.push(Node::RegExp(RegExpNode {
            parent: None,
            pattern: pattern_id,
            flags: flags_id,
        }));
        tree.set_parent(pattern_id, regexp_id);
        tree.set_parent(flags_id, regexp_id);

        (tree, regexp_id, alt_id)
    }

    /// Appends a fresh empty `Alternative` to `pattern`'s alternative
    /// list (top-level `|`, §4.1).
    pub(crate) fn push_pattern_alternative(&mut self, pattern: NodeId) -> NodeId {
        let alt_id = self.new_alternative(pattern);
        match self.get_mut(pattern) {
            Node::Pattern(p) => p.alternatives.push(alt_id),
            _ => unreachable!("push_pattern_alternative: not a Pattern"),
        }
        alt_id
    }

    fn new_alternative(&mut self, parent: NodeId) -> NodeId {
        self.push(Node::Alternative(AlternativeNode {
            parent: Some(parent),
            elements: Vec::new(),
        }))
    }

    /// Appends a fresh empty `Alternative` to any alternatives-bearing
    /// container (`Group`, `CapturingGroup`, lookaround `Assertion`).
    /// Used both for the mandatory first alternative and for `|`
    /// inside a group body.
    pub(crate) fn push_container_alternative(&mut self, container: NodeId) -> NodeId {
        let alt_id = self.new_alternative(container);
        match self.get_mut(container) {
            Node::Group(g) => g.alternatives.push(alt_id),
            Node::CapturingGroup(g) => g.alternatives.push(alt_id),
            Node::Assertion(a) => a.alternatives.push(alt_id),
            _ => unreachable!("push_container_alternative: not an alternatives container"),
        }
        alt_id
    }

    /// Appends `child` to `alternative`'s element list and sets
    /// `child`'s parent to `alternative`, atomically.
    pub(crate) fn append_element(&mut self, alternative: NodeId, child: NodeId) {
        self.set_parent(child, alternative);
        match self.get_mut(alternative) {
            Node::Alternative(a) => a.elements.push(child),
            _ => unreachable!("append_element: not an Alternative"),
        }
    }

    pub(crate) fn new_group(
        &mut self,
        parent: NodeId,
        atomic: bool,
        flags: Option<FlagsDelta>,
    ) -> NodeId {
        let id = self.push(Node::Group(GroupNode {
            parent: Some(parent),
            alternatives: Vec::new(),
            atomic,
            flags,
        }));
        self.push_container_alternative(id);
        id
    }

    pub(crate) fn new_capturing_group(
        &mut self,
        parent: NodeId,
        number: u32,
        name: Option<String>,
    ) -> Result<NodeId> {
        if let Some(name) = &name {
            names::validate_group_name(name)?;
        }
        let id = self.push(Node::CapturingGroup(CapturingGroupNode {
            parent: Some(parent),
            alternatives: Vec::new(),
            number,
            name,
        }));
        self.push_container_alternative(id);
        Ok(id)
    }

    pub(crate) fn new_assertion(
        &mut self,
        parent: NodeId,
        kind: AssertionKind,
        negate: bool,
    ) -> NodeId {
        self.push(Node::Assertion(AssertionNode {
            parent: Some(parent),
            kind,
            negate,
            alternatives: Vec::new(),
        }))
    }

    /// Lookaround assertions carry at least one alternative, just like
    /// groups (§3.3).
    pub(crate) fn new_lookaround(
        &mut self,
        parent: NodeId,
        kind: AssertionKind,
        negate: bool,
    ) -> NodeId {
        debug_assert!(matches!(kind, AssertionKind::Lookahead | AssertionKind::Lookbehind));
        let id = self.push(Node::Assertion(AssertionNode {
            parent: Some(parent),
            kind,
            negate,
            alternatives: Vec::new(),
        }));
        self.push_container_alternative(id);
        id
    }

    pub(crate) fn new_character(&mut self, parent: NodeId, value: u32) -> NodeId {
        self.push(Node::Character(CharacterNode {
            parent: Some(parent),
            value,
        }))
    }

    pub(crate) fn new_character_set(
        &mut self,
        parent: NodeId,
        kind: CharacterSetKind,
        negate: bool,
        property: Option<String>,
    ) -> NodeId {
        self.push(Node::CharacterSet(CharacterSetNode {
            parent: Some(parent),
            kind,
            negate,
            property,
        }))
    }

    pub(crate) fn new_variable_length_character_set(
        &mut self,
        parent: NodeId,
        kind: VariableLengthKind,
    ) -> NodeId {
        self.push(Node::VariableLengthCharacterSet(
            VariableLengthCharacterSetNode {
                parent: Some(parent),
                kind,
            },
        ))
    }

    /// Allocates a `CharacterClass` whose `elements` is a single fresh
    /// `CharacterClassIntersection` holding one initial inner base
    /// (§4.4). Returns `(class_id, first_inner_base_id)`.
    pub(crate) fn new_character_class(&mut self, parent: NodeId, negate: bool) -> (NodeId, NodeId) {
        let class_id = self.push(Node::CharacterClass(CharacterClassNode {
            parent: Some(parent),
            negate,
            elements: Vec::new(),
        }));
        let intersection_id = self.push(Node::CharacterClassIntersection(
            CharacterClassIntersectionNode {
                parent: Some(class_id),
                classes: Vec::new(),
            },
        ));
        match self.get_mut(class_id) {
            Node::CharacterClass(c) => c.elements.push(intersection_id),
            _ => unreachable!(),
        }
        let base_id = self.push_intersection_base(intersection_id);
        (class_id, base_id)
    }

    /// Appends a fresh inner `CharacterClass` base to an intersection
    /// (initial base, or one pushed per `&&`, §4.4).
    pub(crate) fn push_intersection_base(&mut self, intersection: NodeId) -> NodeId {
        let base_id = self.push(Node::CharacterClass(CharacterClassNode {
            parent: Some(intersection),
            negate: false,
            elements: Vec::new(),
        }));
        match self.get_mut(intersection) {
            Node::CharacterClassIntersection(i) => i.classes.push(base_id),
            _ => unreachable!("push_intersection_base: not an intersection"),
        }
        base_id
    }

    /// Appends `child` to a character-class (inner) base's element
    /// list, reparenting `child`.
    pub(crate) fn append_class_element(&mut self, base: NodeId, child: NodeId) {
        self.set_parent(child, base);
        match self.get_mut(base) {
            Node::CharacterClass(c) => c.elements.push(child),
            _ => unreachable!("append_class_element: not a CharacterClass"),
        }
    }

    /// Pops `prev` out of `base`'s elements (it must be the last
    /// element) and allocates a `CharacterClassRange(prev, rhs)`,
    /// reparenting both sides and pushing the range in `prev`'s place.
    /// Fails with `RangeOutOfOrder` if `prev.value > rhs.value`.
    pub(crate) fn new_character_class_range(
        &mut self,
        base: NodeId,
        prev: NodeId,
        rhs: NodeId,
    ) -> Result<NodeId> {
        let prev_value = self
            .get(prev)
            .as_character()
            .expect("new_character_class_range: prev must be a Character")
            .value;
        let rhs_value = self
            .get(rhs)
            .as_character()
            .expect("new_character_class_range: rhs must be a Character")
            .value;
        if prev_value > rhs_value {
            return Err(ParseError::RangeOutOfOrder);
        }

        match self.get_mut(base) {
            Node::CharacterClass(c) => {
                let popped = c.elements.pop();
                debug_assert_eq!(popped, Some(prev), "prev must be the last element of base");
            }
            _ => unreachable!("new_character_class_range: base is not a CharacterClass"),
        }

        let range_id = self.push(Node::CharacterClassRange(CharacterClassRangeNode {
            parent: Some(base),
            min: prev,
            max: rhs,
        }));
        self.set_parent(prev, range_id);
        self.set_parent(rhs, range_id);
        match self.get_mut(base) {
            Node::CharacterClass(c) => c.elements.push(range_id),
            _ => unreachable!(),
        }
        Ok(range_id)
    }

    /// Pops `prev` off `alternative`'s elements (it must be the last
    /// element appended) and wraps it in a `Quantifier`, reparenting
    /// it. Fails with `RangeOutOfOrder` if `max < min`. Does not push
    /// the quantifier back onto `alternative`; the caller's own
    /// `append_element` does that.
    pub(crate) fn new_quantifier(
        &mut self,
        alternative: NodeId,
        prev: NodeId,
        min: u32,
        max: Option<u32>,
        greedy: bool,
        possessive: bool,
    ) -> Result<NodeId> {
        if let Some(max) = max {
            if max < min {
                return Err(ParseError::RangeOutOfOrder);
            }
        }

        match self.get_mut(alternative) {
            Node::Alternative(a) => {
                let popped = a.elements.pop();
                debug_assert_eq!(popped, Some(prev), "prev must be the last element");
            }
            _ => unreachable!("new_quantifier: not an Alternative"),
        }

        let quant_id = self.push(Node::Quantifier(QuantifierNode {
            parent: Some(alternative),
            min,
            max,
            greedy,
            possessive,
            element: prev,
        }));
        self.set_parent(prev, quant_id);
        Ok(quant_id)
    }

    pub(crate) fn new_backreference(&mut self, parent: NodeId, reference: RefTarget) -> NodeId {
        self.push(Node::Backreference(BackreferenceNode {
            parent: Some(parent),
            reference,
        }))
    }

    pub(crate) fn new_subroutine(&mut self, parent: NodeId, reference: RefTarget) -> NodeId {
        self.push(Node::Subroutine(SubroutineNode {
            parent: Some(parent),
            reference,
        }))
    }

    pub(crate) fn new_directive(
        &mut self,
        parent: NodeId,
        kind: DirectiveKind,
        flags: Option<FlagsDelta>,
    ) -> NodeId {
        self.push(Node::Directive(DirectiveNode {
            parent: Some(parent),
            kind,
            flags,
        }))
    }
}
