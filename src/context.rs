//! Context State (§2 stage 2): the ambient bookkeeping threaded
//! through the recursive descent by shared mutable reference rather
//! than as an explicit parameter on every sub-parser call (§9 "Mutable
//! context during a recursive descent").

use indexmap::IndexMap;

use crate::ast::arena::NodeId;
use crate::ast::node::RefTarget;

/// A subroutine target awaiting §4.11 post-pass resolution.
pub(crate) struct PendingSubroutine {
    pub target: RefTarget,
}

/// Per-parse registrars: the numbered capturing-group list, the
/// named-group map-of-lists (duplicates allowed at parse time, flagged
/// later if ambiguous), the pending subroutine queue, and the flag
/// marking whether any numeric reference (backreference or
/// subroutine) has appeared.
#[derive(Default)]
pub(crate) struct Context {
    capturing_groups: Vec<NodeId>,
    named_groups: IndexMap<String, Vec<NodeId>>,
    pending_subroutines: Vec<PendingSubroutine>,
    has_numeric_ref: bool,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number the *next* capturing group to open should receive
    /// (§3.3: "1 + the count of capturing groups that opened strictly
    /// before it").
    pub fn next_group_number(&self) -> u32 {
        self.capturing_groups.len() as u32 + 1
    }

    pub fn group_count(&self) -> u32 {
        self.capturing_groups.len() as u32
    }

    pub fn group_by_number(&self, number: u32) -> Option<NodeId> {
        self.capturing_groups.get((number.checked_sub(1)?) as usize).copied()
    }

    /// Registers a capturing group. Must be called *before* its body
    /// is parsed, so that nested same-named groups register in source
    /// order (§4.6 "Order matters").
    pub fn register_capturing_group(&mut self, id: NodeId, name: Option<&str>) {
        self.capturing_groups.push(id);
        if let Some(name) = name {
            self.named_groups.entry(name.to_string()).or_default().push(id);
        }
    }

    pub fn has_named_groups(&self) -> bool {
        !self.named_groups.is_empty()
    }

    pub fn named_group_occurrences(&self, name: &str) -> usize {
        self.named_groups.get(name).map_or(0, Vec::len)
    }

    pub fn named_group_exists(&self, name: &str) -> bool {
        self.named_groups.contains_key(name)
    }

    pub fn mark_numeric_ref(&mut self) {
        self.has_numeric_ref = true;
    }

    pub fn has_numeric_ref(&self) -> bool {
        self.has_numeric_ref
    }

    pub fn register_subroutine(&mut self, target: RefTarget) {
        if matches!(target, RefTarget::Number(_)) {
            self.mark_numeric_ref();
        }
        self.pending_subroutines.push(PendingSubroutine { target });
    }

    pub fn pending_subroutines(&self) -> &[PendingSubroutine] {
        &self.pending_subroutines
    }
}
