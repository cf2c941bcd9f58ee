//! Group parser (§4.6): dispatches on the opening token's kind,
//! registers capturing groups before descending into their body, and
//! applies the redundant-nesting collapse after close.

use crate::ast::arena::NodeId;
use crate::ast::node::{AssertionKind, Node};
use crate::error::Result;
use crate::flags::FlagsDelta;
use crate::optimizer;
use crate::token::GroupOpenKind;
use crate::walker::{BodyOwner, Walker};

impl Walker<'_> {
    /// `parent` is where the produced node attaches. The tokenizer's
    /// own `number` field (if any) is not consulted; this parser
    /// always assigns capturing-group numbers itself, sequentially, so
    /// that `CapturingGroup.number` tracks *this* parse's left-to-right
    /// open order (§3.3) regardless of what the tokenizer guessed.
    pub(super) fn parse_group(
        &mut self,
        parent: NodeId,
        kind: GroupOpenKind,
        negate: bool,
        name: Option<String>,
        flags: Option<FlagsDelta>,
    ) -> Result<NodeId> {
        match kind {
            GroupOpenKind::Capturing => {
                let number = self.ctx.next_group_number();
                let id = self.tree.new_capturing_group(parent, number, name.clone())?;
                self.ctx.register_capturing_group(id, name.as_deref());
                self.parse_group_body(id)?;
                Ok(id)
            }
            GroupOpenKind::Group => {
                let id = self.tree.new_group(parent, false, flags);
                self.parse_group_body(id)?;
                Ok(self.maybe_collapse(id))
            }
            GroupOpenKind::Atomic => {
                let id = self.tree.new_group(parent, true, None);
                self.parse_group_body(id)?;
                Ok(self.maybe_collapse(id))
            }
            GroupOpenKind::Lookahead => {
                let id = self.tree.new_lookaround(parent, AssertionKind::Lookahead, negate);
                self.parse_group_body(id)?;
                Ok(id)
            }
            GroupOpenKind::Lookbehind => {
                let id = self.tree.new_lookaround(parent, AssertionKind::Lookbehind, negate);
                self.parse_group_body(id)?;
                Ok(id)
            }
        }
    }

    /// `Tree::new_group`/`new_capturing_group`/`new_lookaround` already
    /// allocate the mandatory first `Alternative` (§3.3); this just
    /// looks it up rather than pushing a second one.
    fn parse_group_body(&mut self, container: NodeId) -> Result<()> {
        let first_alt = match self.tree.get(container) {
            Node::Group(g) => g.alternatives[0],
            Node::CapturingGroup(g) => g.alternatives[0],
            Node::Assertion(a) => a.alternatives[0],
            _ => unreachable!("parse_group_body: not an alternatives container"),
        };
        self.parse_body(BodyOwner::Container(container), first_alt)
    }

    fn maybe_collapse(&mut self, group_id: NodeId) -> NodeId {
        if self.options.optimize {
            optimizer::collapse_redundant_group(&mut self.tree, group_id)
        } else {
            group_id
        }
    }
}
