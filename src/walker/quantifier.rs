//! Quantifier parser (§4.7): wraps the preceding sibling, then guards
//! against variable-length repetition nested inside a lookbehind.

use crate::ast::arena::NodeId;
use crate::ast::node::{AssertionKind, Node};
use crate::error::{ParseError, Result};
use crate::walker::Walker;

impl Walker<'_> {
    pub(super) fn parse_quantifier(
        &mut self,
        alt: NodeId,
        min: u32,
        max: Option<u32>,
        greedy: bool,
        possessive: bool,
    ) -> Result<NodeId> {
        let prev = match self.tree.get(alt) {
            Node::Alternative(a) => a.elements.last().copied(),
            _ => unreachable!("parse_quantifier: not an Alternative"),
        }
        .ok_or(ParseError::NothingToRepeat)?;

        let quant_id = self.tree.new_quantifier(alt, prev, min, max, greedy, possessive)?;

        let variable_length = max != Some(min);
        if variable_length {
            let in_lookbehind = self.tree.ancestors(quant_id).any(|ancestor| {
                matches!(
                    self.tree.get(ancestor),
                    Node::Assertion(a) if a.kind == AssertionKind::Lookbehind
                )
            });
            if in_lookbehind {
                return Err(ParseError::VariableLookbehind);
            }
        }

        Ok(quant_id)
    }
}
