//! Subroutine parser (§4.8). Unlike backreferences, out-of-range
//! targets are not rejected here: resolution is absolute at parse
//! time, but existence is checked later by the post-pass validator
//! (§4.11), since a subroutine may legitimately name a group that
//! opens later in the stream.

use crate::ast::arena::NodeId;
use crate::ast::node::RefTarget;
use crate::error::{ParseError, Result};
use crate::walker::{Sign, Walker, parse_numeral, strip_delims};

impl Walker<'_> {
    pub(super) fn parse_subroutine(&mut self, parent: NodeId, raw: &str) -> Result<NodeId> {
        let inner = strip_delims(raw, "\\g")
            .ok_or_else(|| ParseError::UnknownKind { what: raw.to_string() })?;

        let target = match parse_numeral(inner, true) {
            Some((sign, requested)) => RefTarget::Number(self.resolve_absolute(sign, requested)),
            None => RefTarget::Name(inner.to_string()),
        };

        self.ctx.register_subroutine(target.clone());
        Ok(self.tree.new_subroutine(parent, target))
    }

    /// §4.8's three resolution formulas, clamped to 0 (itself never a
    /// valid group number) instead of underflowing when a `-`-relative
    /// reference requests more groups than currently exist to its left.
    fn resolve_absolute(&self, sign: Sign, requested: u32) -> u32 {
        let available = i64::from(self.ctx.group_count());
        let requested = i64::from(requested);
        let resolved = match sign {
            Sign::None => requested,
            Sign::Plus => available + requested,
            Sign::Minus => available + 1 - requested,
        };
        resolved.max(0) as u32
    }
}
