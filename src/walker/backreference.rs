//! Backreference parser (§4.2).

use crate::ast::arena::NodeId;
use crate::ast::node::RefTarget;
use crate::error::{ParseError, Result};
use crate::walker::{Sign, Walker, parse_numeral, strip_delims};

impl Walker<'_> {
    pub(super) fn parse_backreference(&mut self, parent: NodeId, raw: &str) -> Result<NodeId> {
        let target = match strip_delims(raw, "\\k") {
            Some(inner) => self.resolve_bracketed(raw, inner)?,
            None => self.resolve_bare(raw)?,
        };
        Ok(self.tree.new_backreference(parent, target))
    }

    /// `\k<...>`/`\k'...'`: numeric (absolute or `-`-relative), or a
    /// name looked up in the named-group map.
    fn resolve_bracketed(&mut self, raw: &str, inner: &str) -> Result<RefTarget> {
        if let Some((sign, requested)) = parse_numeral(inner, false) {
            let available = self.ctx.group_count();
            if requested > available {
                return Err(ParseError::InsufficientGroups { requested, available });
            }
            let number = match sign {
                Sign::Minus => available + 1 - requested,
                _ => requested,
            };
            self.ctx.mark_numeric_ref();
            return Ok(RefTarget::Number(number));
        }

        if inner.contains('-') || inner.contains('+') {
            return Err(ParseError::InvalidBackrefName { raw: raw.to_string() });
        }

        if !self.ctx.named_group_exists(inner) {
            return Err(ParseError::UndefinedGroupName { name: inner.to_string() });
        }
        Ok(RefTarget::Name(inner.to_string()))
    }

    /// Bare `\n`/`\nn`/`\nnn` form: absolute numeric only.
    fn resolve_bare(&mut self, raw: &str) -> Result<RefTarget> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let requested: u32 = digits
            .parse()
            .map_err(|_| ParseError::InvalidBackrefName { raw: raw.to_string() })?;
        let available = self.ctx.group_count();
        if requested == 0 || requested > available {
            return Err(ParseError::InsufficientGroups { requested, available });
        }
        self.ctx.mark_numeric_ref();
        Ok(RefTarget::Number(requested))
    }
}
