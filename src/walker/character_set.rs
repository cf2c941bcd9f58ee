//! Character-set parser (§4.5).

use crate::ast::arena::NodeId;
use crate::ast::node::CharacterSetKind;
use crate::unicode::{self, Normalized};
use crate::walker::Walker;

impl Walker<'_> {
    /// The tokenizer's `property`-kind sets carry a raw name that may
    /// still need demotion to a POSIX class or reformatting as a
    /// script name (§4.9); every other kind, and POSIX sets arriving
    /// already classified by the tokenizer, pass through unchanged
    /// apart from clearing `negate` on kinds that don't support it.
    pub(super) fn parse_character_set(
        &mut self,
        parent: NodeId,
        kind: CharacterSetKind,
        negate: bool,
        property: Option<String>,
    ) -> NodeId {
        let (kind, property) = match kind {
            CharacterSetKind::Property => {
                match unicode::normalize_property_name(property.as_deref().unwrap_or_default()) {
                    Normalized::Posix(name) => (CharacterSetKind::Posix, Some(name)),
                    Normalized::Property(name) => (CharacterSetKind::Property, Some(name)),
                }
            }
            other => (other, property),
        };
        let negate = if kind.supports_negate() { negate } else { false };

        self.tree.new_character_set(parent, kind, negate, property)
    }
}
