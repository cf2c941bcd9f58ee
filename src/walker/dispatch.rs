//! The per-token dispatch table (§4.1) shared by every alternative
//! body (pattern, group, lookaround).

use crate::ast::arena::NodeId;
use crate::ast::node::AssertionKind;
use crate::error::{ParseError, Result};
use crate::token::Token;
use crate::walker::{Walker, token_raw};

impl Walker<'_> {
    /// Consumes exactly one token and emits the node it dispatches to,
    /// per the §4.1 table. `Alternator` is handled by the caller's
    /// body loop, not here.
    pub(super) fn parse_element(&mut self, alt: NodeId) -> Result<NodeId> {
        match self.advance() {
            None => unreachable!("parse_element called with no tokens remaining"),

            Some(Token::Assertion { raw }) => {
                let kind = assertion_kind(&raw)?;
                let negate = raw == "\\B";
                Ok(self.tree.new_assertion(alt, kind, negate))
            }

            Some(Token::Backreference { raw }) => self.parse_backreference(alt, &raw),

            Some(Token::Character { value, .. }) => Ok(self.tree.new_character(alt, value)),

            Some(Token::CharacterClassOpen { negate }) => self.parse_character_class(alt, negate),

            Some(Token::CharacterSet { kind, negate, property, .. }) => {
                Ok(self.parse_character_set(alt, kind, negate, property))
            }

            Some(Token::Directive { kind, flags, .. }) => {
                Ok(self.tree.new_directive(alt, kind, flags))
            }

            Some(Token::GroupOpen { kind, negate, name, flags, .. }) => {
                self.parse_group(alt, kind, negate, name, flags)
            }

            Some(Token::Quantifier { min, max, greedy, possessive }) => {
                self.parse_quantifier(alt, min, max, greedy, possessive)
            }

            Some(Token::Subroutine { raw }) => self.parse_subroutine(alt, &raw),

            Some(Token::VariableLengthCharacterSet { kind }) => {
                Ok(self.tree.new_variable_length_character_set(alt, kind))
            }

            Some(other) => Err(ParseError::UnexpectedToken { raw: token_raw(&other) }),
        }
    }
}

/// §4.1 "Assertion kind mapping". `\b`/`\B` both map to `WordBoundary`;
/// the caller derives `negate` separately from the raw text.
fn assertion_kind(raw: &str) -> Result<AssertionKind> {
    match raw {
        "^" => Ok(AssertionKind::LineStart),
        "$" => Ok(AssertionKind::LineEnd),
        "\\A" => Ok(AssertionKind::StringStart),
        "\\z" => Ok(AssertionKind::StringEnd),
        "\\Z" => Ok(AssertionKind::StringEndNewline),
        "\\b" | "\\B" => Ok(AssertionKind::WordBoundary),
        "\\G" => Ok(AssertionKind::SearchStart),
        other => Err(ParseError::UnknownKind { what: other.to_string() }),
    }
}
