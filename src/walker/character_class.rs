//! Character-class body parser (§4.4), including the hyphen/range
//! handling of §4.3. Follows the `OUTER`/`CLASS_BODY`/
//! `CLASS_INTERSECTION_BODY`/`RANGE_EXPECTING_RHS` state machine of
//! §4.12, collapsed into one loop: `base_id` tracks which inner base
//! (the current `CLASS_BODY` or `CLASS_INTERSECTION_BODY`) new
//! elements append to.

use crate::ast::arena::NodeId;
use crate::ast::node::Node;
use crate::error::{ParseError, Result};
use crate::optimizer;
use crate::token::Token;
use crate::walker::{Walker, token_raw};

impl Walker<'_> {
    /// §4.4. `parent` is the element this class occupies (an
    /// `Alternative` or an enclosing class's inner base).
    pub(super) fn parse_character_class(&mut self, parent: NodeId, negate: bool) -> Result<NodeId> {
        let (class_id, mut base_id) = self.tree.new_character_class(parent, negate);
        let intersection_id = match self.tree.get(class_id) {
            Node::CharacterClass(c) => c.elements[0],
            _ => unreachable!(),
        };

        loop {
            match self.peek() {
                None => return Err(ParseError::UnclosedClass),
                Some(Token::CharacterClassClose) => {
                    self.bump();
                    break;
                }
                Some(Token::CharacterClassIntersector) => {
                    self.bump();
                    base_id = self.tree.push_intersection_base(intersection_id);
                }
                Some(Token::CharacterClassHyphen) => {
                    self.bump();
                    self.parse_class_hyphen(base_id)?;
                }
                Some(_) => {
                    let child = self.parse_class_element(base_id)?;
                    self.tree.append_class_element(base_id, child);
                }
            }
        }

        if self.options.optimize {
            optimizer::optimize_character_class(&mut self.tree, class_id);
        }
        Ok(class_id)
    }

    /// §4.3. A range is formed iff the last element already appended
    /// to `base` is not itself a `CharacterClass`, and the next token
    /// is neither a class opener/closer/intersector. Otherwise the
    /// hyphen is a literal `-`.
    fn parse_class_hyphen(&mut self, base: NodeId) -> Result<()> {
        let prev = match self.tree.get(base) {
            Node::CharacterClass(c) => c.elements.last().copied(),
            _ => unreachable!(),
        };
        let prev_eligible = matches!(prev, Some(id) if !self.tree.get(id).is_character_class());
        let next_eligible = matches!(
            self.peek(),
            Some(token)
                if !matches!(
                    token,
                    Token::CharacterClassOpen { .. }
                        | Token::CharacterClassClose
                        | Token::CharacterClassIntersector
                )
        );

        if prev_eligible && next_eligible {
            let prev = prev.expect("prev_eligible implies prev is Some");
            let rhs = self.parse_class_element(base)?;
            let both_characters =
                self.tree.get(prev).as_character().is_some() && self.tree.get(rhs).as_character().is_some();
            if !both_characters {
                return Err(ParseError::InvalidRange);
            }
            self.tree.new_character_class_range(base, prev, rhs)?;
        } else {
            let literal = self.tree.new_character(base, 0x2D);
            self.tree.append_class_element(base, literal);
        }
        Ok(())
    }

    /// The class-body element dispatch §4.4 calls "recursively parse
    /// one element", narrower than [`Walker::parse_element`]: a
    /// class body admits only literal characters, character sets, a
    /// nested class, and `\R`/`\X`.
    fn parse_class_element(&mut self, base: NodeId) -> Result<NodeId> {
        match self.advance() {
            None => Err(ParseError::UnclosedClass),
            Some(Token::Character { value, .. }) => Ok(self.tree.new_character(base, value)),
            Some(Token::CharacterSet { kind, negate, property, .. }) => {
                Ok(self.parse_character_set(base, kind, negate, property))
            }
            Some(Token::CharacterClassOpen { negate }) => self.parse_character_class(base, negate),
            Some(Token::VariableLengthCharacterSet { kind }) => {
                Ok(self.tree.new_variable_length_character_set(base, kind))
            }
            Some(other) => Err(ParseError::UnexpectedToken { raw: token_raw(&other) }),
        }
    }
}
