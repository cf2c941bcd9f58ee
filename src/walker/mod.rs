//! Recursive Descent Walker (§4.1–§4.8, §4.12): the token-dispatched
//! parser. [`Walker`] owns the monotonically advancing cursor, the
//! growing [`Tree`], and the [`Context`] threaded through every
//! sub-parser by shared mutable reference rather than an explicit
//! parameter on every call (§9 "Mutable context during a recursive
//! descent").

mod backreference;
mod character_class;
mod character_set;
mod dispatch;
mod group;
mod quantifier;
mod subroutine;

use crate::ast::arena::{NodeId, Tree};
use crate::ast::node::Node;
use crate::context::Context;
use crate::error::{ParseError, Result};
use crate::flags::FlagsInput;
use crate::options::Options;
use crate::token::Token;
use crate::validate;

/// Which container a body loop (§4.1's per-alternative loop) pushes a
/// fresh `Alternative` onto when it sees a top-level `|`, and what
/// closes the loop: the pattern body runs to end of input, every
/// other container (`Group`, `CapturingGroup`, lookaround `Assertion`)
/// closes on `GroupClose` and fails `UnclosedGroup` on exhaustion.
enum BodyOwner {
    Pattern(NodeId),
    Container(NodeId),
}

/// The sign carried by a relative/absolute numeric backreference or
/// subroutine body (§4.2, §4.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    None,
    Plus,
    Minus,
}

/// Matches `^([-+]?)0*([1-9]\d*)$` (subroutines), or its `-`-only
/// subset (backreferences, `allow_plus = false`): an optional sign,
/// then any number of leading zeros, then a nonzero decimal integer.
/// Returns the sign and the parsed magnitude, or `None` if `body`
/// isn't of that shape.
pub(crate) fn parse_numeral(body: &str, allow_plus: bool) -> Option<(Sign, u32)> {
    let (sign, rest) = match body.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => match body.strip_prefix('+') {
            Some(rest) if allow_plus => (Sign::Plus, rest),
            _ => (Sign::None, body),
        },
    };

    if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let significant = rest.trim_start_matches('0');
    if significant.is_empty() {
        return None;
    }
    significant.parse().ok().map(|value| (sign, value))
}

/// Strips a `\k`/`\g`-style prefix and its `<...>`/`'...'` delimiters,
/// returning the inner text. `None` if `raw` does not have `prefix`
/// followed by a matched delimiter pair.
fn strip_delims<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = raw.strip_prefix(prefix)?;
    rest.strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .or_else(|| rest.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
}

/// The text an `UnexpectedToken`/diagnostic should name for a token
/// with no `raw` field of its own.
fn token_raw(token: &Token) -> String {
    token
        .raw()
        .map(str::to_string)
        .unwrap_or_else(|| format!("{token:?}"))
}

pub(crate) struct Walker<'a> {
    tokens: &'a [Token],
    pos: usize,
    tree: Tree,
    ctx: Context,
    options: Options,
}

impl<'a> Walker<'a> {
    fn new(tokens: &'a [Token], tree: Tree, options: Options) -> Self {
        Self {
            tokens,
            pos: 0,
            tree,
            ctx: Context::new(),
            options,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// The shared body loop (§4.1 main loop; also used, with
    /// `BodyOwner::Container`, for group and lookaround bodies per
    /// §4.6). Character-class bodies have their own loop
    /// ([`character_class`]) since `|` does not apply there and
    /// `CharacterClassIntersector`/`CharacterClassHyphen` need
    /// class-specific handling.
    fn parse_body(&mut self, owner: BodyOwner, mut current_alt: NodeId) -> Result<()> {
        loop {
            match self.peek() {
                None => {
                    return match owner {
                        BodyOwner::Pattern(_) => Ok(()),
                        BodyOwner::Container(_) => Err(ParseError::UnclosedGroup),
                    };
                }
                Some(Token::GroupClose) => {
                    return match owner {
                        BodyOwner::Pattern(_) => {
                            Err(ParseError::UnexpectedToken { raw: token_raw(&Token::GroupClose) })
                        }
                        BodyOwner::Container(_) => {
                            self.bump();
                            Ok(())
                        }
                    };
                }
                Some(Token::Alternator) => {
                    self.bump();
                    current_alt = match owner {
                        BodyOwner::Pattern(pattern) => self.tree.push_pattern_alternative(pattern),
                        BodyOwner::Container(container) => {
                            self.tree.push_container_alternative(container)
                        }
                    };
                }
                Some(_) => {
                    let node = self.parse_element(current_alt)?;
                    self.tree.append_element(current_alt, node);
                }
            }
        }
    }
}

/// Entry point (§4.1, §6.4): walks `tokens` into a `RegExp` root, then
/// runs the post-pass validator (§4.11) before returning the tree.
pub fn parse(tokens: &[Token], flags: FlagsInput, options: Options) -> Result<Tree> {
    let (tree, root, initial_alt) =
        Tree::new_root(flags.ignore_case, flags.dot_all, flags.extended);
    let pattern = match tree.get(root) {
        Node::RegExp(regexp) => regexp.pattern,
        _ => unreachable!("Tree::new_root did not return a RegExp node"),
    };

    let mut walker = Walker::new(tokens, tree, options);
    walker.parse_body(BodyOwner::Pattern(pattern), initial_alt)?;

    validate::validate(&walker.ctx)?;
    Ok(walker.tree)
}
