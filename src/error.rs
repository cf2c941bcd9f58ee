//! Parse failures.
//!
//! The parser never recovers: the first failure aborts the walk and is
//! returned as a [`ParseError`]. There is no diagnostics collector here
//! (contrast with a batch compiler) because a single parse produces at
//! most one error.

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// The closed set of ways a parse can fail.
///
/// Every variant carries the offending raw token text when the
/// triggering token supplied one.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// A token appeared where the grammar allows nothing, or a variant
    /// the walker does not dispatch on.
    #[error("unexpected token: {raw}")]
    UnexpectedToken { raw: String },

    /// A `GroupOpen` was never matched by a `GroupClose` before the
    /// token stream ran out.
    #[error("unclosed group")]
    UnclosedGroup,

    /// A `CharacterClassOpen` was never matched by a
    /// `CharacterClassClose` before the token stream ran out.
    #[error("unclosed character class")]
    UnclosedClass,

    /// A `CharacterClassHyphen` formed a range whose sides were not
    /// both single characters.
    #[error("invalid character class range")]
    InvalidRange,

    /// A quantifier's `max` was smaller than its `min`.
    #[error("quantifier range out of order")]
    RangeOutOfOrder,

    /// A quantifier token appeared with no preceding element to repeat.
    #[error("nothing to repeat")]
    NothingToRepeat,

    /// A variable-length quantifier (`min != max`) was applied inside a
    /// lookbehind assertion.
    #[error("variable-length repetition is not allowed inside lookbehind")]
    VariableLookbehind,

    /// A numbered backreference or subroutine referred to a group
    /// number greater than the number of capturing groups that exist
    /// (at parse time, for subroutines; ever, for backreferences).
    #[error("reference to group {requested} but only {available} group(s) exist")]
    InsufficientGroups { requested: u32, available: u32 },

    /// A named backreference named a group that does not exist.
    #[error("undefined group name: {name}")]
    UndefinedGroupName { name: String },

    /// A `\k<...>` backreference body was neither a valid numeric
    /// reference nor a bare name (it contained `-`/`+` outside of a
    /// numeric sign position).
    #[error("invalid backreference name: {raw}")]
    InvalidBackrefName { raw: String },

    /// A numbered subroutine referred to a group number that does not
    /// exist, once the full capturing-group table is known.
    #[error("subroutine target group {number} is undefined")]
    SubroutineGroupUndefined { number: u32 },

    /// A named subroutine named a group that does not exist.
    #[error("subroutine target name is undefined: {name}")]
    SubroutineNameUndefined { name: String },

    /// A named subroutine named a group that exists more than once.
    #[error("subroutine target name is ambiguous: {name}")]
    SubroutineNameAmbiguous { name: String },

    /// A numeric backreference or subroutine coexists with at least one
    /// named capturing group, which Oniguruma's dialect forbids.
    #[error("numeric reference used alongside named capturing groups")]
    NumericRefWithNamedCapture,

    /// A capturing group's name failed the identifier grammar of §4.10.
    #[error("invalid group name: {name}")]
    InvalidGroupName { name: String },

    /// Defensive guard: an enum mapping (assertion raw text, token
    /// kind) reached a value the walker does not know how to handle.
    #[error("unknown kind: {what}")]
    UnknownKind { what: String },
}
