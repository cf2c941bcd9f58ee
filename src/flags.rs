//! Pattern-level flags (§6.2) and scoped flag deltas (§3.1 `Group`,
//! `Directive`).

use serde::{Deserialize, Serialize};

/// `{ignoreCase, dotAll, extended}`, carried verbatim into the
/// `Flags` AST node; this crate does not interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlagsInput {
    pub ignore_case: bool,
    pub dot_all: bool,
    pub extended: bool,
}

/// An inline `enable`/`disable` flag change, as seen on a scoped
/// `Group` (`(?i-m:...)`) or a `flags`-kind `Directive`.
///
/// Each field names the individual flag letters toggled; Oniguruma
/// supports more flag letters than `FlagsInput` models pattern-wide
/// (`i`, `m`, `x`, ...), so the delta is represented as the raw set of
/// characters rather than reusing `FlagsInput`'s three named fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlagsDelta {
    pub enable: String,
    pub disable: String,
}
