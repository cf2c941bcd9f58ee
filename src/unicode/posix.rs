//! The POSIX bracket-expression class names (§6.5 `PosixProperties`).
//!
//! This is the read-only external table the normalizer consults to
//! decide whether a `\p{...}` name is actually a POSIX class in
//! disguise (§4.9). The fourteen names below are Oniguruma's own POSIX
//! class set; this table does not attempt to model anything beyond it.

const POSIX_NAMES: &[&str] = &[
    "alpha", "alnum", "ascii", "blank", "cntrl", "digit", "graph", "lower", "print", "punct",
    "space", "upper", "word", "xdigit",
];

/// Is `normalized_name` (already lowercased, whitespace/underscore
/// stripped) one of Oniguruma's POSIX bracket-expression class names?
pub(crate) fn is_posix_name(normalized_name: &str) -> bool {
    POSIX_NAMES.contains(&normalized_name)
}
