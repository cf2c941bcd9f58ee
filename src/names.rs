//! Capturing-group name validation (§4.10).
//!
//! Oniguruma's own name grammar is broader than what downstream
//! consumers of this AST accept as a group name; this parser narrows
//! group names to `^[$_\p{IDS}][$‌‍\p{IDC}]*$`, rejecting
//! names that would not be portable identifiers. `\p{IDS}`/`\p{IDC}`
//! are approximated here by `unicode-ident`'s XID_Start/XID_Continue
//! properties (the same identifier-grammar building blocks `rustc` and
//! `serde_derive` use), which coincide with ID_Start/ID_Continue for
//! every code point relevant to this grammar once the `$`, `_`, and
//! ZWNJ/ZWJ carve-outs below are applied on top.

use crate::error::{ParseError, Result};

pub(crate) fn validate_group_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    let first = chars.next().ok_or_else(|| ParseError::InvalidGroupName {
        name: name.to_string(),
    })?;
    if !(first == '$' || first == '_' || unicode_ident::is_xid_start(first)) {
        return Err(ParseError::InvalidGroupName {
            name: name.to_string(),
        });
    }

    for c in chars {
        let continues =
            c == '$' || c == '\u{200C}' || c == '\u{200D}' || unicode_ident::is_xid_continue(c);
        if !continues {
            return Err(ParseError::InvalidGroupName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ascii_identifiers() {
        assert!(validate_group_name("foo").is_ok());
        assert!(validate_group_name("_foo").is_ok());
        assert!(validate_group_name("$foo").is_ok());
        assert!(validate_group_name("foo_bar123").is_ok());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(validate_group_name("1foo").is_err());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(validate_group_name("").is_err());
    }

    #[test]
    fn rejects_hyphen() {
        assert!(validate_group_name("foo-bar").is_err());
    }

    #[test]
    fn accepts_zero_width_joiners_after_first_char() {
        assert!(validate_group_name("a\u{200C}b").is_ok());
    }
}
