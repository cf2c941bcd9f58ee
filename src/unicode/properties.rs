//! The Unicode property normalizer (§4.9): maps source-flavor
//! property names to target-flavor names, demotes recognized POSIX
//! names, and reformats unrecognized names as script names.

use crate::unicode::posix::is_posix_name;

/// `JsUnicodePropertiesMap` (§6.5): normalized-name → canonical
/// target name, for the general (non-script, non-POSIX) Unicode
/// properties and binary properties Oniguruma exposes under `\p{...}`.
/// Consumed read-only, the same way the real table this crate's table
/// stands in for would be, this crate does not claim Unicode-data
/// completeness (§6.5, SPEC_FULL §G); a production build would load
/// the full table from the external collaborator this module wraps.
const PROPERTY_MAP: &[(&str, &str)] = &[
    ("alphabetic", "Alphabetic"),
    ("any", "Any"),
    ("ascii", "ASCII"),
    ("asciihexdigit", "ASCII_Hex_Digit"),
    ("assigned", "Assigned"),
    ("bidicontrol", "Bidi_Control"),
    ("cased", "Cased"),
    ("casedletter", "LC"),
    ("lc", "LC"),
    ("c", "C"),
    ("other", "C"),
    ("cc", "Cc"),
    ("control", "Cc"),
    ("cf", "Cf"),
    ("format", "Cf"),
    ("cn", "Cn"),
    ("unassigned", "Cn"),
    ("co", "Co"),
    ("privateuse", "Co"),
    ("cs", "Cs"),
    ("surrogate", "Cs"),
    ("dash", "Dash"),
    ("defaultignorablecodepoint", "Default_Ignorable_Code_Point"),
    ("deprecated", "Deprecated"),
    ("diacritic", "Diacritic"),
    ("emoji", "Emoji"),
    ("emojicomponent", "Emoji_Component"),
    ("emojimodifier", "Emoji_Modifier"),
    ("emojimodifierbase", "Emoji_Modifier_Base"),
    ("emojipresentation", "Emoji_Presentation"),
    ("extender", "Extender"),
    ("graphemebase", "Grapheme_Base"),
    ("graphemeextend", "Grapheme_Extend"),
    ("hexdigit", "Hex_Digit"),
    ("idcontinue", "ID_Continue"),
    ("idstart", "ID_Start"),
    ("ideographic", "Ideographic"),
    ("joincontrol", "Join_Control"),
    ("l", "L"),
    ("letter", "L"),
    ("ll", "Ll"),
    ("lowercaseletter", "Ll"),
    ("lm", "Lm"),
    ("modifierletter", "Lm"),
    ("lo", "Lo"),
    ("otherletter", "Lo"),
    ("lowercase", "Lowercase"),
    ("lt", "Lt"),
    ("titlecaseletter", "Lt"),
    ("lu", "Lu"),
    ("uppercaseletter", "Lu"),
    ("m", "M"),
    ("mark", "M"),
    ("combiningmark", "M"),
    ("mc", "Mc"),
    ("spacingmark", "Mc"),
    ("me", "Me"),
    ("enclosingmark", "Me"),
    ("mn", "Mn"),
    ("nonspacingmark", "Mn"),
    ("math", "Math"),
    ("n", "N"),
    ("number", "N"),
    ("nd", "Nd"),
    ("decimalnumber", "Nd"),
    ("nl", "Nl"),
    ("letternumber", "Nl"),
    ("no", "No"),
    ("othernumber", "No"),
    ("p", "P"),
    ("punctuation", "P"),
    ("pattern_syntax", "Pattern_Syntax"),
    ("patternwhitespace", "Pattern_White_Space"),
    ("quotationmark", "Quotation_Mark"),
    ("radical", "Radical"),
    ("s", "S"),
    ("symbol", "S"),
    ("sentenceterminal", "Sentence_Terminal"),
    ("softdotted", "Soft_Dotted"),
    ("terminalpunctuation", "Terminal_Punctuation"),
    ("unifiedideograph", "Unified_Ideograph"),
    ("variationselector", "Variation_Selector"),
    ("whitespace", "White_Space"),
    ("xidcontinue", "XID_Continue"),
    ("xidstart", "XID_Start"),
    ("z", "Z"),
    ("separator", "Z"),
    ("zl", "Zl"),
    ("lineseparator", "Zl"),
    ("zp", "Zp"),
    ("paragraphseparator", "Zp"),
    ("zs", "Zs"),
    ("spaceseparator", "Zs"),
];

/// Lowercases and strips whitespace/underscores, the normalization key
/// every lookup in this module uses.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// The outcome of normalizing a `\p{...}`/`\P{...}` property name.
pub(crate) enum Normalized {
    /// The name denotes a POSIX bracket-expression class; `kind`
    /// should switch to `CharacterSetKind::Posix`.
    Posix(String),
    /// A general (or script) property; `kind` stays `Property`.
    Property(String),
}

/// §4.9: normalize by case-folding and stripping whitespace/
/// underscores, look up in the property map; if found, demote to
/// POSIX or return the canonical target name. Otherwise treat `raw` as
/// a script name and reformat it. No fallback lookup is performed for
/// an unrecognized script name; the heuristic result is returned
/// as-is.
pub(crate) fn normalize_property_name(raw: &str) -> Normalized {
    let key = normalize_key(raw);

    if is_posix_name(&key) {
        return Normalized::Posix(key);
    }

    if let Some((_, canonical)) = PROPERTY_MAP.iter().find(|(k, _)| *k == key) {
        return Normalized::Property((*canonical).to_string());
    }

    Normalized::Property(reformat_script_name(raw))
}

/// Reformats an unrecognized property name as a script name: trim,
/// collapse whitespace/`_`/`-` runs to a single `_`, split camelCase
/// boundaries with `_`, and Titlecase each resulting word.
fn reformat_script_name(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut normalized_seps = String::with_capacity(trimmed.len());
    let mut prev_lower = false;
    for c in trimmed.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            if !normalized_seps.is_empty() && !normalized_seps.ends_with('_') {
                normalized_seps.push('_');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            normalized_seps.push('_');
        }
        normalized_seps.push(c);
        prev_lower = c.is_lowercase();
    }

    normalized_seps
        .trim_matches('_')
        .split('_')
        .filter(|w| !w.is_empty())
        .map(titlecase_word)
        .collect::<Vec<_>>()
        .join("_")
}

fn titlecase_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.as_str().to_lowercase();
            format!("{}{}", first.to_uppercase(), rest)
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_general_property() {
        match normalize_property_name("White_Space") {
            Normalized::Property(name) => assert_eq!(name, "White_Space"),
            Normalized::Posix(_) => panic!("expected Property"),
        }
    }

    #[test]
    fn demotes_posix_names() {
        match normalize_property_name("Alpha") {
            Normalized::Posix(name) => assert_eq!(name, "alpha"),
            Normalized::Property(_) => panic!("expected Posix"),
        }
    }

    #[test]
    fn reformats_unknown_script_name() {
        match normalize_property_name("old italic") {
            Normalized::Property(name) => assert_eq!(name, "Old_Italic"),
            Normalized::Posix(_) => panic!("expected Property"),
        }
    }

    #[test]
    fn reformats_camel_case_script_name() {
        match normalize_property_name("oldItalic") {
            Normalized::Property(name) => assert_eq!(name, "Old_Italic"),
            Normalized::Posix(_) => panic!("expected Property"),
        }
    }

    #[test]
    fn normalization_key_ignores_case_whitespace_and_underscores() {
        assert_eq!(normalize_key("White Space"), "whitespace");
        assert_eq!(normalize_key("white_space"), "whitespace");
        assert_eq!(normalize_key("WHITESPACE"), "whitespace");
    }
}
