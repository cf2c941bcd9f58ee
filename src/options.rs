//! Parse options (§6.3). The only knob this crate exposes.

/// `{optimize?: boolean}`. When `true`, enables the two structural
/// rewrites of §4.4 and §4.6. When `false` (the default), the AST
/// retains full structural fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub optimize: bool,
}
