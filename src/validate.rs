//! Post-Pass Validator (§4.11): runs once, after the walk completes,
//! over the accumulated [`Context`].

use crate::context::Context;
use crate::ast::node::RefTarget;
use crate::error::{ParseError, Result};

pub(crate) fn validate(ctx: &Context) -> Result<()> {
    if ctx.has_numeric_ref() && ctx.has_named_groups() {
        return Err(ParseError::NumericRefWithNamedCapture);
    }

    for pending in ctx.pending_subroutines() {
        match &pending.target {
            RefTarget::Number(number) => {
                if *number < 1 || *number > ctx.group_count() {
                    return Err(ParseError::SubroutineGroupUndefined { number: *number });
                }
            }
            RefTarget::Name(name) => {
                if !ctx.named_group_exists(name) {
                    return Err(ParseError::SubroutineNameUndefined { name: name.clone() });
                }
                if ctx.named_group_occurrences(name) != 1 {
                    return Err(ParseError::SubroutineNameAmbiguous { name: name.clone() });
                }
            }
        }
    }

    Ok(())
}
