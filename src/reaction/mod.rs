//! Reactions on a message and the bookkeeping of who reacted.
//!
//! Discord sends reaction counts with messages but the reacting users only
//! arrive piecemeal: through gateway events or by fetching them page by
//! page. A [`ReactionMappingLine`] tracks the users known so far next to a
//! count of reactors not yet known, and merging keeps the newest count
//! authoritative.

mod line;
mod mapping;
#[allow(clippy::module_inception)]
mod reaction;

pub use self::{
    line::{merge_update_reaction_mapping_lines, ReactionMappingLine},
    mapping::ReactionMapping,
    reaction::{Reaction, ReactionType},
};
