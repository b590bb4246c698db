//! The cache-invalidation rule applied when the matched encounter changes.
//!
//! Reassigning the match invalidates derived state in two tiers:
//! - The top-level check log always resets; its findings were produced
//!   against the previous candidate.
//! - The memoized evolution chains reset only when the new match differs
//!   in `(species, level_min)`, since only those inputs feed derivation.

use crate::core::encounter::EncounterMatch;

/// What a match reassignment must clear before the new value is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchTransition {
    pub clear_evo_cache: bool,
    pub clear_parse: bool,
}

/// Compute the invalidation effects of replacing `prev` with `next`.
///
/// Pure so the rule is testable independent of the context container.
pub fn on_rematch(prev: Option<&EncounterMatch>, next: &EncounterMatch) -> MatchTransition {
    let clear_evo_cache = prev.is_some_and(|prev| {
        prev.level_min() != next.level_min() || prev.species() != next.species()
    });

    MatchTransition {
        clear_evo_cache,
        clear_parse: true,
    }
}
