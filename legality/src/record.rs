//! Boundary traits for the collaborators the pipeline plugs in.
//!
//! The context never parses save data or derives chains itself; it reads a
//! few scalars from the record at construction and defers chain derivation
//! to a service. Both sides are traits so tests can substitute doubles.

use crate::core::encounter::EncounterMatch;
use crate::core::types::EvoCriteria;

/// Read-only view of the saved creature data under validation.
///
/// The record must outlive the context borrowing it; one record is
/// validated per run and never mutated by this crate.
pub trait EntityRecord {
    /// Raw origin-version code as stored in the save data.
    fn version_code(&self) -> u8;

    /// The record's own generation-detection routine.
    fn origin_generation(&self) -> u8;

    /// Whether the record comes from a regional-language release with
    /// distinct legality tables.
    fn regional_language(&self) -> bool;
}

/// External evolution-chain derivation service.
///
/// Pure from the context's perspective: same record and match must yield
/// the same chains. The context memoizes the result per match epoch.
pub trait EvolutionSource {
    /// Derive the reachable evolution chains, one inner sequence per
    /// generation the record could have visited.
    fn chains_all_gens(
        &self,
        record: &dyn EntityRecord,
        encounter: Option<&EncounterMatch>,
    ) -> Vec<Vec<EvoCriteria>>;
}
