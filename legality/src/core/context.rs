//! The per-record analysis context threaded through the pipeline.
//!
//! One context is created per validation run, mutated by the stages in
//! order (encounter search, move checking, PID/IV reconstruction), and
//! read out by the report renderer when the run concludes. The only
//! active logic it owns is the invalidation protocol around reassigning
//! the matched encounter; everything else is plain storage.

use tracing::{debug, trace};

use crate::core::encounter::{EncounterMatch, EncounterRejected};
use crate::core::transition::on_rematch;
use crate::core::types::{
    CheckIdentifier, CheckMoveResult, CheckResult, EvoCriteria, GameVersion, PidIv,
    ValidEncounterMoves, GAMECUBE_VERSION_CODE,
};
use crate::record::{EntityRecord, EvolutionSource};

/// Number of move slots a record carries.
pub const MOVE_SLOTS: usize = 4;

/// Mutable state accumulated while validating one record.
///
/// Stage-written fields are public: stages are trusted collaborators
/// and the protocol is field writes, not method calls. The matched
/// encounter and its two derived caches stay private because
/// reassignment must run the invalidation rule.
pub struct LegalityContext<'a> {
    record: &'a dyn EntityRecord,

    /// Generation of games the record originated from. Derived once.
    pub generation: u8,
    /// Game the record originated from. Derived once from the raw code.
    pub game: GameVersion,
    /// Regional-language flag copied from the record. Immutable.
    pub regional_language: bool,

    matched: Option<EncounterMatch>,
    evo_chains: Option<Vec<Vec<EvoCriteria>>>,
    rejected: Option<Vec<EncounterRejected>>,

    /// Baseline relearn moves for the matched encounter, set by the
    /// move-checking stage.
    pub relearn_base: Option<[u16; MOVE_SLOTS]>,
    /// Top-level check log for the current match epoch. Cleared on every
    /// reassignment of the matched encounter.
    pub parse: Vec<CheckResult>,
    /// Per-slot relearn-move results, written by the move-checking stage.
    pub relearn: [CheckResult; MOVE_SLOTS],
    /// Per-slot current-move results, written by the move-checking stage.
    pub moves: [CheckMoveResult; MOVE_SLOTS],
    /// Move pools reachable from the matched encounter.
    pub encounter_moves: Option<ValidEncounterMoves>,

    /// Reconstructed randomness source, set by the PID/IV stage.
    pub pid_iv: Option<PidIv>,
    /// True until every candidate randomness source for the matched
    /// encounter has been tested and rejected.
    pub pid_iv_matches: bool,
    /// True until every candidate RNG frame has been tested and rejected.
    pub frame_matches: bool,
}

impl<'a> LegalityContext<'a> {
    /// Build a context for one validation run, deriving the origin
    /// scalars from the record up front.
    pub fn new(record: &'a dyn EntityRecord) -> Self {
        let game = GameVersion::from_code(record.version_code());
        let generation = record.origin_generation();
        debug!(?game, generation, "legality context created");

        Self {
            record,
            generation,
            game,
            regional_language: record.regional_language(),
            matched: None,
            evo_chains: None,
            rejected: None,
            relearn_base: None,
            parse: Vec::new(),
            relearn: std::array::from_fn(|_| {
                CheckResult::indeterminate(CheckIdentifier::RelearnMove)
            }),
            moves: std::array::from_fn(|_| CheckMoveResult::indeterminate()),
            encounter_moves: None,
            pid_iv: None,
            pid_iv_matches: true,
            frame_matches: true,
        }
    }

    /// The current best-guess encounter explaining the record.
    pub fn encounter_match(&self) -> Option<&EncounterMatch> {
        self.matched.as_ref()
    }

    /// Replace the matched encounter, running the invalidation rule.
    ///
    /// The evolution-chain cache survives only when the new match agrees
    /// on `(species, level_min)`; the top-level check log never does.
    /// Per-slot and randomness fields are deliberately left alone: the
    /// pipeline resolves the encounter before those stages run.
    pub fn set_encounter_match(&mut self, next: EncounterMatch) {
        let transition = on_rematch(self.matched.as_ref(), &next);
        if transition.clear_evo_cache {
            debug!(
                species = next.species(),
                level_min = next.level_min(),
                "evolution chain cache invalidated by rematch"
            );
            self.evo_chains = None;
        }
        self.matched = Some(next);
        self.parse.clear();
    }

    /// Evolution chains reachable from the matched encounter, one inner
    /// sequence per generation.
    ///
    /// Derived through `source` at most once per match epoch; the cached
    /// value is returned until `set_encounter_match` invalidates it.
    pub fn evo_chains_all_gens(&mut self, source: &dyn EvolutionSource) -> &[Vec<EvoCriteria>] {
        if self.evo_chains.is_none() {
            let chains = source.chains_all_gens(self.record, self.matched.as_ref());
            trace!(generations = chains.len(), "evolution chains derived");
            self.evo_chains = Some(chains);
        }
        self.evo_chains.as_deref().unwrap_or_default()
    }

    /// Whether the record originated from XD on the GameCube.
    ///
    /// True exactly when the record's raw version code is the shared
    /// GameCube code and the matched encounter is tagged `Xd`. Recomputed
    /// on every read; never cached.
    pub fn is_origin_xd(&self) -> bool {
        self.record.version_code() == GAMECUBE_VERSION_CODE
            && self
                .matched
                .as_ref()
                .and_then(EncounterMatch::version)
                == Some(GameVersion::Xd)
    }

    /// Record that the current match candidate was rejected.
    ///
    /// The log allocates on first use and is never cleared by
    /// reassignment; near-misses stay visible after a final match is
    /// chosen.
    pub fn reject(&mut self, reason: CheckResult) {
        trace!(severity = ?reason.severity, "encounter candidate rejected");
        let entry = EncounterRejected {
            encounter: self.matched.clone(),
            reason,
        };
        self.rejected.get_or_insert_with(Vec::new).push(entry);
    }

    /// Rejected near-misses, `None` until the first rejection.
    pub fn rejected_matches(&self) -> Option<&[EncounterRejected]> {
        self.rejected.as_deref()
    }
}
