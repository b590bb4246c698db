//! Test-only helpers for constructing records, encounters, and doubles.

use std::cell::Cell;

use crate::core::encounter::EncounterMatch;
use crate::core::types::{CheckIdentifier, CheckResult, EvoCriteria, GameVersion, Severity};
use crate::record::{EntityRecord, EvolutionSource};

/// Minimal in-memory record double.
pub struct TestRecord {
    version_code: u8,
    generation: u8,
    regional_language: bool,
}

impl TestRecord {
    pub fn new(version_code: u8, generation: u8, regional_language: bool) -> Self {
        Self {
            version_code,
            generation,
            regional_language,
        }
    }

    /// A plain Emerald-origin record.
    pub fn emerald() -> Self {
        Self::new(3, 3, false)
    }

    /// A record carrying the shared GameCube version code.
    pub fn gamecube() -> Self {
        Self::new(15, 3, false)
    }
}

impl EntityRecord for TestRecord {
    fn version_code(&self) -> u8 {
        self.version_code
    }

    fn origin_generation(&self) -> u8 {
        self.generation
    }

    fn regional_language(&self) -> bool {
        self.regional_language
    }
}

/// Evolution-source double that counts derivation calls.
///
/// Returns one deterministic single-form chain per generation up to the
/// record's origin generation, so callers can assert both call counts
/// and shape.
#[derive(Default)]
pub struct CountingEvoSource {
    calls: Cell<usize>,
}

impl CountingEvoSource {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl EvolutionSource for CountingEvoSource {
    fn chains_all_gens(
        &self,
        record: &dyn EntityRecord,
        encounter: Option<&EncounterMatch>,
    ) -> Vec<Vec<EvoCriteria>> {
        self.calls.set(self.calls.get() + 1);
        let species = encounter.map_or(0, EncounterMatch::species);
        let min_level = encounter.map_or(1, EncounterMatch::level_min);
        (1..=record.origin_generation())
            .map(|_| {
                vec![EvoCriteria {
                    species,
                    min_level,
                    max_level: 100,
                }]
            })
            .collect()
    }
}

/// Create a deterministic wild-slot encounter.
pub fn wild_slot(species: u16, level_min: u8) -> EncounterMatch {
    EncounterMatch::WildSlot {
        species,
        level_min,
        level_max: level_min.saturating_add(5),
        location: 101,
    }
}

/// Create a deterministic static encounter with an explicit version tag.
pub fn static_encounter(
    species: u16,
    level: u8,
    version: Option<GameVersion>,
) -> EncounterMatch {
    EncounterMatch::Static {
        species,
        level,
        location: 9,
        version,
        shiny_locked: false,
    }
}

/// Create a check result with a stable comment derived from its inputs.
pub fn check(severity: Severity, identifier: CheckIdentifier) -> CheckResult {
    CheckResult::new(severity, identifier, format!("{identifier:?}: {severity:?}"))
}
