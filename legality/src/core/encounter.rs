//! The matched-encounter union and its capability surface.
//!
//! Every encounter kind the resolver can propose is a variant here. The
//! context only needs three capabilities from a match: species, minimum
//! obtainable level, and (where the kind pins one down) an origin version.

use serde::{Deserialize, Serialize};

use crate::core::types::{CheckResult, GameVersion};

/// One concrete way the record's creature could have been obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EncounterMatch {
    /// Wild encounter slot. Version-agnostic: any game sharing the slot
    /// table could have produced it.
    WildSlot {
        species: u16,
        level_min: u8,
        level_max: u8,
        location: u16,
    },
    /// Fixed in-game gift or stationary encounter.
    Static {
        species: u16,
        level: u8,
        location: u16,
        version: Option<GameVersion>,
        shiny_locked: bool,
    },
    /// In-game trade. Always tied to the version offering the trade.
    Trade {
        species: u16,
        level: u8,
        version: GameVersion,
    },
    /// Bred egg. Hatches at a fixed level; no single origin version.
    Egg { species: u16, hatch_level: u8 },
    /// Distributed event gift.
    MysteryGift {
        species: u16,
        level: u8,
        version: Option<GameVersion>,
    },
}

impl EncounterMatch {
    pub fn species(&self) -> u16 {
        match self {
            Self::WildSlot { species, .. }
            | Self::Static { species, .. }
            | Self::Trade { species, .. }
            | Self::Egg { species, .. }
            | Self::MysteryGift { species, .. } => *species,
        }
    }

    /// Minimum level the creature could have been obtained at.
    pub fn level_min(&self) -> u8 {
        match self {
            Self::WildSlot { level_min, .. } => *level_min,
            Self::Static { level, .. }
            | Self::Trade { level, .. }
            | Self::MysteryGift { level, .. } => *level,
            Self::Egg { hatch_level, .. } => *hatch_level,
        }
    }

    /// Origin version tag, for the kinds that pin one down.
    pub fn version(&self) -> Option<GameVersion> {
        match self {
            Self::WildSlot { .. } | Self::Egg { .. } => None,
            Self::Static { version, .. } | Self::MysteryGift { version, .. } => *version,
            Self::Trade { version, .. } => Some(*version),
        }
    }
}

/// A candidate encounter the search stage tried and discarded, kept for
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRejected {
    /// Snapshot of the match under test when the rejection was recorded.
    pub encounter: Option<EncounterMatch>,
    pub reason: CheckResult,
}
