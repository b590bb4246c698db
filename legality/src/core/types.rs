//! Shared value types written into the context by pipeline stages.
//!
//! These types define stable contracts between the pipeline stages. They
//! carry no behavior beyond classification and must stay deterministic.

use serde::{Deserialize, Serialize};

/// Raw save-file version code shared by the GameCube titles.
///
/// GameCube records store a single code; whether the origin was Colosseum
/// or XD is only knowable from the matched encounter's version tag.
pub const GAMECUBE_VERSION_CODE: u8 = 15;

/// Origin game identifier derived from a record's raw version code.
///
/// `Colosseum` and `Xd` never appear as raw codes; they exist as logical
/// tags carried by encounters originating on the GameCube platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameVersion {
    Sapphire,
    Ruby,
    Emerald,
    FireRed,
    LeafGreen,
    HeartGold,
    SoulSilver,
    Diamond,
    Pearl,
    Platinum,
    GameCube,
    Colosseum,
    Xd,
    White,
    Black,
    White2,
    Black2,
    X,
    Y,
    AlphaSapphire,
    OmegaRuby,
    Sun,
    Moon,
    /// Raw code with no known mapping. Kept rather than rejected so a
    /// context can still be constructed for a corrupt record.
    Unknown,
}

impl GameVersion {
    /// Map a record's raw version code to its origin game.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Self::Sapphire,
            2 => Self::Ruby,
            3 => Self::Emerald,
            4 => Self::FireRed,
            5 => Self::LeafGreen,
            7 => Self::HeartGold,
            8 => Self::SoulSilver,
            10 => Self::Diamond,
            11 => Self::Pearl,
            12 => Self::Platinum,
            GAMECUBE_VERSION_CODE => Self::GameCube,
            20 => Self::White,
            21 => Self::Black,
            22 => Self::White2,
            23 => Self::Black2,
            24 => Self::X,
            25 => Self::Y,
            26 => Self::AlphaSapphire,
            27 => Self::OmegaRuby,
            30 => Self::Sun,
            31 => Self::Moon,
            _ => Self::Unknown,
        }
    }
}

/// Outcome classification for a single validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The rule has not been evaluated for this slot yet.
    Indeterminate,
    /// The rule failed; the record cannot be legal on this dimension.
    Invalid,
    /// Suspicious but not provably illegal.
    Fishy,
    /// The rule passed.
    Valid,
}

impl Severity {
    /// Lower rank is worse. `Indeterminate` ranks highest so unchecked
    /// slots never drag a verdict down.
    pub fn rank(self) -> u8 {
        match self {
            Self::Invalid => 1,
            Self::Fishy => 2,
            Self::Valid => 3,
            Self::Indeterminate => 4,
        }
    }
}

/// Which validation rule produced a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckIdentifier {
    Encounter,
    Level,
    RelearnMove,
    CurrentMove,
    Ability,
    Shiny,
    PidIv,
    Frame,
    Misc,
}

/// Structured outcome of one validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub severity: Severity,
    pub identifier: CheckIdentifier,
    pub comment: String,
}

impl CheckResult {
    pub fn new(severity: Severity, identifier: CheckIdentifier, comment: impl Into<String>) -> Self {
        Self {
            severity,
            identifier,
            comment: comment.into(),
        }
    }

    /// Placeholder for a slot no stage has evaluated yet.
    pub fn indeterminate(identifier: CheckIdentifier) -> Self {
        Self::new(Severity::Indeterminate, identifier, "")
    }

    pub fn is_valid(&self) -> bool {
        self.severity == Severity::Valid
    }
}

/// How a move slot could have been acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSource {
    /// Not yet traced to any acquisition path.
    None,
    Relearn,
    Initial,
    LevelUp,
    Machine,
    Tutor,
    EggMove,
    Special,
}

/// Check result for one move slot, with acquisition metadata attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckMoveResult {
    pub result: CheckResult,
    pub source: MoveSource,
    /// Generation the move-learning stage traced the acquisition to.
    pub generation: u8,
}

impl CheckMoveResult {
    pub fn new(result: CheckResult, source: MoveSource, generation: u8) -> Self {
        Self {
            result,
            source,
            generation,
        }
    }

    /// Placeholder for a slot the move stage has not evaluated yet.
    pub fn indeterminate() -> Self {
        Self::new(
            CheckResult::indeterminate(CheckIdentifier::CurrentMove),
            MoveSource::None,
            0,
        )
    }
}

/// Move pools reachable from the matched encounter, computed by the
/// move-checking stage and consulted by later rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidEncounterMoves {
    /// Level-up pool per generation the record could have visited.
    pub level_up: Vec<Vec<u16>>,
    pub machine: Vec<u16>,
    pub tutor: Vec<u16>,
}

/// One candidate form in an evolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvoCriteria {
    pub species: u16,
    pub min_level: u8,
    pub max_level: u8,
}

/// Known PID/IV generation methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PidType {
    None,
    Method1,
    Method2,
    Method4,
    ChainShiny,
    CuteCharm,
    ColoXd,
    Event,
}

/// Reconstructed randomness source believed to have generated the
/// record's PID and IVs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PidIv {
    pub kind: PidType,
    pub origin_seed: u32,
    /// Position in the RNG output sequence, when frame matching applies.
    pub frame: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_codes_map_to_known_games() {
        assert_eq!(GameVersion::from_code(3), GameVersion::Emerald);
        assert_eq!(GameVersion::from_code(15), GameVersion::GameCube);
        assert_eq!(GameVersion::from_code(31), GameVersion::Moon);
    }

    #[test]
    fn unmapped_version_code_is_unknown() {
        assert_eq!(GameVersion::from_code(0), GameVersion::Unknown);
        assert_eq!(GameVersion::from_code(255), GameVersion::Unknown);
    }

    /// Invalid must outrank (be worse than) everything; Indeterminate
    /// must never be worse than an evaluated outcome.
    #[test]
    fn severity_rank_orders_worst_first() {
        assert!(Severity::Invalid.rank() < Severity::Fishy.rank());
        assert!(Severity::Fishy.rank() < Severity::Valid.rank());
        assert!(Severity::Valid.rank() < Severity::Indeterminate.rank());
    }

    #[test]
    fn indeterminate_slot_is_not_valid() {
        let slot = CheckResult::indeterminate(CheckIdentifier::RelearnMove);
        assert!(!slot.is_valid());
        assert_eq!(slot.severity, Severity::Indeterminate);
    }
}
