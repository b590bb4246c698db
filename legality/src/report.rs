//! Legality report rendering and persistence.
//!
//! A report is a serializable snapshot of a finished context: the final
//! check log, the per-slot move findings, the rejected near-misses, and a
//! single worst-severity verdict. Rendering reads the context; it never
//! mutates it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::context::LegalityContext;
use crate::core::encounter::EncounterRejected;
use crate::core::types::{CheckMoveResult, CheckResult, GameVersion, Severity};

/// Snapshot of a finished validation run, suitable for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalityReport {
    /// Worst severity across every evaluated dimension.
    pub verdict: Severity,
    pub origin_game: GameVersion,
    pub origin_generation: u8,
    pub regional_language: bool,
    /// Top-level check log from the final match epoch.
    pub parse: Vec<CheckResult>,
    /// Relearn slots the move stage evaluated (indeterminate slots are
    /// omitted).
    pub relearn: Vec<CheckResult>,
    /// Move slots the move stage evaluated (indeterminate slots are
    /// omitted).
    pub moves: Vec<CheckMoveResult>,
    /// Near-miss candidates rejected during the encounter search.
    pub rejected: Vec<EncounterRejected>,
    /// False once the PID/IV search exhausted every candidate source.
    pub pid_iv_plausible: bool,
    /// False once the frame search exhausted every candidate frame.
    pub frame_plausible: bool,
}

impl LegalityReport {
    /// Render a report from a finished context.
    ///
    /// The verdict is the worst severity across the parse log and the
    /// evaluated slots; an exhausted PID/IV or frame search counts as an
    /// invalid dimension even though no check line records it.
    pub fn from_context(ctx: &LegalityContext<'_>) -> Self {
        let parse = ctx.parse.clone();
        let relearn: Vec<CheckResult> = ctx
            .relearn
            .iter()
            .filter(|slot| slot.severity != Severity::Indeterminate)
            .cloned()
            .collect();
        let moves: Vec<CheckMoveResult> = ctx
            .moves
            .iter()
            .filter(|slot| slot.result.severity != Severity::Indeterminate)
            .cloned()
            .collect();

        let mut verdict = parse
            .iter()
            .chain(relearn.iter())
            .chain(moves.iter().map(|slot| &slot.result))
            .map(|result| result.severity)
            .min_by_key(|severity| severity.rank())
            .unwrap_or(Severity::Indeterminate);
        if !ctx.pid_iv_matches || !ctx.frame_matches {
            verdict = Severity::Invalid;
        }

        Self {
            verdict,
            origin_game: ctx.game,
            origin_generation: ctx.generation,
            regional_language: ctx.regional_language,
            parse,
            relearn,
            moves,
            rejected: ctx.rejected_matches().unwrap_or_default().to_vec(),
            pid_iv_plausible: ctx.pid_iv_matches,
            frame_plausible: ctx.frame_matches,
        }
    }
}

/// Atomically write a report as pretty JSON (temp file + rename).
pub fn write_report(path: &Path, report: &LegalityReport) -> Result<()> {
    debug!(path = %path.display(), verdict = ?report.verdict, "writing legality report");
    let mut buf = serde_json::to_string_pretty(report)?;
    buf.push('\n');

    let parent = path
        .parent()
        .with_context(|| format!("report path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &buf)
        .with_context(|| format!("write temp report {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace report {}", path.display()))?;
    Ok(())
}

/// Load a previously written report.
pub fn load_report(path: &Path) -> Result<LegalityReport> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read report {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{CheckIdentifier, MoveSource, PidIv, PidType};
    use crate::test_support::{check, wild_slot, TestRecord};

    fn finished_context(record: &TestRecord) -> LegalityContext<'_> {
        let mut ctx = LegalityContext::new(record);
        ctx.set_encounter_match(wild_slot(280, 5));
        ctx.parse
            .push(check(Severity::Valid, CheckIdentifier::Encounter));
        ctx.relearn[0] = check(Severity::Valid, CheckIdentifier::RelearnMove);
        ctx.moves[0] = CheckMoveResult::new(
            check(Severity::Valid, CheckIdentifier::CurrentMove),
            MoveSource::LevelUp,
            3,
        );
        ctx.pid_iv = Some(PidIv {
            kind: PidType::Method1,
            origin_seed: 0xDEAD_BEEF,
            frame: None,
        });
        ctx
    }

    #[test]
    fn verdict_is_worst_evaluated_severity() {
        let record = TestRecord::emerald();
        let mut ctx = finished_context(&record);
        ctx.parse
            .push(check(Severity::Fishy, CheckIdentifier::Shiny));

        let report = LegalityReport::from_context(&ctx);
        assert_eq!(report.verdict, Severity::Fishy);

        ctx.relearn[1] = check(Severity::Invalid, CheckIdentifier::RelearnMove);
        let report = LegalityReport::from_context(&ctx);
        assert_eq!(report.verdict, Severity::Invalid);
    }

    /// Indeterminate slots are "not checked": they neither appear in the
    /// report nor affect the verdict.
    #[test]
    fn indeterminate_slots_are_omitted() {
        let record = TestRecord::emerald();
        let ctx = finished_context(&record);

        let report = LegalityReport::from_context(&ctx);
        assert_eq!(report.relearn.len(), 1);
        assert_eq!(report.moves.len(), 1);
        assert_eq!(report.verdict, Severity::Valid);
    }

    /// An exhausted randomness search forces an invalid verdict even
    /// with an otherwise clean log.
    #[test]
    fn exhausted_pid_iv_search_forces_invalid() {
        let record = TestRecord::emerald();
        let mut ctx = finished_context(&record);
        ctx.pid_iv_matches = false;

        let report = LegalityReport::from_context(&ctx);
        assert_eq!(report.verdict, Severity::Invalid);
        assert!(!report.pid_iv_plausible);
        assert!(report.frame_plausible);
    }

    /// A context nothing evaluated yields an indeterminate verdict.
    #[test]
    fn empty_context_is_indeterminate() {
        let record = TestRecord::emerald();
        let ctx = LegalityContext::new(&record);
        let report = LegalityReport::from_context(&ctx);
        assert_eq!(report.verdict, Severity::Indeterminate);
        assert!(report.parse.is_empty());
        assert!(report.rejected.is_empty());
    }

    /// Verifies write then load preserves the report.
    #[test]
    fn report_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("report.json");

        let record = TestRecord::emerald();
        let mut ctx = finished_context(&record);
        ctx.reject(check(Severity::Invalid, CheckIdentifier::Level));

        let report = LegalityReport::from_context(&ctx);
        write_report(&path, &report).expect("write");
        let loaded = load_report(&path).expect("load");
        assert_eq!(loaded, report);
    }
}
