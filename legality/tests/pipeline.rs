//! End-to-end exercise of the stage protocol against one context:
//! encounter search with rejected candidates, a final match, the move
//! stage, the randomness stage, and report rendering.

use legality::core::context::LegalityContext;
use legality::core::encounter::EncounterMatch;
use legality::core::types::{
    CheckIdentifier, CheckMoveResult, MoveSource, PidIv, PidType, Severity, ValidEncounterMoves,
};
use legality::report::{load_report, write_report, LegalityReport};
use legality::test_support::{check, static_encounter, wild_slot, CountingEvoSource, TestRecord};

#[test]
fn full_validation_run_accumulates_expected_state() {
    legality::logging::init();

    let record = TestRecord::emerald();
    let evo_source = CountingEvoSource::default();
    let mut ctx = LegalityContext::new(&record);

    // Encounter search: two candidates tried and rejected, each one
    // reading chains for its own epoch.
    ctx.set_encounter_match(wild_slot(280, 5));
    ctx.evo_chains_all_gens(&evo_source);
    ctx.parse.push(check(Severity::Invalid, CheckIdentifier::Level));
    ctx.reject(check(Severity::Invalid, CheckIdentifier::Level));

    ctx.set_encounter_match(wild_slot(280, 8));
    ctx.evo_chains_all_gens(&evo_source);
    ctx.reject(check(Severity::Invalid, CheckIdentifier::Shiny));

    // Final match settles on a different species entirely.
    ctx.set_encounter_match(static_encounter(281, 20, None));
    assert!(ctx.parse.is_empty());

    // One derivation per epoch: initial, level change, species change.
    ctx.evo_chains_all_gens(&evo_source);
    ctx.evo_chains_all_gens(&evo_source);
    assert_eq!(evo_source.calls(), 3);

    // Move stage writes its findings for the final match.
    ctx.relearn_base = Some([45, 33, 0, 0]);
    ctx.encounter_moves = Some(ValidEncounterMoves {
        level_up: vec![vec![45, 33, 64], vec![45, 33, 64, 93]],
        machine: vec![92, 104],
        tutor: Vec::new(),
    });
    ctx.relearn[0] = check(Severity::Valid, CheckIdentifier::RelearnMove);
    ctx.moves[0] = CheckMoveResult::new(
        check(Severity::Valid, CheckIdentifier::CurrentMove),
        MoveSource::LevelUp,
        3,
    );
    ctx.parse.push(check(Severity::Valid, CheckIdentifier::Encounter));

    // Randomness stage finds a source; frame search exhausts.
    ctx.pid_iv = Some(PidIv {
        kind: PidType::Method1,
        origin_seed: 0x0BAD_5EED,
        frame: None,
    });
    ctx.frame_matches = false;

    // Rejections from the search epochs survived every rematch.
    let rejected = ctx.rejected_matches().expect("rejection log allocated");
    assert_eq!(rejected.len(), 2);
    assert_eq!(
        rejected[0].encounter.as_ref().map(EncounterMatch::level_min),
        Some(5)
    );
    assert_eq!(
        rejected[1].encounter.as_ref().map(EncounterMatch::level_min),
        Some(8)
    );

    // The report reflects only the final epoch's log plus the retained
    // rejections, and the exhausted frame search forces the verdict.
    let report = LegalityReport::from_context(&ctx);
    assert_eq!(report.verdict, Severity::Invalid);
    assert!(!report.frame_plausible);
    assert!(report.pid_iv_plausible);
    assert_eq!(report.parse.len(), 1);
    assert_eq!(report.rejected.len(), 2);
    assert_eq!(report.origin_generation, 3);

    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("report.json");
    write_report(&path, &report).expect("write report");
    let loaded = load_report(&path).expect("load report");
    assert_eq!(loaded, report);
}
