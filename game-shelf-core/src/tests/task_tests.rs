use serde_json::json;

use super::*;

fn status(value: serde_json::Value) -> JobStatus {
    serde_json::from_value(value).unwrap()
}

#[test]
fn job_kind_slugs_and_aliases() {
    assert_eq!(JobKind::Scrape.slug(), "scraping");
    assert_eq!(JobKind::SyncSourceA.slug(), "syncing");
    assert_eq!(JobKind::SyncSourceB.slug(), "igdb");
    for kind in JobKind::ALL {
        assert_eq!(kind.slug().parse::<JobKind>().unwrap(), kind);
    }
    assert_eq!("scrape".parse::<JobKind>().unwrap(), JobKind::Scrape);
    assert!(matches!("rebuild".parse::<JobKind>(), Err(CoreError::UnknownJob(_))));
}

#[test]
fn status_deserializes_loosely() {
    let s = status(json!({
        "success": true,
        "running": false,
        "logs": ["one", 2, "three"],
        "result": {"success": true, "synced_count": 10, "failed_count": "1"}
    }));
    assert!(!s.running);
    assert_eq!(s.logs, vec!["one", "three"]);
    let result = s.result.unwrap();
    assert!(result.success);
    assert_eq!(result.synced_count, Some(10));
    assert_eq!(result.failed_count, Some(1));

    let s = status(json!({ "running": true, "result": "garbage" }));
    assert!(s.running);
    assert!(s.result.is_none());
}

#[test]
fn sync_job_start_then_finish() {
    let mut board = TaskBoard::new();
    assert!(!board.any_active());

    board.mark_started(JobKind::SyncSourceA).unwrap();
    assert_eq!(board.phase(JobKind::SyncSourceA), JobPhase::Running);
    assert!(board.panel(JobKind::SyncSourceA).visible);
    assert_eq!(board.active_kinds(), vec![JobKind::SyncSourceA]);

    let t = board.apply_status(
        JobKind::SyncSourceA,
        status(json!({ "running": true, "logs": ["Syncing 1/3"] })),
    );
    assert_eq!(t, StatusTransition::StillRunning);
    assert_eq!(board.panel(JobKind::SyncSourceA).logs, vec!["Syncing 1/3"]);

    let t = board.apply_status(
        JobKind::SyncSourceA,
        status(json!({
            "running": false,
            "logs": ["Syncing 1/3", "Done"],
            "result": {"success": true, "message": "Synced 3 games"}
        })),
    );
    assert_eq!(t, StatusTransition::Finished { success: true });
    assert_eq!(board.phase(JobKind::SyncSourceA), JobPhase::Idle);
    assert!(!board.any_active());
    let panel = board.panel(JobKind::SyncSourceA);
    assert_eq!(panel.logs.len(), 2);
    assert_eq!(
        panel.last_result.as_ref().and_then(|r| r.summary()),
        Some("Synced 3 games")
    );
}

#[test]
fn finish_without_result_is_not_success() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::SyncSourceB).unwrap();
    let t = board.apply_status(JobKind::SyncSourceB, status(json!({ "running": false })));
    assert_eq!(t, StatusTransition::Finished { success: false });
}

#[test]
fn failed_result_reports_error_text() {
    let result: JobResult =
        serde_json::from_value(json!({ "success": false, "error": "API key missing" })).unwrap();
    assert_eq!(result.summary(), Some("API key missing"));
}

#[test]
fn starting_active_job_is_rejected() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::SyncSourceA).unwrap();
    assert_eq!(
        board.mark_started(JobKind::SyncSourceA),
        Err(CoreError::JobAlreadyActive(JobKind::SyncSourceA))
    );
    assert!(board.ensure_idle(JobKind::SyncSourceA).is_err());
    assert!(board.ensure_idle(JobKind::SyncSourceB).is_ok());
}

#[test]
fn scrape_is_two_phase() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::Scrape).unwrap();
    assert_eq!(board.scrape().state(), ScrapeState::AwaitingContinue);
    // Waiting for the user is not polled.
    assert!(!board.any_active());
    assert_eq!(
        board.mark_started(JobKind::Scrape),
        Err(CoreError::JobAlreadyActive(JobKind::Scrape))
    );

    board.mark_continued().unwrap();
    assert_eq!(board.phase(JobKind::Scrape), JobPhase::Running);
    assert_eq!(board.active_kinds(), vec![JobKind::Scrape]);

    let t = board.apply_status(
        JobKind::Scrape,
        status(json!({ "running": false, "result": {"success": true} })),
    );
    assert_eq!(t, StatusTransition::Finished { success: true });
    assert_eq!(board.scrape().state(), ScrapeState::Idle);
}

#[test]
fn continue_requires_awaiting_state() {
    let mut board = TaskBoard::new();
    assert_eq!(
        board.mark_continued(),
        Err(CoreError::NotAwaitingContinue(JobKind::Scrape))
    );
    board.mark_awaiting_continue().unwrap();
    board.cancel_awaiting().unwrap();
    assert_eq!(board.phase(JobKind::Scrape), JobPhase::Idle);
    assert!(board.cancel_awaiting().is_err());
}

#[test]
fn status_for_idle_slot_is_ignored() {
    let mut board = TaskBoard::new();
    let t = board.apply_status(
        JobKind::SyncSourceB,
        status(json!({ "running": true, "logs": ["stray"] })),
    );
    assert_eq!(t, StatusTransition::Ignored);
    assert!(board.panel(JobKind::SyncSourceB).logs.is_empty());
}

#[test]
fn dismiss_hides_but_keeps_polling() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::SyncSourceB).unwrap();
    board.dismiss(JobKind::SyncSourceB);
    assert!(!board.panel(JobKind::SyncSourceB).visible);
    assert_eq!(board.active_kinds(), vec![JobKind::SyncSourceB]);
}

#[test]
fn restart_clears_previous_logs() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::SyncSourceA).unwrap();
    board.apply_status(
        JobKind::SyncSourceA,
        status(json!({ "running": false, "logs": ["old"], "result": {"success": false} })),
    );
    board.mark_started(JobKind::SyncSourceA).unwrap();
    let panel = board.panel(JobKind::SyncSourceA);
    assert!(panel.logs.is_empty());
    assert!(panel.last_result.is_none());
}

#[test]
fn clear_logs_empties_panel() {
    let mut board = TaskBoard::new();
    board.mark_started(JobKind::SyncSourceA).unwrap();
    board.apply_status(
        JobKind::SyncSourceA,
        status(json!({ "running": true, "logs": ["a", "b"] })),
    );
    board.clear_logs(JobKind::SyncSourceA);
    assert!(board.panel(JobKind::SyncSourceA).logs.is_empty());
    assert_eq!(board.phase(JobKind::SyncSourceA), JobPhase::Running);
}
