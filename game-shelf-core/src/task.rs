//! Background job tracking.
//!
//! The backend runs three long jobs: the storefront scrape and one metadata
//! sync per external catalog. The sync jobs are single-phase
//! ([`SyncState`]: idle, running). The scrape is two-phase ([`ScrapeState`]):
//! the backend first opens a browser for the user to log in, then waits
//! until the user explicitly asks it to continue.
//!
//! [`TaskBoard`] owns one slot per job. It never talks to the backend; the
//! client crate issues requests and feeds the results back in through
//! `mark_*` and [`TaskBoard::apply_status`].
//!
//! Dismissing a slot only hides its panel. A hidden job that is still running
//! keeps being polled until the backend reports it finished.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::de;
use crate::error::CoreError;

// ── Job kinds ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Two-phase storefront scrape.
    Scrape,
    /// Metadata sync against source A.
    SyncSourceA,
    /// Metadata sync against source B.
    SyncSourceB,
}

impl JobKind {
    pub const ALL: [JobKind; 3] = [JobKind::Scrape, JobKind::SyncSourceA, JobKind::SyncSourceB];

    /// Path segment used by the status and clear-logs endpoints.
    pub fn slug(&self) -> &'static str {
        match self {
            JobKind::Scrape => "scraping",
            JobKind::SyncSourceA => "syncing",
            JobKind::SyncSourceB => "igdb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            JobKind::Scrape => "Library scrape",
            JobKind::SyncSourceA => "RAWG sync",
            JobKind::SyncSourceB => "IGDB sync",
        }
    }

    pub fn is_two_phase(&self) -> bool {
        matches!(self, JobKind::Scrape)
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JobKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scraping" | "scrape" => Ok(JobKind::Scrape),
            "syncing" | "sync" | "rawg" => Ok(JobKind::SyncSourceA),
            "igdb" | "sync-igdb" => Ok(JobKind::SyncSourceB),
            _ => Err(CoreError::UnknownJob(s.to_string())),
        }
    }
}

// ── Backend status ──────────────────────────────────────────────────────────

/// One status report for a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(default, deserialize_with = "de::truthy")]
    pub running: bool,
    /// Full log so far. Each report replaces the previous one.
    #[serde(default, deserialize_with = "de::lenient_vec")]
    pub logs: Vec<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub result: Option<JobResult>,
}

/// Outcome a job reports once it stops running.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    #[serde(default, deserialize_with = "de::truthy")]
    pub success: bool,
    #[serde(default, deserialize_with = "de::text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "de::text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub synced_count: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub failed_count: Option<u64>,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub total_games: Option<u64>,
}

impl JobResult {
    /// Human-readable one-liner: the backend message, else its error.
    pub fn summary(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

// ── State machines ──────────────────────────────────────────────────────────

/// Presentation view of a slot's state, common to both machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobPhase {
    Idle,
    AwaitingContinue,
    Running,
}

impl fmt::Display for JobPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JobPhase::Idle => "idle",
            JobPhase::AwaitingContinue => "waiting for you to continue",
            JobPhase::Running => "running",
        })
    }
}

/// Two-phase scrape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrapeState {
    #[default]
    Idle,
    /// Browser opened; waiting for the user to log in and continue.
    AwaitingContinue,
    Running,
}

/// Single-phase sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SyncState {
    #[default]
    Idle,
    Running,
}

/// A job state machine whose `Default` is its idle state.
pub trait JobMachine: Copy + Default + fmt::Debug {
    fn phase(self) -> JobPhase;
}

impl JobMachine for ScrapeState {
    fn phase(self) -> JobPhase {
        match self {
            ScrapeState::Idle => JobPhase::Idle,
            ScrapeState::AwaitingContinue => JobPhase::AwaitingContinue,
            ScrapeState::Running => JobPhase::Running,
        }
    }
}

impl JobMachine for SyncState {
    fn phase(self) -> JobPhase {
        match self {
            SyncState::Idle => JobPhase::Idle,
            SyncState::Running => JobPhase::Running,
        }
    }
}

/// What a status report did to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    StillRunning,
    /// The job stopped; the slot is idle again.
    Finished { success: bool },
    /// The slot was not running, so the report was dropped.
    Ignored,
}

// ── Slots ───────────────────────────────────────────────────────────────────

/// Panel contents shared by every slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotPanel {
    pub logs: Vec<String>,
    pub last_result: Option<JobResult>,
    /// Whether the status panel is shown.
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct JobSlot<S> {
    state: S,
    panel: SlotPanel,
}

impl<S: JobMachine> JobSlot<S> {
    pub fn state(&self) -> S {
        self.state
    }

    pub fn phase(&self) -> JobPhase {
        self.state.phase()
    }

    pub fn panel(&self) -> &SlotPanel {
        &self.panel
    }

    fn enter(&mut self, state: S) {
        self.state = state;
        self.panel.logs.clear();
        self.panel.last_result = None;
        self.panel.visible = true;
    }

    fn apply(&mut self, kind: JobKind, status: JobStatus) -> StatusTransition {
        if self.phase() != JobPhase::Running {
            log::debug!("Ignoring status for {} (slot is {})", kind, self.phase());
            return StatusTransition::Ignored;
        }
        self.panel.logs = status.logs;
        if status.running {
            return StatusTransition::StillRunning;
        }
        let success = status.result.as_ref().is_some_and(|r| r.success);
        self.state = S::default();
        self.panel.last_result = status.result;
        log::debug!("{} finished (success: {})", kind, success);
        StatusTransition::Finished { success }
    }
}

// ── Task board ──────────────────────────────────────────────────────────────

/// The three job slots.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    scrape: JobSlot<ScrapeState>,
    source_a: JobSlot<SyncState>,
    source_b: JobSlot<SyncState>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scrape(&self) -> &JobSlot<ScrapeState> {
        &self.scrape
    }

    pub fn phase(&self, kind: JobKind) -> JobPhase {
        match kind {
            JobKind::Scrape => self.scrape.phase(),
            JobKind::SyncSourceA => self.source_a.phase(),
            JobKind::SyncSourceB => self.source_b.phase(),
        }
    }

    pub fn panel(&self, kind: JobKind) -> &SlotPanel {
        match kind {
            JobKind::Scrape => &self.scrape.panel,
            JobKind::SyncSourceA => &self.source_a.panel,
            JobKind::SyncSourceB => &self.source_b.panel,
        }
    }

    fn panel_mut(&mut self, kind: JobKind) -> &mut SlotPanel {
        match kind {
            JobKind::Scrape => &mut self.scrape.panel,
            JobKind::SyncSourceA => &mut self.source_a.panel,
            JobKind::SyncSourceB => &mut self.source_b.panel,
        }
    }

    fn sync_slot_mut(&mut self, kind: JobKind) -> Option<&mut JobSlot<SyncState>> {
        match kind {
            JobKind::Scrape => None,
            JobKind::SyncSourceA => Some(&mut self.source_a),
            JobKind::SyncSourceB => Some(&mut self.source_b),
        }
    }

    /// Whether `kind` may be started now. Only idle slots can start.
    pub fn ensure_idle(&self, kind: JobKind) -> Result<(), CoreError> {
        if self.phase(kind) == JobPhase::Idle {
            Ok(())
        } else {
            Err(CoreError::JobAlreadyActive(kind))
        }
    }

    /// Record that the backend accepted a start request for `kind`.
    ///
    /// Sync jobs go straight to running. The scrape enters its first phase
    /// and waits for [`TaskBoard::mark_continued`].
    pub fn mark_started(&mut self, kind: JobKind) -> Result<(), CoreError> {
        match self.sync_slot_mut(kind) {
            None => self.mark_awaiting_continue(),
            Some(slot) => {
                if slot.state != SyncState::Idle {
                    return Err(CoreError::JobAlreadyActive(kind));
                }
                slot.enter(SyncState::Running);
                Ok(())
            }
        }
    }

    /// Scrape phase one accepted: the browser is open.
    pub fn mark_awaiting_continue(&mut self) -> Result<(), CoreError> {
        if self.scrape.state != ScrapeState::Idle {
            return Err(CoreError::JobAlreadyActive(JobKind::Scrape));
        }
        self.scrape.enter(ScrapeState::AwaitingContinue);
        Ok(())
    }

    /// Scrape phase two accepted: parsing is running.
    pub fn mark_continued(&mut self) -> Result<(), CoreError> {
        if self.scrape.state != ScrapeState::AwaitingContinue {
            return Err(CoreError::NotAwaitingContinue(JobKind::Scrape));
        }
        self.scrape.enter(ScrapeState::Running);
        Ok(())
    }

    /// Abandon a scrape that is waiting for the user.
    pub fn cancel_awaiting(&mut self) -> Result<(), CoreError> {
        if self.scrape.state != ScrapeState::AwaitingContinue {
            return Err(CoreError::NotAwaitingContinue(JobKind::Scrape));
        }
        self.scrape.state = ScrapeState::Idle;
        Ok(())
    }

    /// Feed one status report into the slot for `kind`.
    pub fn apply_status(&mut self, kind: JobKind, status: JobStatus) -> StatusTransition {
        match kind {
            JobKind::Scrape => self.scrape.apply(kind, status),
            JobKind::SyncSourceA => self.source_a.apply(kind, status),
            JobKind::SyncSourceB => self.source_b.apply(kind, status),
        }
    }

    /// Hide the panel for `kind`. The job itself is not touched.
    pub fn dismiss(&mut self, kind: JobKind) {
        self.panel_mut(kind).visible = false;
    }

    /// Drop local logs and result after the backend cleared its copy.
    pub fn clear_logs(&mut self, kind: JobKind) {
        let panel = self.panel_mut(kind);
        panel.logs.clear();
        panel.last_result = None;
    }

    /// Whether any slot needs polling.
    pub fn any_active(&self) -> bool {
        JobKind::ALL
            .into_iter()
            .any(|k| self.phase(k) == JobPhase::Running)
    }

    /// Running slots, in [`JobKind::ALL`] order. A scrape waiting for the user
    /// is not polled.
    pub fn active_kinds(&self) -> Vec<JobKind> {
        JobKind::ALL
            .into_iter()
            .filter(|&k| self.phase(k) == JobPhase::Running)
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/task_tests.rs"]
mod tests;
