//! One spinner line per running backend job.

use std::collections::HashMap;
use std::time::Duration;

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use game_shelf_core::JobKind;

pub(crate) struct JobSpinners {
    mp: MultiProgress,
    style: ProgressStyle,
    active: HashMap<JobKind, ProgressBar>,
}

impl JobSpinners {
    /// When `quiet` is true, all spinners are hidden.
    pub(crate) fn new(quiet: bool) -> Self {
        let mp = if quiet {
            MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
        } else {
            MultiProgress::new()
        };
        let style = ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .expect("static pattern")
            .tick_chars("/-\\|");

        Self {
            mp,
            style,
            active: HashMap::new(),
        }
    }

    /// Show a spinner for `kind`, or update the one already showing.
    pub(crate) fn show(&mut self, kind: JobKind, msg: String) {
        if let Some(pb) = self.active.get(&kind) {
            pb.set_message(msg);
            return;
        }
        let pb = self.mp.add(ProgressBar::new_spinner());
        pb.set_style(self.style.clone());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(msg);
        self.active.insert(kind, pb);
    }

    /// Remove the spinner for `kind`. No-op if none is showing.
    pub(crate) fn release(&mut self, kind: JobKind) {
        if let Some(pb) = self.active.remove(&kind) {
            pb.finish_and_clear();
            self.mp.remove(&pb);
        }
    }

    /// Run `f` (which prints) with the spinners temporarily cleared.
    pub(crate) fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.mp.suspend(f)
    }

    pub(crate) fn clear_all(&mut self) {
        for (_, pb) in self.active.drain() {
            pb.finish_and_clear();
        }
    }
}
