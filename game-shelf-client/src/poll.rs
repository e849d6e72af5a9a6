//! Fixed-interval status polling.

use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::backend::Backend;
use crate::library::{Library, PollReport};

/// Default delay between polling ticks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Poll every running job until none is left running.
///
/// The first poll happens one `interval` after the call. `on_tick` sees each
/// tick's report and the library state after it was applied. Returns the
/// number of ticks run; zero when nothing was running to begin with.
pub async fn run_poll_loop<B, F>(library: &mut Library<B>, interval: Duration, mut on_tick: F) -> u64
where
    B: Backend,
    F: FnMut(&PollReport, &Library<B>),
{
    if !library.tasks().any_active() {
        return 0;
    }

    log::debug!(
        "Polling {:?} every {}ms",
        library.tasks().active_kinds(),
        interval.as_millis()
    );

    let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of a tokio interval completes immediately.
    ticker.tick().await;

    let mut ticks = 0;
    loop {
        ticker.tick().await;
        let report = library.poll_once().await;
        ticks += 1;
        on_tick(&report, library);

        if !library.tasks().any_active() {
            log::debug!("No jobs running, polling stopped after {} ticks", ticks);
            break;
        }
    }
    ticks
}
