//! Background job commands: start, watch, inspect.

use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_client::{BackendClient, Library, PollReport, run_poll_loop};
use game_shelf_core::{JobKind, JobResult, format};

use crate::commands::{Context, block_on};
use crate::error::CliError;
use crate::spinner::JobSpinners;

const SPINNER_LINE_CHARS: usize = 70;

/// Start a metadata sync and, unless `no_wait`, follow it to completion.
pub(crate) fn run_sync(ctx: &Context, kind: JobKind, force: bool, no_wait: bool) -> Result<(), CliError> {
    let (mut library, config) = ctx.connect()?;

    block_on(async {
        let message = library.start_job(kind, force).await?;
        log::info!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            message.unwrap_or_else(|| format!("{} started", kind)),
        );
        if no_wait {
            log::info!("Check progress with 'game-shelf status {}'.", kind.slug());
            return Ok(());
        }
        watch(&mut library, config.poll_interval(), ctx.quiet).await
    })?
}

/// Two-phase storefront scrape: open the browser, wait for the user to log
/// in, then start parsing and follow the job.
pub(crate) fn run_scrape(ctx: &Context) -> Result<(), CliError> {
    let (mut library, config) = ctx.connect()?;

    block_on(async {
        let message = library.open_browser().await?;
        log::info!(
            "{} {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            message.unwrap_or_else(|| "Browser opened".to_string()),
        );

        loop {
            if !prompt_enter("Log in to the store in the browser, then press Enter to continue")? {
                library.cancel_scrape()?;
                log::warn!("Scrape cancelled.");
                return Ok(());
            }
            match library.continue_scrape().await {
                Ok(message) => {
                    log::info!(
                        "{} {}",
                        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                        message.unwrap_or_else(|| "Scrape started".to_string()),
                    );
                    break;
                }
                // Still waiting; the user can retry after fixing the login.
                Err(e) => log::warn!(
                    "{} {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                ),
            }
        }

        watch(&mut library, config.poll_interval(), ctx.quiet).await
    })?
}

/// Read one line from stdin. Returns false on end of input.
fn prompt_enter(prompt: &str) -> Result<bool, CliError> {
    print!("{} ", prompt.if_supports_color(Stdout, |t| t.bold()));
    std::io::stdout().flush()?;
    let mut input = String::new();
    let read = std::io::stdin().read_line(&mut input)?;
    Ok(read > 0)
}

/// Poll every running job until all have stopped, echoing new log lines.
/// Fails if any job reported failure.
async fn watch(
    library: &mut Library<BackendClient>,
    interval: Duration,
    quiet: bool,
) -> Result<(), CliError> {
    let mut spinners = JobSpinners::new(quiet);
    for kind in library.tasks().active_kinds() {
        spinners.show(kind, format!("{} running...", kind));
    }

    let mut printed: HashMap<JobKind, usize> = HashMap::new();
    let mut failed = Vec::new();

    run_poll_loop(library, interval, |report, lib| {
        for &kind in report.still_running.iter().chain(report.finished.iter().map(|(k, _)| k)) {
            let logs = &lib.tasks().panel(kind).logs;
            let seen = printed.entry(kind).or_insert(0);
            // The backend buffer was cleared; start over.
            if *seen > logs.len() {
                *seen = 0;
            }
            spinners.suspend(|| {
                for line in &logs[*seen..] {
                    log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
                }
            });
            *seen = logs.len();

            if let Some(last) = logs.last() {
                spinners.show(
                    kind,
                    format!("{}: {}", kind, format::truncate(last, SPINNER_LINE_CHARS)),
                );
            }
        }

        for (kind, error) in &report.failures {
            spinners.suspend(|| {
                log::warn!(
                    "{} Could not fetch {} status: {}",
                    "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                    kind,
                    error,
                )
            });
        }

        for &(kind, success) in &report.finished {
            spinners.release(kind);
            let result = lib.tasks().panel(kind).last_result.as_ref();
            spinners.suspend(|| print_result(kind, success, result));
            if !success {
                failed.push(kind);
            }
        }

        spinners.suspend(|| report_refresh(report));
    })
    .await;

    spinners.clear_all();

    if failed.is_empty() {
        Ok(())
    } else {
        let names: Vec<String> = failed.iter().map(|k| k.to_string()).collect();
        Err(CliError::runtime(format!("{} failed", names.join(", "))))
    }
}

fn report_refresh(report: &PollReport) {
    if report.refreshed {
        log::debug!("Library reloaded after job finished");
    }
    if let Some(e) = &report.refresh_error {
        log::warn!("Job finished but the library could not be reloaded: {}", e);
    }
}

fn print_result(kind: JobKind, success: bool, result: Option<&JobResult>) {
    let summary = result
        .and_then(JobResult::summary)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if success {
                format!("{} finished", kind)
            } else {
                format!("{} stopped without a result", kind)
            }
        });

    if success {
        log::info!("{} {}", "\u{2714}".if_supports_color(Stdout, |t| t.green()), summary);
    } else {
        log::warn!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), summary);
    }

    if let Some(r) = result {
        let counts: Vec<String> = [
            ("synced", r.synced_count),
            ("failed", r.failed_count),
            ("total", r.total_games),
        ]
        .into_iter()
        .filter_map(|(label, n)| n.map(|n| format!("{} {}", n, label)))
        .collect();
        if !counts.is_empty() {
            log::info!("  {}", counts.join(", "));
        }
    }
}

/// Print a job's status without starting or tracking it.
pub(crate) fn run_status(ctx: &Context, kind: JobKind, lines: usize) -> Result<(), CliError> {
    let (library, _) = ctx.connect()?;
    let status = block_on(library.job_status(kind))??;

    let state = if status.running {
        "running".if_supports_color(Stdout, |t| t.cyan()).to_string()
    } else {
        "idle".if_supports_color(Stdout, |t| t.dimmed()).to_string()
    };
    log::info!("{}: {}", kind.if_supports_color(Stdout, |t| t.bold()), state);

    if !status.running {
        if let Some(result) = &status.result {
            print_result(kind, result.success, Some(result));
        }
    }

    if status.logs.is_empty() {
        log::info!("  {}", "(no log output)".if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        crate::log_blank();
        let skip = status.logs.len().saturating_sub(lines);
        for line in &status.logs[skip..] {
            log::info!("  {}", line);
        }
    }
    Ok(())
}

/// Clear a job's log buffer on the backend.
pub(crate) fn run_clear_logs(ctx: &Context, kind: JobKind) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    let message = block_on(library.clear_logs(kind))??;
    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        message.unwrap_or_else(|| format!("{} logs cleared", kind)),
    );
    Ok(())
}
