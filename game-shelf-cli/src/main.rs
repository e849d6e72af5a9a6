//! game-shelf CLI
//!
//! Command-line front end for a game library backend: browse and filter the
//! catalog, inspect games, and run scrape and metadata sync jobs.

mod cli_types;
mod commands;
mod error;
mod logger;
mod spinner;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::JobKind;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Context;
use error::CliError;

/// Log an empty line (keeps spacing consistent with logger output).
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let ctx = Context {
        url: cli.url,
        quiet: cli.quiet,
    };

    if let Err(e) = run(&ctx, cli.command) {
        log::error!("{} {}", "\u{2718}".if_supports_color(Stdout, |t| t.red()), e);
        std::process::exit(1);
    }
}

fn run(ctx: &Context, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List {
            filters,
            range,
            limit,
        } => commands::list::run_list(ctx, filters, range, limit),
        Commands::Stats { server } => commands::stats::run_stats(ctx, server),
        Commands::Genres => commands::list::run_genres(ctx),
        Commands::Show { id } => commands::show::run_show(ctx, id),
        Commands::Sync { force, no_wait } => {
            commands::jobs::run_sync(ctx, JobKind::SyncSourceA, force, no_wait)
        }
        Commands::SyncIgdb { no_wait } => {
            commands::jobs::run_sync(ctx, JobKind::SyncSourceB, false, no_wait)
        }
        Commands::Scrape => commands::jobs::run_scrape(ctx),
        Commands::Status { job, lines } => commands::jobs::run_status(ctx, job, lines),
        Commands::ClearLogs { job } => commands::jobs::run_clear_logs(ctx, job),
        Commands::Search { query } => commands::search::run_search(ctx, &query),
        Commands::Add { source_id, name } => commands::search::run_add(ctx, source_id, &name),
        Commands::SyncGame { id, source } => commands::sync_game::run_sync_game(ctx, id, source),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(ctx),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Save => commands::config::run_config_save(ctx),
        },
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
