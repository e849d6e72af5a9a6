use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::{Context, block_on};
use crate::error::CliError;

/// Show counts derived from the loaded library, optionally next to the
/// backend's own numbers.
pub(crate) fn run_stats(ctx: &Context, server: bool) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;

    let server_stats = block_on(async {
        library.load().await?;
        if server {
            library.server_stats().await.map(Some)
        } else {
            Ok(None)
        }
    })??;

    let stats = library.catalog().stats();
    log::info!("{}", "Library".if_supports_color(Stdout, |t| t.bold()));
    let rows = [
        ("Total games", stats.total),
        ("Synced with RAWG", stats.synced_source_a),
        ("Synced with IGDB", stats.synced_source_b),
        ("Without metadata", stats.unsynced),
        ("Local co-op", stats.local_coop),
        ("Online co-op", stats.online_coop),
    ];
    for (label, count) in rows {
        log::info!(
            "  {} {}",
            format!("{:<18}", format!("{}:", label)).if_supports_color(Stdout, |t| t.cyan()),
            count,
        );
    }

    if let Some(s) = server_stats {
        crate::log_blank();
        log::info!("{}", "Backend".if_supports_color(Stdout, |t| t.bold()));
        let rows = [
            ("Total games", s.total_games),
            ("Synced", s.synced_games),
            ("Unsynced", s.unsynced_games),
            ("Local multiplayer", s.local_multiplayer_games),
            ("Online multiplayer", s.online_multiplayer_games),
        ];
        for (label, count) in rows {
            log::info!(
                "  {} {}",
                format!("{:<18}", format!("{}:", label)).if_supports_color(Stdout, |t| t.cyan()),
                count,
            );
        }
    }
    Ok(())
}
