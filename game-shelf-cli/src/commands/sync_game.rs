use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::MetadataSource;

use crate::commands::{Context, block_on};
use crate::error::CliError;

/// Sync one game against one metadata source.
pub(crate) fn run_sync_game(ctx: &Context, id: i64, source: MetadataSource) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    log::info!("Syncing game {} with {}...", id, source);

    let message = block_on(library.sync_single(id, source))??;
    log::info!(
        "{} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        message.unwrap_or_else(|| format!("Game {} synced with {}", id, source)),
    );

    if let Some(record) = library.catalog().find(id) {
        log::info!("  Run 'game-shelf show {}' to see {}.", id, record.title());
    }
    Ok(())
}
