use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_client::{AddOutcome, ClientError};
use game_shelf_core::format;

use crate::commands::{Context, block_on};
use crate::error::CliError;

/// Search the external catalog for games that could be added.
pub(crate) fn run_search(ctx: &Context, query: &str) -> Result<(), CliError> {
    let (library, _) = ctx.connect()?;

    let results = match block_on(library.search(query))? {
        Ok(r) => r,
        Err(ClientError::InvalidInput(msg)) => {
            log::warn!("{}", msg);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if results.is_empty() {
        log::info!("No games found for \"{}\".", query.trim());
        return Ok(());
    }

    for r in &results {
        let year = format::year(r.released.as_deref())
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        log::info!(
            "  {} {}{}  \u{2605} {}",
            format!("{:>7}", r.id).if_supports_color(Stdout, |t| t.dimmed()),
            r.name.if_supports_color(Stdout, |t| t.bold()),
            year,
            format::format_rating(r.rating),
        );
        if !r.platforms.is_empty() {
            log::info!(
                "          {}",
                r.platforms.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    crate::log_blank();
    log::info!("Add one with 'game-shelf add <id> <name>'.");
    Ok(())
}

/// Add a game to the library by its external id.
pub(crate) fn run_add(ctx: &Context, source_id: i64, name: &str) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    let outcome = block_on(library.add_manual(source_id, name))??;

    match outcome {
        AddOutcome::AlreadyExists => {
            log::warn!(
                "{} {} is already in the library",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                name.if_supports_color(Stdout, |t| t.bold()),
            );
        }
        AddOutcome::Added { metadata } => {
            log::info!(
                "{} Added {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                name.if_supports_color(Stdout, |t| t.bold()),
            );
            if let Some(m) = metadata {
                log::info!(
                    "  {} screenshots, {} achievements, {} trailers, {} stores",
                    m.screenshots_count,
                    m.achievements_count,
                    m.trailers_count,
                    m.stores_count,
                );
            }
        }
    }
    Ok(())
}
