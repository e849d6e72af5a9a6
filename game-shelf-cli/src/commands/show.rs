use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_core::{DetailView, GameDetail, MetadataSource, build_detail, format};

use crate::commands::{Context, block_on};
use crate::error::CliError;

const MAX_ACHIEVEMENTS: usize = 10;

/// Print the detail view for one game.
pub(crate) fn run_show(ctx: &Context, id: i64) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    block_on(library.load())??;

    let record = library.catalog().find(id).ok_or(CliError::NotFound(id))?;
    match build_detail(record) {
        DetailView::NoMetadata {
            id,
            title,
            sync_options,
        } => {
            log::info!("{}", title.if_supports_color(Stdout, |t| t.bold()));
            log::info!(
                "{} No metadata synced for this game yet.",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            );
            print_sync_hints(id, &sync_options);
        }
        DetailView::Full(detail) => print_detail(&detail),
    }
    Ok(())
}

fn print_detail(d: &GameDetail) {
    log::info!("{}", d.title.if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    field("Released", &d.release_date);
    match &d.source_b_rating {
        Some(b) => field("Rating", &format!("{} (IGDB {})", d.rating, b)),
        None => field("Rating", &d.rating),
    }
    if let Some(critic) = d.critic_score {
        field("Metacritic", &format!("{:.0}", critic));
    }
    field("Score", &d.combined_score);
    list_field("Genres", &d.genres);
    list_field("Platforms", &d.platforms);
    list_field("Developers", &d.developers);
    list_field("Publishers", &d.publishers);
    if let Some(local) = &d.local_players {
        field("Local", local);
    }
    if let Some(online) = &d.online_players {
        field("Online", online);
    }
    field("Playtime", &d.playtime);
    field("Players", &d.added_count);
    if let Some(image) = &d.image {
        field("Image", image);
    }

    crate::log_blank();
    log::info!("{}", d.description);
    if let Some(storyline) = &d.storyline {
        crate::log_blank();
        log::info!("{}", "Storyline".if_supports_color(Stdout, |t| t.bold()));
        log::info!("{}", storyline);
    }

    if !d.tags.is_empty() {
        crate::log_blank();
        log::info!(
            "{} {}",
            "Tags:".if_supports_color(Stdout, |t| t.bold()),
            d.tags.join(", ").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if !d.stores.is_empty() {
        crate::log_blank();
        log::info!("{}", "Stores".if_supports_color(Stdout, |t| t.bold()));
        for store in &d.stores {
            log::info!("  {} {}", store.name, store.url.if_supports_color(Stdout, |t| t.cyan()));
        }
    }

    if !d.achievements.is_empty() {
        crate::log_blank();
        log::info!(
            "{} ({})",
            "Achievements".if_supports_color(Stdout, |t| t.bold()),
            d.achievements.len(),
        );
        for a in d.achievements.iter().take(MAX_ACHIEVEMENTS) {
            let percent = a.percent.map(|p| format!(" {:.1}%", p)).unwrap_or_default();
            log::info!(
                "  {}{}",
                a.name,
                percent.if_supports_color(Stdout, |t| t.dimmed()),
            );
            if let Some(desc) = &a.description {
                log::info!("    {}", format::truncate(desc, 100));
            }
        }
        if d.achievements.len() > MAX_ACHIEVEMENTS {
            log::info!("  ... and {} more", d.achievements.len() - MAX_ACHIEVEMENTS);
        }
    }

    if !d.missing_sources.is_empty() {
        crate::log_blank();
        print_sync_hints(d.id, &d.missing_sources);
    }
}

fn print_sync_hints(id: i64, sources: &[MetadataSource]) {
    for source in sources {
        log::info!(
            "  Sync from {}: {}",
            source.label(),
            format!("game-shelf sync-game {} --source {}", id, source.slug())
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}

fn field(label: &str, value: &str) {
    log::info!(
        "  {} {}",
        format!("{:<11}", format!("{}:", label)).if_supports_color(Stdout, |t| t.cyan()),
        value,
    );
}

fn list_field(label: &str, values: &[String]) {
    if !values.is_empty() {
        field(label, &values.join(", "));
    }
}
