use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use game_shelf_client::{BackendClient, Library, PlayerRange};
use game_shelf_core::{FilterState, GameRecord, LoadOutcome, combined_score, format};

use crate::cli_types::{FilterArgs, ServerRangeArgs};
use crate::commands::{Context, block_on};
use crate::error::CliError;

impl From<FilterArgs> for FilterState {
    fn from(args: FilterArgs) -> Self {
        FilterState {
            query: args.search.unwrap_or_default(),
            genre: args.genre,
            player_mode: args.mode,
            player_count: args.players,
            local_players: args.local,
            online_players: args.online,
            sort: args.sort,
        }
    }
}

impl From<&ServerRangeArgs> for PlayerRange {
    fn from(args: &ServerRangeArgs) -> Self {
        PlayerRange {
            min_local: args.min_local.unwrap_or(0),
            max_local: args.max_local.unwrap_or(0),
            min_online: args.min_online.unwrap_or(0),
            max_online: args.max_online.unwrap_or(0),
        }
    }
}

/// Load the library and print the filtered, sorted view.
pub(crate) fn run_list(
    ctx: &Context,
    filters: FilterArgs,
    range: ServerRangeArgs,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    library.set_filters(filters.into());
    let range = PlayerRange::from(&range);

    let outcome = block_on(async {
        if range.is_empty() {
            library.load().await
        } else {
            library.load_filtered(&range).await
        }
    })??;

    if outcome == LoadOutcome::Empty {
        log::info!("No games in the library yet.");
        log::info!("Run 'game-shelf scrape' to import your storefront library.");
        return Ok(());
    }

    print_games(&library, limit);
    Ok(())
}

fn print_games(library: &Library<BackendClient>, limit: Option<usize>) {
    let catalog = library.catalog();
    let shown = catalog.filtered_len();

    if shown == 0 {
        log::info!(
            "{} No games match the current filters ({} in library).",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            catalog.all().len(),
        );
        return;
    }

    let limit = limit.unwrap_or(usize::MAX);
    for record in catalog.filtered().take(limit) {
        print_row(record);
    }

    crate::log_blank();
    let mut summary = format!("{} of {} games", shown, catalog.all().len());
    if shown > limit {
        summary.push_str(&format!(", first {} shown", limit));
    }
    if !catalog.filters().is_empty() {
        summary.push_str(" (filtered)");
    }
    log::info!("{}", summary.if_supports_color(Stdout, |t| t.dimmed()));
}

fn print_row(record: &GameRecord) {
    let year = format::year(record.source_a.released.as_deref())
        .map(|y| format!(" ({})", y))
        .unwrap_or_default();

    let mut badges = Vec::new();
    if let Some(local) = format::format_player_count(
        record.source_a.local_players_min,
        record.source_a.local_players_max,
    ) {
        badges.push(format!("local {}", local));
    }
    if let Some(online) = format::format_player_count(
        record.source_a.online_players_min,
        record.source_a.online_players_max,
    ) {
        badges.push(format!("online {}", online));
    }
    if record.has_no_metadata() {
        badges.push("no metadata".to_string());
    }

    log::info!(
        "  {} {}{}  {} {}  {}",
        format!("{:>6}", record.id).if_supports_color(Stdout, |t| t.dimmed()),
        record.title().if_supports_color(Stdout, |t| t.bold()),
        year,
        "\u{2605}".if_supports_color(Stdout, |t| t.yellow()),
        format::format_rating(record.source_a.rating),
        format::format_score(combined_score(record)).if_supports_color(Stdout, |t| t.cyan()),
    );
    if !badges.is_empty() {
        log::info!(
            "         {}",
            badges.join(" \u{00B7} ").if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
}

/// Print every genre in the library, alphabetically.
pub(crate) fn run_genres(ctx: &Context) -> Result<(), CliError> {
    let (mut library, _) = ctx.connect()?;
    block_on(library.load())??;

    let genres = library.catalog().genres();
    if genres.is_empty() {
        log::info!("No genres yet. Sync metadata with 'game-shelf sync' first.");
        return Ok(());
    }
    for genre in genres {
        log::info!("  {}", genre);
    }
    Ok(())
}
