//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use game_shelf_core::{JobKind, MetadataSource, PlayerCount, PlayerMode, SortKey};

#[derive(Parser)]
#[command(name = "game-shelf")]
#[command(about = "Browse a game library and drive its metadata jobs", long_about = None)]
pub(crate) struct Cli {
    /// Backend API base URL (overrides config file and environment)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Client-side filters applied to the loaded catalog.
#[derive(Args, Clone)]
pub(crate) struct FilterArgs {
    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only games with this genre (exact name, see `genres`)
    #[arg(short, long)]
    pub genre: Option<String>,

    /// Player mode: local, online or singleplayer
    #[arg(short, long)]
    pub mode: Option<PlayerMode>,

    /// Player count: 1, local_N or online_N
    #[arg(short, long)]
    pub players: Option<PlayerCount>,

    /// Minimum local players (1 means single-player only)
    #[arg(long)]
    pub local: Option<u32>,

    /// Minimum online players (1 means single-player only)
    #[arg(long)]
    pub online: Option<u32>,

    /// Sort order: title, rating, release_date, local_players, online_players
    #[arg(long, default_value = "title")]
    pub sort: SortKey,
}

/// Player-count bounds evaluated by the backend before anything is sent.
#[derive(Args, Clone)]
pub(crate) struct ServerRangeArgs {
    /// Server-side minimum local players
    #[arg(long)]
    pub min_local: Option<u32>,

    /// Server-side maximum local players
    #[arg(long)]
    pub max_local: Option<u32>,

    /// Server-side minimum online players
    #[arg(long)]
    pub min_online: Option<u32>,

    /// Server-side maximum online players
    #[arg(long)]
    pub max_online: Option<u32>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List games in the library
    List {
        #[command(flatten)]
        filters: FilterArgs,

        #[command(flatten)]
        range: ServerRangeArgs,

        /// Maximum number of games to print
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show library statistics
    Stats {
        /// Also show the counts computed by the backend
        #[arg(long)]
        server: bool,
    },

    /// List every genre present in the library
    Genres,

    /// Show details for one game
    Show {
        /// Game id (as shown by `list`)
        id: i64,
    },

    /// Sync metadata from RAWG
    Sync {
        /// Re-sync games that already have metadata
        #[arg(long)]
        force: bool,

        /// Start the job and return without waiting for it
        #[arg(long)]
        no_wait: bool,
    },

    /// Sync metadata from IGDB
    SyncIgdb {
        /// Start the job and return without waiting for it
        #[arg(long)]
        no_wait: bool,
    },

    /// Scrape the storefront library (opens a browser for login first)
    Scrape,

    /// Show the status and recent log lines of a job
    Status {
        /// Job: scrape, sync or igdb
        job: JobKind,

        /// Number of log lines to show
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },

    /// Clear the log buffer of a job
    ClearLogs {
        /// Job: scrape, sync or igdb
        job: JobKind,
    },

    /// Search the RAWG catalog for a game to add
    Search {
        /// Game name
        query: String,
    },

    /// Add a game by its RAWG id
    Add {
        /// RAWG id (from `search`)
        source_id: i64,

        /// Name to store the game under
        name: String,
    },

    /// Sync a single game against one metadata source
    SyncGame {
        /// Game id (as shown by `list`)
        id: i64,

        /// Metadata source: rawg or igdb
        #[arg(long, default_value = "rawg")]
        source: MetadataSource,
    },

    /// Manage backend connection settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and where each value came from
    Show,

    /// Print the config file path
    Path,

    /// Write the effective settings to the config file
    Save,
}
