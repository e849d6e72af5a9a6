//! Domain model and client-side logic for the game-shelf library dashboard.
//!
//! This crate has no I/O. It defines the game record shape delivered by the
//! backend, the display formatters, the combined score, the filter/sort engine
//! over an in-memory catalog, and the state machines for the background jobs
//! the backend runs on the user's behalf. `game-shelf-client` wires these to
//! the REST surface; front ends only read from them.

pub mod catalog;
pub mod de;
pub mod detail;
pub mod error;
pub mod filter;
pub mod format;
pub mod record;
pub mod score;
pub mod sort;
pub mod stats;
pub mod task;

pub use catalog::{CatalogState, LoadOutcome, LoadTicket};
pub use detail::{DetailView, GameDetail, build_detail};
pub use error::CoreError;
pub use filter::{FilterState, PlayerCount, PlayerMode, apply_filters, filter_records};
pub use record::{Achievement, GameRecord, MetadataSource, SourceA, SourceB, StoreLink};
pub use score::combined_score;
pub use sort::{SortKey, compare_records, sort_records};
pub use stats::{CatalogStats, derive_stats, extract_genres};
pub use task::{
    JobKind, JobPhase, JobResult, JobStatus, ScrapeState, StatusTransition, SyncState, TaskBoard,
};
