//! REST client and application core for the game-shelf backend.
//!
//! [`BackendClient`] speaks the backend's JSON-over-HTTP API. [`Library`]
//! combines a [`Backend`] with the catalog and job state from
//! `game-shelf-core`, and [`run_poll_loop`] keeps running jobs up to date.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod library;
pub mod poll;
pub mod types;

pub use backend::Backend;
pub use client::BackendClient;
pub use config::{ClientConfig, ConfigSource, ConfigSources, config_path, save_to_file};
pub use error::ClientError;
pub use library::{Library, PollReport};
pub use poll::{POLL_INTERVAL, run_poll_loop};
pub use types::{AddOutcome, AddedMetadata, PlayerRange, SearchResult, ServerStats};
