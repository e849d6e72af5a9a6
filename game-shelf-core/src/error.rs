use crate::task::JobKind;

/// Errors produced by the pure catalog and task logic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown sort key: {0} (expected title, rating, release_date, local_players, online_players)")]
    UnknownSortKey(String),

    #[error("Unknown player mode: {0} (expected local, online, singleplayer)")]
    UnknownPlayerMode(String),

    #[error("Invalid player count filter: {0} (expected 1, local_N or online_N)")]
    InvalidPlayerCount(String),

    #[error("Unknown job: {0} (expected scraping, syncing, igdb)")]
    UnknownJob(String),

    #[error("Unknown metadata source: {0} (expected rawg or igdb)")]
    UnknownSource(String),

    #[error("{0} is already in progress")]
    JobAlreadyActive(JobKind),

    #[error("{0} is not waiting for the user to continue")]
    NotAwaitingContinue(JobKind),
}
