//! Errors used when driving a match.

use std::io;

use thiserror::Error;

/// Error returned when a match is driven out of phase, or when an interactive
/// strategy's input source fails.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Setup was run a second time.
    #[error("setup has already been run")]
    SetupAlreadyRun,

    /// A turn was requested before the fleets were placed.
    #[error("ships have not been placed yet")]
    SetupIncomplete,

    /// A turn was requested after a winner was determined.
    #[error("the match is already over")]
    AlreadyOver,

    /// A strategy failed to read its input.
    #[error(transparent)]
    Io(#[from] io::Error),
}
