use roster_core::prelude::*;

/// An error that may occur during command processing
///
/// Handlers deal with user-recoverable conditions themselves; anything
/// returned here is translated by the dispatcher into at most one
/// notification to the invoker, and the invocation still terminates with a
/// status rather than propagating the failure.
#[derive(Debug)]
pub enum CommandError {
    /// Something returned an `Error` that we don't know how to handle
    UnderlyingError(anyhow::Error),
    /// The command wasn't recognised
    CommandNotFound(String),
    /// Not enough arguments were provided
    NotEnoughParameters,
    /// A player-only handler was invoked without a player context
    RequiresPlayer,
    /// A given parameter (.0) wasn't valid for the expected type (.1)
    InvalidArgument(String, String),
    /// A permission error was encountered
    Permission(PermissionError),
    /// The backing record store failed
    Database(DatabaseError),
}

impl CommandError {
    pub fn unknown(desc: impl std::fmt::Display) -> Self {
        Self::UnderlyingError(anyhow::anyhow!("{desc}"))
    }
}

impl From<PermissionError> for CommandError {
    fn from(e: PermissionError) -> Self {
        Self::Permission(e)
    }
}

impl From<DatabaseError> for CommandError {
    fn from(e: DatabaseError) -> Self {
        Self::Database(e)
    }
}

impl From<InvalidPlayerNameError> for CommandError {
    fn from(e: InvalidPlayerNameError) -> Self {
        Self::InvalidArgument(e.0, "player name".to_string())
    }
}
