//! Command handlers.

use crate::messages;
use crate::server::Roster;
use roster_core::prelude::*;

mod client_command;
pub use client_command::*;

mod error;
pub use error::*;

mod dispatcher;
pub use dispatcher::*;

mod plumbing;
pub use plumbing::{ArgList, ArgListIter, Command};

/// A convenience definition for the result type returned from command handlers
pub type CommandResult = Result<CommandStatus, CommandError>;

/// Terminal status of one command invocation, reported to the host
/// dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum CommandStatus {
    /// The invocation ran to completion. Covers both "view opened" and
    /// "failure handled and surfaced via messaging"; the two are
    /// distinguished only by what the invoker was sent.
    Completed,
    /// The command needs an interactive player context
    RequiresPlayer,
    /// The backing record store is disabled
    DatabaseDisabled,
}

mod handlers {
    // These are here so the handler modules can import everything easily
    use super::*;
    use plumbing::*;

    mod list;
}

#[cfg(test)]
pub(crate) mod test_support;
