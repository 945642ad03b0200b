//! Convenience re-exports for hosts embedding the plugin.

pub use crate::command::{
    ClientCommand, Command, CommandDispatcher, CommandError, CommandRegistration, CommandResult,
    CommandSource, CommandStatus,
};
pub use crate::server::Roster;
pub use crate::views::{ViewError, ViewFactory};
