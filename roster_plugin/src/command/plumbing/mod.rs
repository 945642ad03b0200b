use std::sync::Arc;

use crate::server::Roster;

use super::{CommandError, CommandResult, CommandSource};

/// Ambient context available to every command handler
pub trait Command: Send + Sync {
    /// Return a `CommandSource` describing the originating user or console
    fn source(&self) -> CommandSource<'_>;

    /// The command word that was issued
    fn command(&self) -> &str;

    /// The arguments supplied to the command
    fn args(&self) -> ArgListIter<'_>;

    /// Access the [`Roster`] instance
    fn server(&self) -> &Arc<Roster>;

    /// Notify the invoker of an error, where it has a user-facing rendering
    fn notify_error(&self, err: CommandError);

    /// Send a message to the invoker, if there is an invoker to send to
    fn notify(&self, message: &str);
}

pub(crate) fn call_handler<'a, Amb, Pos>(
    ctx: &'a dyn Command,
    handler: &impl HandlerFn<'a, Amb, Pos>,
    args: ArgListIter<'a>,
) -> CommandResult {
    handler.call(ctx, args)
}

mod argument_list;
pub use argument_list::*;

mod argument_type;
pub use argument_type::*;

mod source_types;
pub use source_types::*;

mod handler;
pub use handler::*;
