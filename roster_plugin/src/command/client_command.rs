use std::sync::Arc;

use roster_core::prelude::*;

use super::*;

/// Describes the possible sources that can invoke a command handler
pub enum CommandSource<'a> {
    /// A non-interactive caller, such as the proxy console
    Console,
    /// An interactive player session
    Player(&'a dyn User),
}

/// A command invocation to be handled
pub struct ClientCommand {
    /// The [`Roster`] instance
    server: Arc<Roster>,
    /// The user this invocation runs on behalf of, if any
    user: Option<Arc<dyn User>>,
    /// The command word being executed
    command: String,
    /// Arguments as routed by the parent command; by convention the
    /// subcommand word itself sits at index 0
    args: Vec<String>,
}

impl ClientCommand {
    /// Construct a `ClientCommand`. Pass `None` for `user` when the
    /// invocation has no interactive player context.
    pub fn new(
        server: Arc<Roster>,
        user: Option<Arc<dyn User>>,
        command: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            server,
            user,
            command: command.into(),
            args,
        }
    }
}

impl Command for ClientCommand {
    fn source(&self) -> CommandSource<'_> {
        match &self.user {
            Some(user) => CommandSource::Player(user.as_ref()),
            None => CommandSource::Console,
        }
    }

    fn command(&self) -> &str {
        &self.command
    }

    fn args(&self) -> ArgListIter<'_> {
        ArgListIter::new(&self.args)
    }

    fn server(&self) -> &Arc<Roster> {
        &self.server
    }

    fn notify_error(&self, err: CommandError) {
        if let Some(message) = self.translate_command_error(&err) {
            self.notify(&message);
        }
    }

    fn notify(&self, message: &str) {
        if let CommandSource::Player(user) = self.source() {
            user.send_message(message);
        }
    }
}

impl ClientCommand {
    fn translate_command_error(&self, err: &CommandError) -> Option<String> {
        match err {
            CommandError::CommandNotFound(_) => Some(messages::UNKNOWN_COMMAND.to_string()),
            CommandError::NotEnoughParameters => {
                Some(format!("Not enough parameters for {}", self.command))
            }
            CommandError::InvalidArgument(value, expected) => {
                Some(format!("{value} is not a valid {expected}"))
            }
            // Denied permission falls back to less privileged behaviour
            // rather than advertising the node
            CommandError::Permission(_) => None,
            CommandError::RequiresPlayer => None,
            CommandError::Database(_) => None,
            CommandError::UnderlyingError(_) => None,
        }
    }
}
