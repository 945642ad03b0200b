use std::collections::HashMap;

use super::*;

/// A command handler wrapper function, as stored in the registry
pub type CommandHandlerWrapper = fn(&ClientCommand) -> CommandResult;

/// A tab-completion resolver. `None` means "no suggestions", which is
/// distinct from an empty list.
pub type CommandSuggester = fn(&ClientCommand) -> Option<Vec<String>>;

/// A command handler registration. Collected at compile time via
/// `inventory::submit!`.
pub struct CommandRegistration {
    pub command: &'static str,
    pub handler: CommandHandlerWrapper,
    pub suggester: CommandSuggester,
}

inventory::collect!(CommandRegistration);

/// A command dispatcher. Collects registered command handlers and allows
/// lookup by command word.
pub struct CommandDispatcher {
    handlers: HashMap<String, &'static CommandRegistration>,
}

impl CommandDispatcher {
    /// Construct a `CommandDispatcher`.
    ///
    /// Handlers are populated via compile-time registration.
    pub fn new() -> Self {
        let mut handlers = HashMap::new();

        for reg in inventory::iter::<CommandRegistration> {
            tracing::info!("registering command {}", reg.command);
            handlers.insert(reg.command.to_ascii_lowercase(), reg);
        }

        Self { handlers }
    }

    /// Look up and execute the handler for the given invocation.
    ///
    /// Errors coming back from the handler are translated into at most one
    /// notification to the invoker; the returned status is terminal either
    /// way and never signals a hard failure to the host.
    pub fn dispatch_command(&self, ctx: &ClientCommand) -> CommandStatus {
        let Some(reg) = self.handlers.get(&ctx.command().to_ascii_lowercase()) else {
            ctx.notify_error(CommandError::CommandNotFound(ctx.command().to_string()));
            return CommandStatus::Completed;
        };

        let status = match (reg.handler)(ctx) {
            Ok(status) => status,
            Err(CommandError::RequiresPlayer) => CommandStatus::RequiresPlayer,
            Err(err) => {
                ctx.notify_error(err);
                CommandStatus::Completed
            }
        };

        tracing::trace!(command = ctx.command(), %status, "Command completed");
        status
    }

    /// Resolve tab-completion suggestions for the given invocation.
    /// Side-effect-free.
    pub fn resolve_suggestions(&self, ctx: &ClientCommand) -> Option<Vec<String>> {
        let reg = self.handlers.get(&ctx.command().to_ascii_lowercase())?;
        (reg.suggester)(ctx)
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
