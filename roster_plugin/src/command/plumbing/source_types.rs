use roster_core::prelude::*;

use super::*;

/// Ambient argument selecting the invoking player.
///
/// Loading this from a console-originated invocation fails with
/// [`CommandError::RequiresPlayer`], which the dispatcher reports upward as
/// a status rather than a user-visible error.
pub struct UserSource<'a>(pub &'a dyn User);

impl<'a> AmbientArgument<'a> for UserSource<'a> {
    fn load_from(ctx: &'a dyn Command) -> Result<Self, CommandError> {
        match ctx.source() {
            CommandSource::Player(user) => Ok(Self(user)),
            CommandSource::Console => Err(CommandError::RequiresPlayer),
        }
    }
}

impl<'a> AmbientArgument<'a> for CommandSource<'a> {
    fn load_from(ctx: &'a dyn Command) -> Result<Self, CommandError> {
        Ok(ctx.source())
    }
}

impl<'a> std::ops::Deref for UserSource<'a> {
    type Target = dyn User + 'a;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a> AsRef<dyn User + 'a> for UserSource<'a> {
    fn as_ref(&self) -> &(dyn User + 'a) {
        self.0
    }
}
