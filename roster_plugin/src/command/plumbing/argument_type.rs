use roster_core::prelude::*;

use super::*;

/// Trait to be implemented for any type that can be an ambient parameter
/// (i.e. one that does not originate from a positional command parameter, but
/// is taken from the command context) to a command handler function
pub trait AmbientArgument<'a>: Sized + Send + Sync
where
    Self: 'a,
{
    /// Attempt to extract an argument of this type from the provided command
    /// context.
    ///
    /// Callers should check for an `Err` return and notify the originator of
    /// the command that an error was encountered.
    fn load_from(ctx: &'a dyn Command) -> Result<Self, CommandError>;
}

/// Trait to be implemented for any type that can be a positional parameter to
/// a command handler function
pub trait PositionalArgument<'a>: Sized + Send + Sync
where
    Self: 'a,
{
    /// Attempt to extract an argument of this type from the provided command
    /// context and argument list. The default implementation takes a string
    /// value from `arg_list` and passes it to [`parse_str`](Self::parse_str).
    fn parse<'b>(ctx: &'a dyn Command, arg_list: &'b mut ArgListIter<'a>) -> Result<Self, CommandError>
    where
        'a: 'b,
    {
        let s = arg_list.next().ok_or(CommandError::NotEnoughParameters)?;
        Self::parse_str(ctx, s)
    }

    /// Parse an argument of this type from the given string value. This is
    /// called by the default implementation of [`parse`](Self::parse).
    fn parse_str(ctx: &'a dyn Command, value: &'a str) -> Result<Self, CommandError>;
}

impl<'a> AmbientArgument<'a> for &'a dyn Command {
    fn load_from(ctx: &'a dyn Command) -> Result<Self, CommandError> {
        Ok(ctx)
    }
}

impl<'a> AmbientArgument<'a> for &'a crate::Roster {
    fn load_from(ctx: &'a dyn Command) -> Result<Self, CommandError> {
        Ok(ctx.server().as_ref())
    }
}

impl<'a> PositionalArgument<'a> for &'a str {
    fn parse_str(_ctx: &'a dyn Command, s: &'a str) -> Result<Self, CommandError> {
        Ok(s)
    }
}

impl<'a> PositionalArgument<'a> for PlayerName {
    fn parse_str(_ctx: &'a dyn Command, value: &'a str) -> Result<Self, CommandError> {
        Ok(PlayerName::new(value)?)
    }
}

impl<'a, T: PositionalArgument<'a>> PositionalArgument<'a> for Option<T> {
    fn parse<'b>(ctx: &'a dyn Command, arg_list: &'b mut ArgListIter<'a>) -> Result<Self, CommandError>
    where
        'a: 'b,
    {
        Ok(T::parse(ctx, arg_list).ok())
    }

    fn parse_str(_ctx: &'a dyn Command, _value: &'a str) -> Result<Self, CommandError> {
        unreachable!();
    }
}
