use super::*;

/// Implemented for any function whose parameters are some number of ambient
/// arguments followed by some number of positional arguments. `Ambient` and
/// `Positional` are tuples of the respective parameter types, used only to
/// keep the blanket impls apart.
pub trait HandlerFn<'ctx, Ambient, Positional> {
    fn call(&self, ctx: &'ctx dyn Command, args: ArgListIter<'ctx>) -> CommandResult;
}

macro_rules! define_handler_fn
{
    ( ($($ambient:ident),*), ($($pos:ident),*) ) =>
    {
        impl<'ctx, T, $($ambient,)* $($pos),*> HandlerFn<'ctx, ($($ambient,)*), ($($pos,)*)> for T
            where T: Fn($($ambient,)* $($pos),*) -> CommandResult,
                  $( $ambient: AmbientArgument<'ctx>, )*
                  $( $pos: PositionalArgument<'ctx> ),*
        {
            // When this gets expanded with () as one of the argument lists these warnings will fire
            #[allow(unused_variables,unused_mut)]
            fn call(&self, ctx: &'ctx dyn Command, mut args: ArgListIter<'ctx>) -> CommandResult
            {
                self(
                    $(
                        $ambient::load_from(ctx)?,
                    )*
                    $(
                        $pos::parse(ctx, &mut args)?
                    ),*
                )
            }
        }
    }
}

macro_rules! define_handlers {
    ( ($a1:ident $(, $arest:ident)*), ( $($pos:ident),* ) ) =>
    {
        define_handlers2!( ($a1 $(, $arest)*), ($( $pos ),*) );
        define_handlers!( ($($arest),*), ($( $pos ),*) );
    };
    ( (), ( $($pos:ident),* ) ) =>
    {
        define_handlers2!((), ($( $pos ),*) );
    };
}

macro_rules! define_handlers2 {
    ( ($( $amb:ident ),*), ($p1:ident $(, $prest:ident)* ) ) =>
    {
        define_handler_fn!(( $( $amb ),* ), ( $p1 $(, $prest)* ));
        define_handlers2!(( $( $amb ),* ), ( $($prest),* ));
    };
    ( ($( $amb:ident ),*), () ) =>
    {
        define_handler_fn!(( $( $amb),* ), ());
    };
}

define_handlers!((A1, A2, A3), (P1, P2, P3));
