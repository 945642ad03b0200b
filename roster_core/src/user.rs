use crate::id::PlayerId;

/// The acting identity behind a command invocation.
///
/// Implemented by the host runtime over its player session type. A `User` is
/// only valid for the duration of one invocation; nothing in this crate
/// retains one.
pub trait User: Send + Sync {
    /// The player's current name.
    fn name(&self) -> &str;

    /// The player's stable identifier.
    fn id(&self) -> PlayerId;

    /// Ask the host's permission system whether this user holds the given
    /// permission node. Evaluated fresh on every call, never cached here.
    fn has_permission(&self, node: &str) -> bool;

    /// Send a templated message to this user. Placeholder expansion is the
    /// host's concern; templates are passed through verbatim.
    fn send_message(&self, message: &str);
}
