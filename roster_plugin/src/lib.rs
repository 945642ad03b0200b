//! Friend-list command handling for a proxy-hosted roster plugin.
//!
//! This crate primarily exists to support the [`Roster`] type, which bundles
//! the collaborators one installation of the plugin needs: the configuration
//! tree, the optional player database, the permission policy, and the view
//! opener. The host constructs a `Roster` at startup and a
//! [`command::ClientCommand`] per invocation, then hands both to a
//! [`command::CommandDispatcher`].
//!
//! # Command Handling
//!
//! Command handler registration is at compile time, via the `inventory`
//! crate. To add a new command, create a module under [`command`] and submit
//! a [`command::CommandRegistration`] - see the existing handler for an
//! example.
//!
//! Handlers run synchronously to completion in the caller's dispatch
//! context. They never raise failures to the host: every outcome is either a
//! returned [`command::CommandStatus`] or a message sent to the invoker.

pub mod command;
pub mod messages;
pub mod views;

mod server;
pub use server::Roster;

pub mod prelude;
