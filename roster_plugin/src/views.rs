//! The contract for opening friend-list views.
//!
//! Rendering lives in the host's inventory/UI system; this crate only ever
//! asks for a view to be constructed and presented, and observes the result.

use thiserror::Error;

use roster_core::prelude::*;

/// An error raised while constructing or opening a view
#[derive(Debug, Error)]
pub enum ViewError {
    /// The host declined to build the view
    #[error("View could not be constructed: {0}")]
    Construction(String),
    /// The view was built but could not be presented to the player
    #[error(transparent)]
    Open(#[from] anyhow::Error),
}

/// Opens friend-list views on behalf of command handlers.
///
/// Implemented by the host over its UI system. A view is transient: it is
/// bound to one owner identity and one invocation, and never reused.
pub trait ViewFactory: Send + Sync {
    /// Construct and open a friend-list view for `viewer`, showing the
    /// friend list owned by `owner`. The section is the command's `list`
    /// configuration subsection, which carries whatever display settings the
    /// host's renderer understands.
    fn open_friend_list(
        &self,
        section: &ConfigSection,
        viewer: &dyn User,
        owner: PlayerId,
    ) -> Result<(), ViewError>;
}
