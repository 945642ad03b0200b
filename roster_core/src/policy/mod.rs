//! Policy decisions for friend-list visibility.

// The standard policy has a zero-parameter new(), but isn't a meaningful candidate for Default
#![allow(clippy::new_without_default)]

use thiserror::Error;

use crate::{config::ConfigSection, user::User};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PermissionError {
    /// The configuration declares no permission node for this action
    #[error("No permission node is declared for this action")]
    NotDeclared,
    /// The declared node isn't held by the user
    #[error("Missing permission: {0}")]
    NotGranted(String),
}

/// Convenience definition of the `Result` type for permission checks.
pub type PermissionResult = Result<(), PermissionError>;

/// Config key declaring the node that gates cross-player queries.
pub const SEE_ANY_KEY: &str = "permission_see_any";

/// Makes policy decisions regarding friend-list views
pub trait ViewPolicyService: Send + Sync {
    /// Determine whether `user` may open another player's friend list.
    ///
    /// Fails closed: an undeclared node denies exactly like a node the user
    /// doesn't hold.
    fn can_view_other(&self, user: &dyn User, section: &ConfigSection) -> PermissionResult;

    /// Determine whether stored player names may be revealed to `user`
    /// through tab completion.
    ///
    /// Unlike [`can_view_other`](Self::can_view_other), an undeclared node
    /// allows browsing; only a declared node the user lacks denies it.
    fn can_browse_players(&self, user: &dyn User, section: &ConfigSection) -> bool;
}

/// The standard implementation of a [`ViewPolicyService`]
pub struct StandardViewPolicy;

impl StandardViewPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl ViewPolicyService for StandardViewPolicy {
    fn can_view_other(&self, user: &dyn User, section: &ConfigSection) -> PermissionResult {
        match section.get_string_opt(SEE_ANY_KEY) {
            None => Err(PermissionError::NotDeclared),
            Some(node) => {
                if user.has_permission(&node) {
                    Ok(())
                } else {
                    Err(PermissionError::NotGranted(node))
                }
            }
        }
    }

    fn can_browse_players(&self, user: &dyn User, section: &ConfigSection) -> bool {
        match section.get_string_opt(SEE_ANY_KEY) {
            Some(node) => user.has_permission(&node),
            None => true,
        }
    }
}
