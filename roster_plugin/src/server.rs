use std::sync::Arc;

use roster_core::prelude::*;

use crate::views::ViewFactory;

/// Shared state for one installation of the roster plugin.
///
/// Owns the configuration tree for the friends command, the optional player
/// database, the permission policy, and the view opener. A reference travels
/// with every command invocation; nothing here is process-global.
pub struct Roster {
    config: ConfigSection,
    database: Option<Arc<dyn PlayerDatabase>>,
    policy: Box<dyn ViewPolicyService>,
    views: Box<dyn ViewFactory>,
}

impl Roster {
    /// Build a plugin instance from its configuration section and
    /// collaborators, with the standard permission policy.
    pub fn new(
        config: ConfigSection,
        database: Option<Arc<dyn PlayerDatabase>>,
        views: Box<dyn ViewFactory>,
    ) -> Self {
        Self {
            config,
            database,
            policy: Box::new(StandardViewPolicy::new()),
            views,
        }
    }

    /// Replace the default permission policy.
    pub fn with_policy(mut self, policy: Box<dyn ViewPolicyService>) -> Self {
        self.policy = policy;
        self
    }

    /// The configuration section for the friends command tree.
    pub fn config(&self) -> &ConfigSection {
        &self.config
    }

    /// The player database, if one is connected. `None` means the backing
    /// store is disabled and lookups must be skipped.
    pub fn database(&self) -> Option<&Arc<dyn PlayerDatabase>> {
        self.database.as_ref()
    }

    pub fn policy(&self) -> &dyn ViewPolicyService {
        &*self.policy
    }

    pub fn views(&self) -> &dyn ViewFactory {
        &*self.views
    }
}
