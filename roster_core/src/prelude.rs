//! Convenience re-exports of the types most callers need.

pub use crate::config::{ConfigError, ConfigSection};
pub use crate::database::{DatabaseError, JsonDatabase, PlayerDatabase};
pub use crate::id::PlayerId;
pub use crate::policy::{
    PermissionError, PermissionResult, StandardViewPolicy, ViewPolicyService,
};
pub use crate::state::PlayerRecord;
pub use crate::user::User;
pub use crate::validated::{InvalidPlayerNameError, PlayerName};
