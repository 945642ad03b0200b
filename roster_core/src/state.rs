//! Persisted state types.

use serde::{Deserialize, Serialize};

use crate::{id::PlayerId, validated::PlayerName};

/// A persisted player record.
///
/// Records are created by the host when a player first connects and are only
/// ever read by the command layer. `id` is stable for the life of the
/// account; `name` is whatever the player was last seen as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: PlayerName,
}
