//! The player record store contract.

use thiserror::Error;

use crate::{state::PlayerRecord, validated::PlayerName};

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Duplicate object ID")]
    DuplicateId,
    #[error("No such object ID")]
    NoSuchId,
    #[error("Invalid data")]
    InvalidData,
    #[error("{0}")]
    DbError(#[from] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl DatabaseError {
    fn from_inner<T: std::error::Error + Send + Sync + 'static>(inner: T) -> Self {
        Self::DbError(Box::new(inner))
    }
}

pub type Result<T> = std::result::Result<T, DatabaseError>;

/// Trait defining a player record store
///
/// The command layer holds an `Option<Arc<dyn PlayerDatabase>>`; `None`
/// means the store is disabled and every lookup must be skipped. Lookups are
/// by exact name match. Name uniqueness is expected of the store but not
/// relied upon: `records_by_name` returns records in store order and callers
/// take the first match.
pub trait PlayerDatabase: Send + Sync {
    /// Whether any record exists for the given name.
    fn contains(&self, name: &str) -> bool;

    /// All records whose name matches exactly, in store order.
    fn records_by_name(&self, name: &str) -> Vec<PlayerRecord>;

    /// The names of every stored record, in store order. This feeds tab
    /// completion.
    fn all_names(&self) -> Vec<PlayerName>;

    /// Store a new record. Fails if a record with the same id already exists.
    fn add_record(&self, record: PlayerRecord) -> Result<PlayerRecord>;
}

mod jsonfile;
pub use jsonfile::*;
