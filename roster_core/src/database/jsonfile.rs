use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::{fs::File, path::PathBuf};

use super::{DatabaseError, PlayerDatabase, Result};
use crate::{state::PlayerRecord, validated::PlayerName};

/// A simple JSON file-backed player store for testing and demonstration purposes
///
/// This is not intended to perform adequately under significant loads.
pub struct JsonDatabase {
    filename: PathBuf,

    state: RwLock<JsonDatabaseState>,
}

#[derive(Serialize, Deserialize, Default)]
struct JsonDatabaseState {
    // Registration order; lookups report matches in this order
    players: Vec<PlayerRecord>,
}

impl JsonDatabase {
    /// Open the store backed by the given file. A missing file is not an
    /// error; the store starts empty and the file is created on first write.
    pub fn connect(conn: impl Into<PathBuf>) -> Result<Self> {
        let filename = conn.into();

        if let Ok(file) = File::open(&filename) {
            let state = serde_json::from_reader(file).map_err(DatabaseError::from_inner)?;

            Ok(Self {
                filename,
                state: RwLock::new(state),
            })
        } else {
            tracing::warn!("Couldn't open database file, starting from empty");
            Ok(Self {
                filename,
                state: Default::default(),
            })
        }
    }

    fn save(&self) -> Result<()> {
        let state = self.state.read();

        let file = File::create(&self.filename).map_err(DatabaseError::from_inner)?;
        serde_json::to_writer(file, &*state).map_err(DatabaseError::from_inner)?;
        Ok(())
    }
}

impl PlayerDatabase for JsonDatabase {
    fn contains(&self, name: &str) -> bool {
        self.state
            .read()
            .players
            .iter()
            .any(|record| record.name.value() == name)
    }

    fn records_by_name(&self, name: &str) -> Vec<PlayerRecord> {
        self.state
            .read()
            .players
            .iter()
            .filter(|record| record.name.value() == name)
            .cloned()
            .collect()
    }

    fn all_names(&self) -> Vec<PlayerName> {
        self.state
            .read()
            .players
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    fn add_record(&self, record: PlayerRecord) -> Result<PlayerRecord> {
        {
            let mut state = self.state.write();

            if state.players.iter().any(|existing| existing.id == record.id) {
                return Err(DatabaseError::DuplicateId);
            }
            state.players.push(record.clone());
        }

        self.save()?;
        Ok(record)
    }
}
