//! Shared fixtures for command-layer tests.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use roster_core::prelude::*;

use crate::views::{ViewError, ViewFactory};
use crate::Roster;

/// Permission node used by the test configurations.
pub(crate) const SEE_ANY: &str = "roster.friends.seeany";

pub(crate) struct TestUser {
    name: String,
    id: PlayerId,
    permissions: Vec<String>,
    messages: Mutex<Vec<String>>,
}

impl TestUser {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            id: PlayerId::new(Uuid::new_v4()),
            permissions: Vec::new(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_permission(mut self, node: &str) -> Self {
        self.permissions.push(node.to_string());
        self
    }

    pub(crate) fn sent_messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl User for TestUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> PlayerId {
        self.id
    }

    fn has_permission(&self, node: &str) -> bool {
        self.permissions.iter().any(|held| held == node)
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Records every successful open as (viewer name, owner id), or fails every
/// open when constructed with [`RecordingViewFactory::failing`].
#[derive(Default)]
pub(crate) struct RecordingViewFactory {
    fail: bool,
    opened: Mutex<Vec<(String, PlayerId)>>,
}

impl RecordingViewFactory {
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn opened(&self) -> Vec<(String, PlayerId)> {
        self.opened.lock().clone()
    }
}

impl ViewFactory for Arc<RecordingViewFactory> {
    fn open_friend_list(
        &self,
        _section: &ConfigSection,
        viewer: &dyn User,
        owner: PlayerId,
    ) -> Result<(), ViewError> {
        if self.fail {
            return Err(ViewError::Open(anyhow::anyhow!("view service offline")));
        }
        self.opened.lock().push((viewer.name().to_string(), owner));
        Ok(())
    }
}

/// In-memory player store preserving insertion order.
#[derive(Default)]
pub(crate) struct TestDatabase {
    players: RwLock<Vec<PlayerRecord>>,
}

impl TestDatabase {
    pub(crate) fn push(&self, record: PlayerRecord) -> PlayerRecord {
        self.players.write().push(record.clone());
        record
    }
}

impl PlayerDatabase for TestDatabase {
    fn contains(&self, name: &str) -> bool {
        self.players
            .read()
            .iter()
            .any(|record| record.name.value() == name)
    }

    fn records_by_name(&self, name: &str) -> Vec<PlayerRecord> {
        self.players
            .read()
            .iter()
            .filter(|record| record.name.value() == name)
            .cloned()
            .collect()
    }

    fn all_names(&self) -> Vec<PlayerName> {
        self.players
            .read()
            .iter()
            .map(|record| record.name.clone())
            .collect()
    }

    fn add_record(&self, record: PlayerRecord) -> roster_core::database::Result<PlayerRecord> {
        Ok(self.push(record))
    }
}

pub(crate) fn record(name: &str) -> PlayerRecord {
    PlayerRecord {
        id: PlayerId::new(Uuid::new_v4()),
        name: PlayerName::new(name).unwrap(),
    }
}

pub(crate) fn config_with_node() -> ConfigSection {
    ConfigSection::parse(r#"{ list: { permission_see_any: "roster.friends.seeany" } }"#).unwrap()
}

pub(crate) fn config_without_node() -> ConfigSection {
    ConfigSection::parse(r#"{ list: {} }"#).unwrap()
}

pub(crate) struct TestHarness {
    pub(crate) server: Arc<Roster>,
    pub(crate) views: Arc<RecordingViewFactory>,
}

pub(crate) fn harness(
    config: ConfigSection,
    database: Option<Arc<TestDatabase>>,
    views: RecordingViewFactory,
) -> TestHarness {
    let views = Arc::new(views);
    let server = Arc::new(Roster::new(
        config,
        database.map(|db| db as Arc<dyn PlayerDatabase>),
        Box::new(Arc::clone(&views)),
    ));
    TestHarness { server, views }
}

pub(crate) fn harness_with_players(config: ConfigSection, names: &[&str]) -> TestHarness {
    let database = Arc::new(TestDatabase::default());
    for name in names {
        database.push(record(name));
    }
    harness(config, Some(database), RecordingViewFactory::default())
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
