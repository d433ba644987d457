use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Key the board is stored under.
pub const STATE_KEY: &str = "state";

/// String key/value store scoped to one browser session.
///
/// Implementations report a missing scope with [`BingoError::NoSessionScope`], which [`Session`] turns into
/// its per-operation default.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    /// Removes every entry of the scope, not only the board.
    fn clear(&mut self) -> Result<()>;
}

/// Session store kept in memory, for tests and hosts without a browser.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub key: String,
    /// Shape written by [`Session::save`] and expected by [`Session::load`].
    pub schema: SchemaVersion,
    /// Tile id given to flat boards found in storage when migrating them to the tagged schema.
    pub legacy_tile_id: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            key: STATE_KEY.to_string(),
            schema: SchemaVersion::default(),
            legacy_tile_id: "default".to_string(),
        }
    }
}

/// Board persistence on top of a [`SessionStore`].
///
/// A session without a store behaves as if storage were unavailable: loads find nothing, saves and clears
/// do nothing.
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: Option<S>,
    config: SessionConfig,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self::with_scope(Some(store), config)
    }

    pub fn detached(config: SessionConfig) -> Self {
        Self::with_scope(None, config)
    }

    pub fn with_scope(store: Option<S>, config: SessionConfig) -> Self {
        if store.is_none() {
            log::debug!("No session scope, board will not be persisted");
        }
        Self { store, config }
    }

    pub fn has_scope(&self) -> bool {
        self.store.is_some()
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> Option<&mut S> {
        self.store.as_mut()
    }

    /// Reads the stored board, `None` if nothing (or an empty string) was saved or there is no session scope.
    pub fn load(&self) -> Result<Option<StoredGameState>> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let raw = match store.get_item(&self.config.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) | Err(BingoError::NoSessionScope) => return Ok(None),
            Err(err) => return Err(err),
        };

        let stored: StoredGameState = serde_json::from_str(&raw)
            .map_err(|err| BingoError::MalformedStoredState(err.to_string()))?;
        log::debug!(
            "Loaded {}x{} board ({:?})",
            stored.size(),
            stored.size(),
            stored.schema()
        );

        match (self.config.schema, stored.schema()) {
            (expected, found) if expected == found => Ok(Some(stored)),
            (SchemaVersion::Tagged, SchemaVersion::Flat) => {
                log::info!(
                    "Migrating flat board to tagged schema as {:?}",
                    self.config.legacy_tile_id
                );
                Ok(Some(stored.into_tagged(self.config.legacy_tile_id.clone())))
            }
            (expected, found) => Err(BingoError::SchemaMismatch { expected, found }),
        }
    }

    /// Overwrites the stored board with `state`. Without a session scope nothing is checked or written.
    pub fn save(&mut self, state: &StoredGameState) -> Result<()> {
        let Some(store) = &mut self.store else {
            return Ok(());
        };
        let expected = self.config.schema;
        let found = state.schema();
        if expected != found {
            return Err(BingoError::SchemaMismatch { expected, found });
        }

        let raw = serde_json::to_string(state)
            .map_err(|err| BingoError::Storage(err.to_string()))?;
        match store.set_item(&self.config.key, &raw) {
            Ok(()) => {
                log::debug!("Saved board ({} bytes)", raw.len());
                Ok(())
            }
            Err(BingoError::NoSessionScope) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Wipes the whole session scope, including entries that aren't the board.
    pub fn clear(&mut self) -> Result<()> {
        let Some(store) = &mut self.store else {
            return Ok(());
        };
        match store.clear() {
            Ok(()) | Err(BingoError::NoSessionScope) => {
                log::debug!("Session cleared");
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// [`Session::load`] followed by [`to_full`].
    pub fn load_game(&self) -> Result<Option<GameState>> {
        Ok(self.load()?.as_ref().map(to_full))
    }

    /// [`to_stored`] followed by [`Session::save`].
    pub fn save_game(&mut self, game: &GameState) -> Result<()> {
        self.save(&to_stored(game))
    }
}
