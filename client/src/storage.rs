//! Persistent key-value storage and the token store
//!
//! Models browser-local storage: a flat string-to-string map where writes
//! never fail the caller. `MemoryStorage` backs tests and ephemeral use;
//! `FileStorage` gives the CLI a durable backing with the same semantics
//! (load once at open, write through, keep the in-memory view authoritative
//! if the file write fails).

use careportal_shared::{decode, Claims, Theme};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Storage key for the raw bearer token
pub const TOKEN_KEY: &str = "token";
/// Storage key for the UI theme preference
pub const THEME_KEY: &str = "theme";

/// Flat persistent string storage, localStorage-style
///
/// Writes are infallible from the caller's perspective; implementations
/// that can fail internally must log and carry on.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).remove(key);
    }
}

/// JSON-file-backed storage
///
/// The whole map is rewritten on every mutation; entries are few and small
/// (a token and a theme), so this stays cheap.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open storage at `path`, loading any existing entries.
    ///
    /// A missing or unreadable file starts empty rather than failing: the
    /// worst outcome is a signed-out state.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "Ignoring corrupt storage file");
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        let text = match serde_json::to_string_pretty(entries) {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "Failed to serialize storage");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, text) {
            warn!(path = %self.path.display(), error = %e, "Failed to persist storage");
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        self.persist(&entries);
    }
}

/// Token store: the one owner of the `token` and `theme` keys
///
/// Cheap to clone; hand one to the API client, the guard, and the session
/// manager so they all see the same storage.
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn Storage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Raw token from storage, if any
    pub fn read_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Persist a token, overwriting any prior value. No validation.
    pub fn write_token(&self, token: &str) {
        self.storage.set(TOKEN_KEY, token);
    }

    /// Remove the persisted token. Idempotent.
    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_KEY);
    }

    /// Decode the stored token's claims.
    ///
    /// Any failure (no token, undecodable token) reads as "no authenticated
    /// session" and is logged at debug, never surfaced.
    pub fn claims(&self) -> Option<Claims> {
        let token = self.read_token()?;
        match decode(&token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                debug!(error = %e, "Failed to decode stored token");
                None
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.storage
            .get(THEME_KEY)
            .map(|v| Theme::from_stored(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.storage.set(THEME_KEY, theme.as_str());
    }
}
