//! Session token storage
//!
//! The bearer token lives in exactly one place, chosen at startup and
//! injected into [`ApiClient`](super::ApiClient). Nothing reads it from
//! ambient global state, so tests can hand in a [`MemoryTokenStore`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chronodesk_domain::constants::AUTH_TOKEN_KEY;
use chronodesk_domain::{SessionConfig, TokenStoreKind};
use keyring::Entry;
use parking_lot::RwLock;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::errors::ApiError;

/// Trait for reading and persisting the session token
///
/// This trait allows dependency injection and testing with in-memory stores.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when no session is active
    async fn token(&self) -> Result<Option<String>, ApiError>;

    /// Persist a token obtained at login
    async fn store(&self, token: &str) -> Result<(), ApiError>;

    /// Forget the token (logout)
    async fn clear(&self) -> Result<(), ApiError>;

    /// Whether a session is active. Storage failures count as "no".
    async fn is_authenticated(&self) -> bool {
        matches!(self.token().await, Ok(Some(_)))
    }
}

fn non_empty(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}

/// Token held in process memory
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a session token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        Ok(non_empty(self.token.read().clone()))
    }

    async fn store(&self, token: &str) -> Result<(), ApiError> {
        *self.token.write() = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        *self.token.write() = None;
        Ok(())
    }
}

/// Token persisted in a JSON key/value file under [`AUTH_TOKEN_KEY`]
///
/// Other keys in the file are left untouched.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl FileTokenStore {
    /// Store backed by the JSON file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), write_lock: tokio::sync::Mutex::new(()) }
    }

    /// Session file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<Map<String, Value>, ApiError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(err.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ApiError::Storage(format!(
                "session file {} is not a JSON object",
                self.path.display()
            ))),
            Err(err) => Err(ApiError::Storage(format!(
                "session file {} is corrupt: {err}",
                self.path.display()
            ))),
        }
    }

    async fn write_map(&self, map: &Map<String, Value>) -> Result<(), ApiError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_vec_pretty(map)
            .map_err(|err| ApiError::Storage(format!("failed to encode session file: {err}")))?;

        // Write-then-rename so a crash never leaves a truncated file behind.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, serialized).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        let map = self.read_map().await?;
        let token = map.get(AUTH_TOKEN_KEY).and_then(Value::as_str).map(str::to_string);
        Ok(non_empty(token))
    }

    async fn store(&self, token: &str) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(AUTH_TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_map(&map).await?;
        debug!(path = %self.path.display(), "session token stored");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(AUTH_TOKEN_KEY).is_some() {
            self.write_map(&map).await?;
            debug!(path = %self.path.display(), "session token cleared");
        }
        Ok(())
    }
}

/// Token persisted in the platform keychain (account [`AUTH_TOKEN_KEY`])
#[derive(Debug)]
pub struct KeychainTokenStore {
    service_name: String,
}

impl KeychainTokenStore {
    /// # Arguments
    ///
    /// * `service_name` - Keychain service name (e.g., "ChronoDesk.api")
    pub fn new(service_name: impl Into<String>) -> Self {
        Self { service_name: service_name.into() }
    }

    fn entry(&self) -> Result<Entry, ApiError> {
        Ok(Entry::new(&self.service_name, AUTH_TOKEN_KEY)?)
    }
}

#[async_trait]
impl TokenStore for KeychainTokenStore {
    async fn token(&self) -> Result<Option<String>, ApiError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(non_empty(Some(token))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn store(&self, token: &str) -> Result<(), ApiError> {
        self.entry()?.set_password(token)?;
        debug!(service = %self.service_name, "session token stored in keychain");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Build the token store selected in configuration
pub fn token_store_from_config(config: &SessionConfig) -> Arc<dyn TokenStore> {
    info!(store = ?config.store, "initialising session token store");
    match config.store {
        TokenStoreKind::Memory => Arc::new(MemoryTokenStore::new()),
        TokenStoreKind::File => Arc::new(FileTokenStore::new(&config.token_path)),
        TokenStoreKind::Keychain => Arc::new(KeychainTokenStore::new(&config.keychain_service)),
    }
}
