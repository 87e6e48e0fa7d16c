//! Session persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::login::Session;

/// How long a token is trusted before a refresh is due.
pub const REFRESH_INTERVAL_DAYS: i64 = 30;

/// Persists sessions under caller-chosen keys.
pub trait TokenStorage: Send + Sync {
    fn save(&self, key: &str, session: &Session) -> Result<()>;

    /// `Ok(None)` when nothing is stored under `key`.
    fn load(&self, key: &str) -> Result<Option<Session>>;

    /// Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<()>;

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.load(key)?.is_some())
    }

    /// Stored keys, sorted.
    fn list(&self) -> Result<Vec<String>>;
}

/// One pretty-printed JSON file per key, named after the key with anything
/// outside `[A-Za-z0-9_-]` replaced by `_`.
#[derive(Debug, Clone)]
pub struct FileTokenStorage {
    dir: PathBuf,
}

impl FileTokenStorage {
    /// Storage rooted at `~/.serviceworks/tokens/`.
    pub fn new() -> Result<Self> {
        default_token_dir().map(Self::with_path)
    }

    pub fn with_path(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// When the session under `key` was saved.
    pub fn stored_at(&self, key: &str) -> Result<Option<DateTime<Utc>>> {
        Ok(self.read(key)?.map(|stored| stored.stored_at))
    }

    /// True once the session under `key` is [`REFRESH_INTERVAL_DAYS`] old.
    /// Nothing stored means nothing to refresh.
    pub fn refresh_due(&self, key: &str, now: DateTime<Utc>) -> Result<bool> {
        Ok(self
            .read(key)?
            .is_some_and(|stored| stored.age(now) >= Duration::days(REFRESH_INTERVAL_DAYS)))
    }

    fn file_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| match c {
                'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' => c,
                _ => '_',
            })
            .collect();
        self.dir.join(name).with_extension("json")
    }

    fn read(&self, key: &str) -> Result<Option<StoredSession>> {
        match fs::read(self.file_for(key)) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl TokenStorage for FileTokenStorage {
    fn save(&self, key: &str, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.file_for(key);
        let stored = StoredSession::now(session.clone());
        fs::write(&path, serde_json::to_vec_pretty(&stored)?)?;
        restrict_to_owner(&path)?;

        debug!(key, path = %path.display(), "Session saved");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Session>> {
        Ok(self.read(key)?.map(|stored| stored.session))
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.file_for(key)) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.file_for(key).is_file())
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                keys.push(stem.to_owned());
            }
        }
        keys.sort_unstable();
        Ok(keys)
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// On-disk record: the session plus when it was written.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredSession {
    session: Session,
    stored_at: DateTime<Utc>,
}

impl StoredSession {
    fn now(session: Session) -> Self {
        Self {
            session,
            stored_at: Utc::now(),
        }
    }

    fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.stored_at
    }
}

/// `~/.serviceworks/tokens`.
pub fn default_token_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".serviceworks").join("tokens"))
        .ok_or_else(|| Error::new(ErrorKind::Config("Could not find home directory".to_string())))
}
