//! JSON file backed session store. The file holds a flat object of string
//! entries; other keys written by the rest of the application are preserved.
//! Writes go to a sibling temp file that is renamed over the target, so a
//! crash never leaves a half-written session behind.

use super::{Session, SessionStore, SESSION_KEYS};
use crate::app::AppError;
use std::{
    collections::BTreeMap,
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, AppError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(store_error(&self.path, "read", &err)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents)
            .map_err(|err| AppError::Store(format!("{} is corrupted: {err}", self.path.display())))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| store_error(parent, "create", &err))?;
        }

        let payload = serde_json::to_vec_pretty(entries)
            .map_err(|err| AppError::Store(format!("failed to encode session: {err}")))?;

        let tmp_path = self.tmp_path();
        let mut file = open_private(&tmp_path).map_err(|err| store_error(&tmp_path, "open", &err))?;
        file.write_all(&payload)
            .and_then(|()| file.sync_all())
            .map_err(|err| store_error(&tmp_path, "write", &err))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).map_err(|err| {
            let _ = fs::remove_file(&tmp_path);
            store_error(&self.path, "replace", &err)
        })
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| "session".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SessionStore for FileSessionStore {
    #[instrument(skip(self, session), fields(path = %self.path.display()))]
    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        for (key, value) in session.entries() {
            entries.insert(key.to_string(), value);
        }
        self.write_entries(&entries)?;
        debug!("session saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<Session>, AppError> {
        Ok(Session::from_entries(&self.read_entries()?))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        let before = entries.len();
        for key in SESSION_KEYS {
            entries.remove(key);
        }
        if entries.len() == before {
            return Ok(());
        }

        if entries.is_empty() {
            fs::remove_file(&self.path).map_err(|err| store_error(&self.path, "remove", &err))?;
        } else {
            self.write_entries(&entries)?;
        }
        debug!("session cleared");
        Ok(())
    }
}

fn store_error(path: &Path, action: &str, err: &std::io::Error) -> AppError {
    AppError::Store(format!("failed to {action} {}: {err}", path.display()))
}

// The session file holds a bearer token, keep it owner-readable only.
#[cfg(unix)]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;

    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_private(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AUTH_TOKEN_KEY, USER_EMAIL_KEY, USER_NAME_KEY};
    use secrecy::{ExposeSecret, SecretString};
    use tempfile::TempDir;

    fn session() -> Session {
        Session {
            auth_token: SecretString::from("tok-123"),
            user_name: "Maria".to_string(),
            user_email: "maria@example.com".to_string(),
        }
    }

    #[test]
    fn load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().unwrap().is_none());
        assert!(!store.is_authenticated().unwrap());
    }

    #[test]
    fn save_creates_parent_dirs_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileSessionStore::new(&path);

        store.save(&session()).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.auth_token.expose_secret(), "tok-123");
        assert_eq!(loaded.user_name, "Maria");
        assert!(!path.with_file_name("session.json.tmp").exists());

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get(AUTH_TOKEN_KEY).map(String::as_str), Some("tok-123"));
        assert_eq!(raw.get(USER_NAME_KEY).map(String::as_str), Some("Maria"));
        assert_eq!(
            raw.get(USER_EMAIL_KEY).map(String::as_str),
            Some("maria@example.com")
        );
    }

    #[test]
    fn save_and_clear_preserve_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();
        let store = FileSessionStore::new(&path);

        store.save(&session()).unwrap();
        store.clear().unwrap();

        let raw: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(raw.get("theme").map(String::as_str), Some("dark"));
    }

    #[test]
    fn clear_removes_file_when_only_session_was_stored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);

        store.save(&session()).unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        // Clearing twice is fine.
        store.clear().unwrap();
    }

    #[test]
    fn corrupted_file_is_a_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();
        let store = FileSessionStore::new(&path);

        assert!(matches!(store.load(), Err(AppError::Store(_))));
        assert!(matches!(store.save(&session()), Err(AppError::Store(_))));
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        FileSessionStore::new(&path).save(&session()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
