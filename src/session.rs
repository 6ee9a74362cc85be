//! Session persistence.
//!
//! Login stores the bearer tokens and the signed-in admin profile; every
//! other command reads them back. [`SessionStore`] abstracts the storage so
//! the API client never touches the filesystem directly.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::types::AdminUser;
use crate::error::{Error, Result, SessionError};

const SESSION_VERSION: u32 = 1;

/// Where tokens and the admin profile live between commands.
pub trait SessionStore: Send + Sync {
    /// Current access token, if signed in.
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Store both tokens. Called only after a successful login.
    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()>;

    fn user(&self) -> Option<AdminUser>;

    fn set_user(&self, user: &AdminUser) -> Result<()>;

    /// Drop tokens and profile.
    fn clear(&self) -> Result<()>;

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

/// On-disk session document.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct SessionDocument {
    version: u32,
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AdminUser>,
}

impl SessionDocument {
    fn empty() -> Self {
        Self {
            version: SESSION_VERSION,
            ..Self::default()
        }
    }
}

/// Session backed by a JSON file, written atomically.
pub struct FileSession {
    path: PathBuf,
    document: Mutex<SessionDocument>,
}

impl FileSession {
    /// Open the session at `path`, starting empty when the file is missing.
    ///
    /// A corrupt file is treated as signed out rather than wedging every
    /// command behind a parse error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = match Self::read_document(&path) {
            Ok(doc) => doc,
            Err(Error::Session(SessionError::Corrupt(e))) => {
                warn!(path = %path.display(), error = %e, "session file is corrupt, starting signed out");
                SessionDocument::empty()
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    fn read_document(path: &Path) -> Result<SessionDocument> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(SessionDocument::empty());
            }
            Err(e) => return Err(SessionError::Read(e).into()),
        };

        let document: SessionDocument =
            serde_json::from_str(&content).map_err(SessionError::Corrupt)?;

        if document.version != SESSION_VERSION {
            warn!(
                version = document.version,
                "unknown session file version, starting signed out"
            );
            return Ok(SessionDocument::empty());
        }

        Ok(document)
    }

    /// Write the document to a temp file, fsync, then rename into place.
    fn persist(&self, document: &SessionDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(SessionError::Write)?;
        }

        let temp_path = self.path.with_extension("tmp");

        let cleanup_and_err = |err: std::io::Error| {
            let _ = fs::remove_file(&temp_path);
            Error::from(SessionError::Write(err))
        };

        let json = serde_json::to_string_pretty(document)?;

        let mut file = fs::File::create(&temp_path).map_err(cleanup_and_err)?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        drop(file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // Tokens on disk are owner-readable only.
            fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))
                .map_err(cleanup_and_err)?;
        }

        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        Ok(())
    }
}

impl SessionStore for FileSession {
    fn access_token(&self) -> Option<String> {
        self.document.lock().access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.document.lock().refresh_token.clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut document = self.document.lock();
        document.access_token = Some(access.to_string());
        document.refresh_token = Some(refresh.to_string());
        self.persist(&document)
    }

    fn user(&self) -> Option<AdminUser> {
        self.document.lock().user.clone()
    }

    fn set_user(&self, user: &AdminUser) -> Result<()> {
        let mut document = self.document.lock();
        document.user = Some(user.clone());
        self.persist(&document)
    }

    fn clear(&self) -> Result<()> {
        let mut document = self.document.lock();
        *document = SessionDocument::empty();

        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Write(e).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_user() -> AdminUser {
        AdminUser {
            id: "admin-1".into(),
            email: "ops@example.com".into(),
            role: "admin".into(),
            status: Some("active".into()),
            two_factor_enabled: false,
        }
    }

    #[test]
    fn test_missing_file_starts_signed_out() {
        let dir = tempdir().unwrap();
        let session = FileSession::open(dir.path().join("session.json")).unwrap();

        assert!(!session.is_authenticated());
        assert!(session.access_token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_tokens_and_user_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = FileSession::open(&path).unwrap();
        session.set_tokens("access-abc", "refresh-xyz").unwrap();
        session.set_user(&sample_user()).unwrap();

        let reopened = FileSession::open(&path).unwrap();
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.access_token().unwrap(), "access-abc");
        assert_eq!(reopened.refresh_token().unwrap(), "refresh-xyz");
        assert_eq!(reopened.user().unwrap().email, "ops@example.com");
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = FileSession::open(&path).unwrap();
        session.set_tokens("access-abc", "refresh-xyz").unwrap();
        assert!(path.exists());

        session.clear().unwrap();
        assert!(!session.is_authenticated());
        assert!(!path.exists());

        // Clearing an already-clear session is fine.
        session.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_starts_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let session = FileSession::open(&path).unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unknown_version_starts_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"version": 99, "access_token": "stale", "refresh_token": null, "user": null}"#,
        )
        .unwrap();

        let session = FileSession::open(&path).unwrap();
        assert!(!session.is_authenticated());
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = FileSession::open(&path).unwrap();
        session.set_tokens("access-abc", "refresh-xyz").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
