//! In-memory session store.

use parking_lot::Mutex;

use crate::api::types::AdminUser;
use crate::error::Result;
use crate::session::SessionStore;

/// Session store backed by process memory. Starts signed out.
#[derive(Default)]
pub struct MemorySession {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    access_token: Option<String>,
    refresh_token: Option<String>,
    user: Option<AdminUser>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start already signed in with a placeholder token.
    #[must_use]
    pub fn signed_in() -> Self {
        let session = Self::new();
        {
            let mut inner = session.inner.lock();
            inner.access_token = Some("test-access-token".into());
            inner.refresh_token = Some("test-refresh-token".into());
        }
        session
    }
}

impl SessionStore for MemorySession {
    fn access_token(&self) -> Option<String> {
        self.inner.lock().access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        self.inner.lock().refresh_token.clone()
    }

    fn set_tokens(&self, access: &str, refresh: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.access_token = Some(access.to_string());
        inner.refresh_token = Some(refresh.to_string());
        Ok(())
    }

    fn user(&self) -> Option<AdminUser> {
        self.inner.lock().user.clone()
    }

    fn set_user(&self, user: &AdminUser) -> Result<()> {
        self.inner.lock().user = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.lock() = Inner::default();
        Ok(())
    }
}
