//! In-memory wizard sessions
//!
//! One `ClaimWizard` lives per session id for the duration of a wizard run.
//! Sessions are held behind a shared map; each wizard sits in its own async
//! mutex so two requests against the same session serialize while requests
//! against different sessions do not contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use core_kernel::UserId;
use domain_claims::{ClaimRepository, ClaimWizard};
use domain_uploads::DocumentUploader;

/// Shared handle to one wizard session
pub type SessionHandle = Arc<Mutex<ClaimWizard>>;

/// The session map shared across handlers
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionHandle>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new wizard session and returns its id
    pub async fn create(
        &self,
        user_id: UserId,
        uploader: Arc<dyn DocumentUploader>,
        repository: Arc<dyn ClaimRepository>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let wizard = ClaimWizard::new(user_id, uploader, repository);
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(wizard)));
        id
    }

    /// Looks up a session by id
    pub async fn get(&self, id: Uuid) -> Option<SessionHandle> {
        self.sessions.read().await.get(&id).cloned()
    }

    /// Drops a session (wizard completed or abandoned)
    pub async fn remove(&self, id: Uuid) -> bool {
        self.sessions.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
