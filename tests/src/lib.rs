//! End-to-end fixtures: a throwaway session file and the shared toast queue,
//! wired the same way the `medsage` binary wires them.

use std::sync::Arc;

use tempfile::TempDir;

use auth_cell::{FileStorage, SessionManager};
use shared_config::AppConfig;
use shared_models::AppResult;
use shared_utils::ToastQueue;

pub struct TestWorkspace {
    // Held so the session directory outlives the test.
    _dir: TempDir,
    pub config: Arc<AppConfig>,
    pub toasts: Arc<ToastQueue>,
}

impl TestWorkspace {
    pub fn new(api_base_url: &str) -> AppResult<Self> {
        let dir = tempfile::tempdir()?;
        let config = AppConfig::new(api_base_url, dir.path().join("medsage").join("session.json"));

        Ok(Self {
            _dir: dir,
            config: Arc::new(config),
            toasts: Arc::new(ToastQueue::new()),
        })
    }

    /// Opens the session file fresh, as a new process would.
    pub fn sessions(&self) -> AppResult<SessionManager<FileStorage>> {
        Ok(SessionManager::new(FileStorage::open(&self.config.session_file)?))
    }

    pub fn toast_messages(&self) -> Vec<String> {
        self.toasts.drain().into_iter().map(|t| t.message).collect()
    }
}
