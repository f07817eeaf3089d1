use std::sync::Arc;

use tracing::warn;

use shared_config::AppConfig;
use shared_models::{AppError, Session, Toast};

use crate::toast::Notifier;

/// Everything a section controller needs from its surroundings: where the API
/// lives, who is signed in, and where to send toasts.
///
/// Built once by the shell after the session bootstrap and handed to each
/// section on mount. Sections never read session storage themselves.
#[derive(Clone)]
pub struct SectionContext {
    config: Arc<AppConfig>,
    session: Session,
    notifier: Arc<dyn Notifier>,
}

impl SectionContext {
    pub fn new(config: Arc<AppConfig>, session: Session, notifier: Arc<dyn Notifier>) -> Self {
        Self { config, session, notifier }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> &str {
        &self.session.token
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notifier.notify(Toast::success(message));
    }

    pub fn notify_info(&self, message: impl Into<String>) {
        self.notifier.notify(Toast::info(message));
    }

    pub fn notify_error(&self, err: &AppError, fallback: &str) {
        if !err.is_validation() {
            warn!("Request failed: {}", err);
        }
        self.notifier.notify(Toast::error(err.toast_message(fallback)));
    }
}
