use std::sync::Arc;

use tracing::debug;

use shared_config::AppConfig;
use shared_models::{AppError, AppResult, Session};
use shared_utils::{Notifier, SectionContext};

use crate::section::Section;

/// Landing page after sign-in. Owns the session for the lifetime of the
/// dashboard and hands a [`SectionContext`] to whichever section is opened.
pub struct Dashboard {
    config: Arc<AppConfig>,
    session: Session,
    notifier: Arc<dyn Notifier>,
    selected: Option<Section>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl Dashboard {
    /// Fails with `NotSignedIn` when no session was bootstrapped.
    pub fn open(
        config: Arc<AppConfig>,
        session: Option<Session>,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        let session = session.ok_or(AppError::NotSignedIn)?;
        debug!("Opening dashboard for user {}", session.user_id);

        Ok(Self {
            config,
            session,
            notifier,
            selected: None,
        })
    }

    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.session.display_name())
    }

    pub fn sections(&self) -> &'static [Section] {
        &Section::ALL
    }

    pub fn selected(&self) -> Option<Section> {
        self.selected
    }

    /// Marks `section` active and returns the context its controller mounts with.
    pub fn open_section(&mut self, section: Section) -> SectionContext {
        self.selected = Some(section);
        self.context()
    }

    pub fn context(&self) -> SectionContext {
        SectionContext::new(self.config.clone(), self.session.clone(), self.notifier.clone())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
