use std::sync::Arc;

use shared_config::AppConfig;
use shared_models::{AppError, Session, Toast};
use shared_utils::Notifier;

use crate::models::{AuthTab, LoginForm, SignupForm};
use crate::navigation::Route;
use crate::services::auth::AuthService;
use crate::session::{SessionManager, SessionStorage};

/// Login/signup page state.
pub struct AuthController {
    service: AuthService,
    notifier: Arc<dyn Notifier>,
    tab: AuthTab,
    pub login_form: LoginForm,
    pub signup_form: SignupForm,
    loading: bool,
}

impl AuthController {
    pub fn new(config: &AppConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service: AuthService::new(config),
            notifier,
            tab: AuthTab::default(),
            login_form: LoginForm::default(),
            signup_form: SignupForm::default(),
            loading: false,
        }
    }

    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submits whichever form is showing. On success the session is stored
    /// and the dashboard route is returned.
    pub async fn submit<S: SessionStorage>(&mut self, sessions: &mut SessionManager<S>) -> Option<Route> {
        let result = match self.tab {
            AuthTab::Login => self.login().await,
            AuthTab::Signup => self.signup().await,
        };

        let (session, greeting) = match result {
            Ok(ok) => ok,
            Err(err) => {
                let fallback = match self.tab {
                    AuthTab::Login => "Login failed. Please try again.",
                    AuthTab::Signup => "Signup failed. Please try again.",
                };
                self.notifier.notify(Toast::error(err.toast_message(fallback)));
                return None;
            }
        };

        if let Err(err) = sessions.persist(&session) {
            self.notifier.notify(Toast::error(err.toast_message("Could not save your session")));
            return None;
        }

        self.login_form = LoginForm::default();
        self.signup_form = SignupForm::default();
        self.notifier.notify(Toast::success(greeting));
        Some(Route::Dashboard)
    }

    async fn login(&mut self) -> Result<(Session, String), AppError> {
        let request = self.login_form.validate()?;

        self.loading = true;
        let result = self.service.login(&request).await;
        self.loading = false;

        let session = result?;
        let greeting = format!("Welcome back, {}!", session.display_name());
        Ok((session, greeting))
    }

    async fn signup(&mut self) -> Result<(Session, String), AppError> {
        let request = self.signup_form.validate()?;

        self.loading = true;
        let result = self.service.signup(&request).await;
        self.loading = false;

        Ok((result?, "Account created successfully!".to_string()))
    }
}
