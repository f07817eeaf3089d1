use tracing::warn;

use shared_utils::SectionContext;

use crate::models::{ProfileForm, ProfileTab, UserProfile};
use crate::services::profile::ProfileService;

/// Profile page: the stored document plus one edit draft.
pub struct ProfileController {
    ctx: SectionContext,
    service: ProfileService,
    tab: ProfileTab,
    profile: Option<UserProfile>,
    loading: bool,
    pub form: ProfileForm,
}

impl ProfileController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = ProfileService::new(ctx.config());
        Self {
            ctx,
            service,
            tab: ProfileTab::default(),
            profile: None,
            loading: false,
            form: ProfileForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.loading = true;
        let result = self.service.get_profile(self.ctx.token()).await;
        self.loading = false;

        match result {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => self.ctx.notify_error(&err, "Failed to load profile"),
        }
    }

    /// Sends the filled-in fields. The server replies without the document,
    /// so it is fetched again afterwards.
    pub async fn submit(&mut self) -> bool {
        let update = match self.form.validate() {
            Ok(update) => update,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in at least one field");
                return false;
            }
        };

        self.loading = true;
        let result = self.service.update_profile(&update, self.ctx.token()).await;
        self.loading = false;

        match result {
            Ok(message) => {
                self.ctx.notify_success(message.unwrap_or_else(|| "Profile updated successfully".to_string()));
                self.form = ProfileForm::default();
                self.tab = ProfileTab::View;
                self.reload().await;
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to update profile");
                false
            }
        }
    }

    async fn reload(&mut self) {
        match self.service.get_profile(self.ctx.token()).await {
            Ok(profile) => self.profile = Some(profile),
            Err(err) => warn!("Profile reload after update failed: {}", err),
        }
    }

    pub fn switch_tab(&mut self, tab: ProfileTab) {
        self.tab = tab;
    }

    pub fn active_tab(&self) -> ProfileTab {
        self.tab
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}
