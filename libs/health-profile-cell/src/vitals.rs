use futures::join;
use tracing::{debug, warn};

use shared_utils::{SectionContext, SectionState};

use crate::models::{HealthScore, VitalSigns, VitalsForm, VitalsTab, DEFAULT_VITALS_DAYS};
use crate::services::vitals::VitalsService;

/// Vital-sign readings and the health score derived from them.
pub struct VitalsController {
    ctx: SectionContext,
    service: VitalsService,
    state: SectionState<VitalSigns, VitalsTab>,
    score: Option<HealthScore>,
    days: u32,
    pub form: VitalsForm,
}

impl VitalsController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = VitalsService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(VitalsTab::default()),
            score: None,
            days: DEFAULT_VITALS_DAYS,
            form: VitalsForm::default(),
        }
    }

    /// Sets the history window used by later fetches. Zero keeps the default.
    pub fn with_days(mut self, days: u32) -> Self {
        if days > 0 {
            self.days = days;
        }
        self
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Fetches readings and score together; each is updated independently.
    pub async fn refresh(&mut self) {
        self.state.begin_request();
        let token = self.ctx.token();
        let (vitals, score) = join!(
            self.service.get_vitals(self.days, token),
            self.service.get_health_score(token),
        );
        self.state.end_request();

        match vitals {
            Ok(vitals) => self.state.replace_items(vitals),
            Err(err) => self.ctx.notify_error(&err, "Failed to load vital signs"),
        }

        match score {
            Ok(score) => self.score = Some(score),
            Err(err) => self.ctx.notify_error(&err, "Failed to load health score"),
        }

        debug!("Loaded {} vital sign readings", self.state.items().len());
    }

    /// Records a reading. The server does not echo it back, so the history
    /// and score are refetched; a failed refetch only logs.
    pub async fn submit(&mut self) -> bool {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please enter at least one vital sign");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.record_vitals(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(message) => {
                self.ctx.notify_success(message.unwrap_or_else(|| "Vital signs recorded".to_string()));
                self.form = VitalsForm::default();
                self.state.switch_tab(VitalsTab::History);
                self.refresh_quietly().await;
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to record vital signs");
                false
            }
        }
    }

    async fn refresh_quietly(&mut self) {
        let token = self.ctx.token();
        let (vitals, score) = join!(
            self.service.get_vitals(self.days, token),
            self.service.get_health_score(token),
        );

        match vitals {
            Ok(vitals) => self.state.replace_items(vitals),
            Err(err) => warn!("Vital signs refresh failed: {}", err),
        }
        match score {
            Ok(score) => self.score = Some(score),
            Err(err) => warn!("Health score refresh failed: {}", err),
        }
    }

    pub fn switch_tab(&mut self, tab: VitalsTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> VitalsTab {
        self.state.active_tab()
    }

    pub fn vitals(&self) -> &[VitalSigns] {
        self.state.items()
    }

    pub fn score(&self) -> Option<&HealthScore> {
        self.score.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
