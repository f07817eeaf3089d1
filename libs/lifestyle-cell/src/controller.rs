use tracing::warn;

use shared_utils::{SectionContext, SectionState};

use crate::models::{ActivityForm, LifestyleEntry, LifestyleStats, LifestyleTab, MealForm};
use crate::services::lifestyle::LifestyleService;

/// Activity and meal logging plus the summary view.
///
/// Each log tab owns its own draft, so typing a meal and then switching to
/// the activity tab loses nothing.
pub struct LifestyleController {
    ctx: SectionContext,
    service: LifestyleService,
    state: SectionState<LifestyleEntry, LifestyleTab>,
    stats: LifestyleStats,
    pub activity_form: ActivityForm,
    pub meal_form: MealForm,
}

impl LifestyleController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = LifestyleService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(LifestyleTab::default()),
            stats: LifestyleStats::default(),
            activity_form: ActivityForm::default(),
            meal_form: MealForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.begin_request();
        let result = self.service.get_stats(self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(mut stats) => {
                self.state.replace_items(std::mem::take(&mut stats.entries));
                self.stats = stats;
            }
            Err(err) => self.ctx.notify_error(&err, "Failed to load lifestyle stats"),
        }
    }

    pub async fn submit_activity(&mut self) -> bool {
        let request = match self.activity_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in all required fields");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.log_activity(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(activity) => {
                self.ctx.notify_success("Activity logged successfully");
                self.state.push_item(LifestyleEntry::Activity(activity));
                self.activity_form = ActivityForm::default();
                self.refresh_summary().await;
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to log activity");
                false
            }
        }
    }

    pub async fn submit_meal(&mut self) -> bool {
        let request = match self.meal_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in all required fields");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.log_meal(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(meal) => {
                self.ctx.notify_success("Meal logged successfully");
                self.state.push_item(LifestyleEntry::Meal(meal));
                self.meal_form = MealForm::default();
                self.refresh_summary().await;
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to log meal");
                false
            }
        }
    }

    // Totals are computed server-side; the locally appended entry stays
    // visible even if this refetch fails.
    async fn refresh_summary(&mut self) {
        match self.service.get_stats(self.ctx.token()).await {
            Ok(mut stats) => {
                self.state.replace_items(std::mem::take(&mut stats.entries));
                self.stats = stats;
            }
            Err(err) => warn!("Lifestyle summary refresh failed: {}", err),
        }
    }

    pub fn switch_tab(&mut self, tab: LifestyleTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> LifestyleTab {
        self.state.active_tab()
    }

    pub fn entries(&self) -> &[LifestyleEntry] {
        self.state.items()
    }

    pub fn stats(&self) -> &LifestyleStats {
        &self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
