use futures::join;
use tracing::debug;

use shared_utils::{SectionContext, SectionState};

use crate::models::{PeriodForm, PeriodLog, SymptomForm, SymptomLog, WomensHealthTab};
use crate::services::womens_health::WomensHealthService;

/// Period and symptom logging. Both histories are fetched together on mount.
pub struct WomensHealthController {
    ctx: SectionContext,
    service: WomensHealthService,
    state: SectionState<PeriodLog, WomensHealthTab>,
    symptoms: Vec<SymptomLog>,
    pub period_form: PeriodForm,
    pub symptom_form: SymptomForm,
}

impl WomensHealthController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = WomensHealthService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(WomensHealthTab::default()),
            symptoms: Vec::new(),
            period_form: PeriodForm::default(),
            symptom_form: SymptomForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Issues both GETs concurrently; each list is updated independently.
    pub async fn refresh(&mut self) {
        self.state.begin_request();
        let token = self.ctx.token();
        let (periods, symptoms) = join!(
            self.service.get_periods(token),
            self.service.get_symptoms(token),
        );
        self.state.end_request();

        match periods {
            Ok(periods) => self.state.replace_items(periods),
            Err(err) => self.ctx.notify_error(&err, "Failed to load period history"),
        }

        match symptoms {
            Ok(symptoms) => self.symptoms = symptoms,
            Err(err) => self.ctx.notify_error(&err, "Failed to load symptom history"),
        }

        debug!(
            "Loaded {} period logs and {} symptom logs",
            self.state.items().len(),
            self.symptoms.len()
        );
    }

    pub async fn submit_period(&mut self) -> bool {
        let request = match self.period_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in all required fields");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.log_period(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(period) => {
                self.ctx.notify_success("Period logged successfully");
                self.state.push_item(period);
                self.period_form = PeriodForm::default();
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to log period");
                false
            }
        }
    }

    pub async fn submit_symptom(&mut self) -> bool {
        let request = match self.symptom_form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in all required fields");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.log_symptom(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(symptom) => {
                self.ctx.notify_success("Symptom logged successfully");
                self.symptoms.push(symptom);
                self.symptom_form = SymptomForm::default();
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to log symptom");
                false
            }
        }
    }

    pub fn switch_tab(&mut self, tab: WomensHealthTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> WomensHealthTab {
        self.state.active_tab()
    }

    pub fn periods(&self) -> &[PeriodLog] {
        self.state.items()
    }

    pub fn symptoms(&self) -> &[SymptomLog] {
        &self.symptoms
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
