use shared_utils::form::require;
use shared_utils::{SectionContext, SectionState};

use crate::models::{Medication, MedicationForm, MedicationTab};
use crate::services::medication::MedicationService;

pub struct MedicationController {
    ctx: SectionContext,
    service: MedicationService,
    state: SectionState<Medication, MedicationTab>,
    pub form: MedicationForm,
}

impl MedicationController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = MedicationService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(MedicationTab::default()),
            form: MedicationForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    pub async fn refresh(&mut self) {
        self.state.begin_request();
        let result = self.service.get_active_medications(self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(medications) => self.state.replace_items(medications),
            Err(err) => self.ctx.notify_error(&err, "Failed to load medications"),
        }
    }

    pub async fn submit(&mut self) -> bool {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please fill in all required fields");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.add_medication(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(medication) => {
                self.ctx.notify_success(format!("{} added to your medications", medication.name));
                self.state.push_item(medication);
                self.form = MedicationForm::default();
                self.state.switch_tab(MedicationTab::View);
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to add medication");
                false
            }
        }
    }

    /// Logs a dose, then refetches so the list shows the server's count.
    pub async fn log_dose(&mut self, medication_id: &str) -> bool {
        let medication_id = match require(medication_id, "Medication") {
            Ok(id) => id,
            Err(err) => {
                self.ctx.notify_error(&err, "Please choose a medication");
                return false;
            }
        };

        self.state.begin_request();
        let result = self.service.log_dose(&medication_id, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(count) => {
                self.ctx.notify_success(format!("Dose logged ({} total)", count));
                self.refresh().await;
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to log dose");
                false
            }
        }
    }

    pub fn switch_tab(&mut self, tab: MedicationTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> MedicationTab {
        self.state.active_tab()
    }

    pub fn medications(&self) -> &[Medication] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
