use shared_utils::{SectionContext, SectionState};

use crate::models::{Appointment, AppointmentForm, AppointmentTab};
use crate::services::appointment::AppointmentService;

pub struct AppointmentController {
    ctx: SectionContext,
    service: AppointmentService,
    state: SectionState<Appointment, AppointmentTab>,
    pub form: AppointmentForm,
}

impl AppointmentController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = AppointmentService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(AppointmentTab::default()),
            form: AppointmentForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.state.begin_request();
        let result = self.service.get_upcoming_appointments(self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(appointments) => self.state.replace_items(appointments),
            Err(err) => self.ctx.notify_error(&err, "Failed to load appointments"),
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
        let result = self.service.schedule_appointment(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(appointment) => {
                self.ctx.notify_success("Appointment scheduled successfully");
                self.state.push_item(appointment);
                self.form = AppointmentForm::default();
                self.state.switch_tab(AppointmentTab::View);
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to schedule appointment");
                false
            }
        }
    }

    pub fn switch_tab(&mut self, tab: AppointmentTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> AppointmentTab {
        self.state.active_tab()
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
