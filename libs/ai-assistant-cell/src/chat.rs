use shared_utils::{SectionContext, SectionState};

use crate::models::{ChatForm, Consultation};
use crate::services::consult::ConsultService;

/// Single-view section, so the tab slot is unit.
pub struct ChatController {
    ctx: SectionContext,
    service: ConsultService,
    state: SectionState<Consultation, ()>,
    pub form: ChatForm,
}

impl ChatController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = ConsultService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(()),
            form: ChatForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.state.begin_request();
        let result = self.service.get_history(self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(history) => self.state.replace_items(history),
            Err(err) => self.ctx.notify_error(&err, "Failed to load consultation history"),
        }
    }

    /// Sends the drafted question; returns the answer text on success.
    pub async fn ask(&mut self) -> Option<String> {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(err) => {
                self.ctx.notify_error(&err, "Please enter a question");
                return None;
            }
        };

        self.state.begin_request();
        let result = self.service.consult(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(consultation) => {
                let answer = consultation.response.clone();
                self.state.push_item(consultation);
                self.form = ChatForm::default();
                Some(answer)
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to get a response. Please try again.");
                None
            }
        }
    }

    pub fn history(&self) -> &[Consultation] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}
