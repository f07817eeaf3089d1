use std::path::Path;

use shared_models::AppResult;
use shared_utils::{SectionContext, SectionState};

use crate::models::{MedicalReport, ReportForm, ReportTab, SelectedFile};
use crate::services::report::ReportService;

pub struct ReportController {
    ctx: SectionContext,
    service: ReportService,
    state: SectionState<MedicalReport, ReportTab>,
    pub form: ReportForm,
}

impl ReportController {
    pub fn new(ctx: SectionContext) -> Self {
        let service = ReportService::new(ctx.config());
        Self {
            ctx,
            service,
            state: SectionState::new(ReportTab::default()),
            form: ReportForm::default(),
        }
    }

    pub async fn mount(&mut self) {
        self.state.begin_request();
        let result = self.service.list_reports(self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(reports) => self.state.replace_items(reports),
            Err(err) => self.ctx.notify_error(&err, "Failed to load reports"),
        }
    }

    pub fn select_file(&mut self, file_name: &str, bytes: Vec<u8>) -> bool {
        self.accept_selection(SelectedFile::new(file_name, bytes))
    }

    pub fn select_file_from_path(&mut self, path: &Path) -> bool {
        self.accept_selection(SelectedFile::from_path(path))
    }

    // A rejected pick also clears whatever was selected before.
    fn accept_selection(&mut self, selection: AppResult<SelectedFile>) -> bool {
        match selection {
            Ok(file) => {
                if self.form.name.trim().is_empty() {
                    self.form.name = default_report_name(file.file_name());
                }
                self.form.file = Some(file);
                true
            }
            Err(err) => {
                self.form.file = None;
                self.ctx.notify_error(&err, "Invalid file");
                false
            }
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
        let result = self.service.upload_report(&request, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(report) => {
                self.ctx.notify_success("Report uploaded successfully");
                self.state.push_item(report);
                self.form = ReportForm::default();
                self.state.switch_tab(ReportTab::View);
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to upload report");
                false
            }
        }
    }

    /// Removes the report locally once the server confirms the delete.
    pub async fn delete(&mut self, report_id: &str) -> bool {
        self.state.begin_request();
        let result = self.service.delete_report(report_id, self.ctx.token()).await;
        self.state.end_request();

        match result {
            Ok(()) => {
                self.state.remove_where(|r| r.id == report_id);
                self.ctx.notify_success("Report deleted");
                true
            }
            Err(err) => {
                self.ctx.notify_error(&err, "Failed to delete report");
                false
            }
        }
    }

    pub fn switch_tab(&mut self, tab: ReportTab) {
        self.state.switch_tab(tab);
    }

    pub fn active_tab(&self) -> ReportTab {
        self.state.active_tab()
    }

    pub fn reports(&self) -> &[MedicalReport] {
        self.state.items()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

fn default_report_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}
