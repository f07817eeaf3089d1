use std::fmt;
use std::str::FromStr;

use shared_models::AppError;

/// The pages reachable from the dashboard sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Medications,
    Appointments,
    Lifestyle,
    WomensHealth,
    Reports,
    Chat,
    Assistant,
    Profile,
    Vitals,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Medications,
        Section::Appointments,
        Section::Lifestyle,
        Section::WomensHealth,
        Section::Reports,
        Section::Chat,
        Section::Assistant,
        Section::Profile,
        Section::Vitals,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Medications => "Medications",
            Section::Appointments => "Appointments",
            Section::Lifestyle => "Lifestyle",
            Section::WomensHealth => "Women's Health",
            Section::Reports => "Medical Reports",
            Section::Chat => "AI Chat",
            Section::Assistant => "AI Doctor Assistant",
            Section::Profile => "Profile",
            Section::Vitals => "Vital Signs",
        }
    }

    /// Command-line slug.
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Medications => "medication",
            Section::Appointments => "appointment",
            Section::Lifestyle => "lifestyle",
            Section::WomensHealth => "womens-health",
            Section::Reports => "report",
            Section::Chat => "chat",
            Section::Assistant => "assistant",
            Section::Profile => "profile",
            Section::Vitals => "vitals",
        }
    }
}

impl FromStr for Section {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == wanted || section.label().to_lowercase() == wanted)
            .ok_or_else(|| AppError::validation(format!("Unknown section: {}", s.trim())))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
