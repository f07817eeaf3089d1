use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use shared_models::{AppError, AppResult};
use shared_utils::form::{optional, require};

pub const ALLOWED_EXTENSIONS: [&str; 8] = ["pdf", "jpg", "jpeg", "png", "bmp", "tiff", "docx", "doc"];
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportTab {
    #[default]
    Upload,
    View,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    BloodTest,
    XRay,
    Mri,
    CtScan,
    Ultrasound,
    Prescription,
    Vaccination,
    #[default]
    #[serde(other)]
    Other,
}

impl ReportType {
    pub const ALL: [ReportType; 8] = [
        ReportType::BloodTest,
        ReportType::XRay,
        ReportType::Mri,
        ReportType::CtScan,
        ReportType::Ultrasound,
        ReportType::Prescription,
        ReportType::Vaccination,
        ReportType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::BloodTest => "blood_test",
            ReportType::XRay => "x_ray",
            ReportType::Mri => "mri",
            ReportType::CtScan => "ct_scan",
            ReportType::Ultrasound => "ultrasound",
            ReportType::Prescription => "prescription",
            ReportType::Vaccination => "vaccination",
            ReportType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::BloodTest => "Blood Test",
            ReportType::XRay => "X-Ray",
            ReportType::Mri => "MRI",
            ReportType::CtScan => "CT Scan",
            ReportType::Ultrasound => "Ultrasound",
            ReportType::Prescription => "Prescription",
            ReportType::Vaccination => "Vaccination Record",
            ReportType::Other => "Other",
        }
    }
}

impl FromStr for ReportType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| AppError::validation(format!("Unknown report type: {}", s.trim())))
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MedicalReport {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub report_type: ReportType,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
    pub notes: Option<String>,
    pub uploaded_at: Option<String>,
}

/// Lower-cased text after the last `.`, if any.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Client-side gate applied when a file is picked, before anything is sent.
pub fn check_selection(file_name: &str, size: u64) -> AppResult<()> {
    let allowed = file_extension(file_name)
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false);

    if !allowed {
        return Err(AppError::validation(
            "File type not allowed. Allowed: PDF, JPG, JPEG, PNG, BMP, TIFF, DOCX, DOC",
        ));
    }

    if size > MAX_FILE_SIZE {
        return Err(AppError::validation("File size must be less than 10MB"));
    }

    Ok(())
}

/// A file that passed [`check_selection`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    file_name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> AppResult<Self> {
        let file_name = file_name.into();
        check_selection(&file_name, bytes.len() as u64)?;
        Ok(Self { file_name, bytes })
    }

    /// Checks name and on-disk size before reading the contents.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation("Please select a file"))?
            .to_string();

        let metadata = std::fs::metadata(path)
            .map_err(|e| AppError::validation(format!("Cannot read {}: {}", path.display(), e)))?;
        check_selection(&file_name, metadata.len())?;

        let bytes = std::fs::read(path)
            .map_err(|e| AppError::validation(format!("Cannot read {}: {}", path.display(), e)))?;
        Self::new(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        match file_extension(&self.file_name).as_deref() {
            Some("pdf") => "application/pdf",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("bmp") => "image/bmp",
            Some("tiff") => "image/tiff",
            Some("docx") => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Some("doc") => "application/msword",
            _ => "application/octet-stream",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportForm {
    pub name: String,
    pub report_type: String,
    pub notes: String,
    pub file: Option<SelectedFile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadReportRequest {
    pub name: String,
    pub report_type: ReportType,
    pub notes: Option<String>,
    pub file: SelectedFile,
}

impl ReportForm {
    pub fn validate(&self) -> AppResult<UploadReportRequest> {
        let name = require(&self.name, "Report name")?;
        let file = self.file.clone().ok_or_else(|| AppError::validation("Please select a file"))?;
        let report_type = match optional(&self.report_type) {
            Some(raw) => raw.parse()?,
            None => ReportType::Other,
        };

        Ok(UploadReportRequest {
            name,
            report_type,
            notes: optional(&self.notes),
            file,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ReportListResponse {
    #[serde(default)]
    pub reports: Vec<MedicalReport>,
}

#[derive(Debug, Deserialize)]
pub struct ReportUploadedResponse {
    pub report: MedicalReport,
}

#[derive(Debug, Deserialize)]
pub struct ReportDeletedResponse {
    pub message: Option<String>,
}
