use std::env;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("MEDSAGE_API_URL")
                .map(|url| normalize_base_url(&url))
                .unwrap_or_else(|_| {
                    warn!("MEDSAGE_API_URL not set, using default");
                    DEFAULT_API_URL.to_string()
                }),
            session_file: env::var("MEDSAGE_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_session_file()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - API base URL is empty");
        }

        config
    }

    pub fn new(api_base_url: &str, session_file: impl Into<PathBuf>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url),
            session_file: session_file.into(),
        }
    }

    pub fn with_api_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = normalize_base_url(api_base_url);
        self
    }

    pub fn with_session_file(mut self, session_file: impl Into<PathBuf>) -> Self {
        self.session_file = session_file.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            session_file: default_session_file(),
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn default_session_file() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".medsage").join("session.json"),
        None => {
            warn!("Home directory not found, storing session in working directory");
            PathBuf::from(".medsage-session.json")
        }
    }
}
