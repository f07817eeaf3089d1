use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shared_models::{AppError, AppResult};
use shared_utils::form::require;

/// One question/answer pair as stored by the consult endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Consultation {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question: String,
    pub response: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatForm {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConsultRequest {
    pub question: String,
}

impl ChatForm {
    pub fn validate(&self) -> AppResult<ConsultRequest> {
        Ok(ConsultRequest {
            question: require(&self.question, "Question")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ConsultResponse {
    pub consultation: Option<Consultation>,
    pub response: Option<String>,
}

impl ConsultResponse {
    /// Older servers answer with a bare top-level `response`.
    pub fn into_consultation(self, question: &str) -> AppResult<Consultation> {
        if let Some(consultation) = self.consultation {
            return Ok(consultation);
        }

        match self.response {
            Some(response) => Ok(Consultation {
                id: String::new(),
                question: question.to_string(),
                response,
                timestamp: None,
            }),
            None => Err(AppError::Decode("consult response carried no answer".to_string())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub conversations: Vec<Consultation>,
}

// ==============================================================================
// LOCAL ASSISTANT
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into(), sent_at: Utc::now() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { sender: Sender::Assistant, text: text.into(), sent_at: Utc::now() }
    }
}
