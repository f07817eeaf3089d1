use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    multipart::Form,
    Method, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_models::{AppError, AppResult};

/// Thin wrapper over `reqwest` that speaks the MedSage JSON envelope.
///
/// Every response body is `{ "success": bool, "error"?: string, ... }`. A
/// non-2xx status or `success: false` becomes [`AppError::Api`] carrying the
/// server's `error` text; otherwise the whole body is decoded into `T`.
#[derive(Clone)]
pub struct MedSageClient {
    client: Client,
    base_url: String,
}

impl MedSageClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn get_headers(&self, auth_token: Option<&str>) -> AppResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| AppError::validation("Session token contains invalid characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    pub async fn request<T>(&self, method: Method, path: &str,
                            auth_token: Option<&str>, body: Option<Value>)
                            -> AppResult<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making {} request to {}", method, url);

        let headers = self.get_headers(auth_token)?;

        let mut req = self.client.request(method, &url)
            .headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;
        Self::decode_envelope(response).await
    }

    /// Multipart POST, used for report uploads.
    pub async fn upload<T>(&self, path: &str, auth_token: &str, form: Form) -> AppResult<T>
    where T: DeserializeOwned {
        let url = format!("{}{}", self.base_url, path);
        debug!("Uploading multipart form to {}", url);

        let headers = self.get_headers(Some(auth_token))?;

        let response = self.client.post(&url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;

        Self::decode_envelope(response).await
    }

    async fn decode_envelope<T>(response: Response) -> AppResult<T>
    where T: DeserializeOwned {
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) if status.is_success() => {
                    return Err(AppError::Decode(format!("invalid JSON body: {}", e)));
                }
                // Error pages are often HTML; keep the status, drop the body
                Err(_) => Value::Null,
            }
        };

        if !status.is_success() {
            let message = error_message(&body);
            error!("API error ({}): {}", status, message.as_deref().unwrap_or(&text));
            return Err(AppError::Api { status: status.as_u16(), message });
        }

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            let message = error_message(&body);
            error!("API reported failure ({}): {:?}", status, message);
            return Err(AppError::Api { status: status.as_u16(), message });
        }

        Ok(serde_json::from_value(body)?)
    }

    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }
}

fn error_message(body: &Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}
