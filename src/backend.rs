use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::auth::session::Role;
use crate::errors::AppError;
use crate::models::summary::DashboardSummary;

/// Response envelope every backend endpoint answers with. `data` and
/// `message` decode as `None` when absent; marking them `serde(default)`
/// would put a `Default` bound on `T`.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// HTTP client for the platform backend, the single source of dashboard
/// data and the verifier of credentials. One GET per dashboard load, one
/// POST per signin; nothing is cached or retried here.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http: reqwest::Client,
}

/// Credentials forwarded to the backend's signin endpoint.
#[derive(Debug, Serialize)]
struct SigninRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Identity block inside a successful signin envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninData {
    pub user_id: i64,
    pub role: Role,
    #[serde(default)]
    pub full_name: String,
}

/// Outcome of a signin attempt that reached the backend.
#[derive(Debug)]
pub enum SigninOutcome {
    Accepted(SigninData),
    /// Credentials rejected; carries the backend's message for the form.
    Rejected(String),
}

impl BackendClient {
    /// Client for the backend at `base_url` (trailing slash tolerated).
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_student_summary(
        &self,
        user_id: i64,
    ) -> Result<DashboardSummary, AppError> {
        self.fetch_summary(Role::Student, user_id).await
    }

    pub async fn fetch_tutor_summary(&self, user_id: i64) -> Result<DashboardSummary, AppError> {
        self.fetch_summary(Role::Tutor, user_id).await
    }

    /// `GET {base}/{role}/dashboard/{id}`, envelope decoded and validated.
    async fn fetch_summary(&self, role: Role, user_id: i64) -> Result<DashboardSummary, AppError> {
        let url = format!("{}/{}/dashboard/{}", self.base_url, role.as_str(), user_id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(describe_transport(&e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::FetchFailed(describe_transport(&e)))?;

        if !status.is_success() {
            // Error statuses still tend to carry an envelope with a message.
            let message = serde_json::from_str::<ApiEnvelope<DashboardSummary>>(&body)
                .ok()
                .and_then(|env| env.message)
                .unwrap_or_else(|| format!("backend answered HTTP {status}"));
            return Err(AppError::FetchFailed(message));
        }

        let envelope: ApiEnvelope<DashboardSummary> = serde_json::from_str(&body)
            .map_err(|e| AppError::MalformedSummary(e.to_string()))?;
        if !envelope.success {
            return Err(AppError::FetchFailed(envelope.message.unwrap_or_else(|| {
                "Failed to load dashboard data".to_string()
            })));
        }
        let summary = envelope.data.ok_or_else(|| {
            AppError::MalformedSummary("success envelope without data".to_string())
        })?;
        summary.validate()?;
        Ok(summary)
    }

    /// `POST {base}/auth/signin`. The backend owns credential verification;
    /// this side only relays its verdict.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SigninOutcome, AppError> {
        let url = format!("{}/auth/signin", self.base_url);
        let response = self
            .http
            .post(&url)
            .json(&SigninRequest { email, password })
            .send()
            .await
            .map_err(|e| AppError::FetchFailed(describe_transport(&e)))?;

        let status = response.status();
        let envelope: ApiEnvelope<SigninData> = response
            .json()
            .await
            .map_err(|e| AppError::FetchFailed(format!("undecodable signin response: {e}")))?;

        if envelope.success {
            match envelope.data {
                Some(data) => Ok(SigninOutcome::Accepted(data)),
                None => Err(AppError::FetchFailed(
                    "signin succeeded without identity data".to_string(),
                )),
            }
        } else {
            Ok(SigninOutcome::Rejected(envelope.message.unwrap_or_else(
                || {
                    if status.is_success() {
                        "Invalid email or password".to_string()
                    } else {
                        format!("backend answered HTTP {status}")
                    }
                },
            )))
        }
    }
}

/// Human-readable cause for transport failures.
fn describe_transport(e: &reqwest::Error) -> String {
    if e.is_connect() {
        "backend unreachable".to_string()
    } else if e.is_timeout() {
        "backend timed out".to_string()
    } else {
        e.to_string()
    }
}
