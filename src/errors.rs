use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

use crate::auth::session::Role;

#[derive(Debug)]
pub enum AppError {
    /// No signed-in identity in the session cookie.
    AuthMissing,
    /// Signed-in user holds a different role than the view requires.
    RoleMismatch { expected: Role, actual: Role },
    /// Backend unreachable, answered a failure status, or said success=false.
    FetchFailed(String),
    /// Backend said success but the summary payload was missing or invalid.
    MalformedSummary(String),
    /// Form posted without a valid anti-forgery token.
    Csrf,
    Template(askama::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthMissing => write!(f, "No signed-in user in session"),
            AppError::RoleMismatch { expected, actual } => {
                write!(f, "Role mismatch: {actual} account on the {expected} dashboard")
            }
            AppError::FetchFailed(msg) => write!(f, "Dashboard fetch failed: {msg}"),
            AppError::MalformedSummary(msg) => write!(f, "Malformed summary payload: {msg}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthMissing | AppError::RoleMismatch { .. } => StatusCode::SEE_OTHER,
            AppError::Csrf => StatusCode::FORBIDDEN,
            AppError::FetchFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedSummary(_) | AppError::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::AuthMissing => HttpResponse::SeeOther()
                .insert_header(("Location", "/signin"))
                .finish(),
            AppError::RoleMismatch { .. } => {
                log::warn!("{self}");
                HttpResponse::SeeOther()
                    .insert_header(("Location", "/"))
                    .finish()
            }
            AppError::Csrf => HttpResponse::Forbidden().body("Invalid or missing CSRF token"),
            // Dashboard handlers render these as a full page; this is the
            // bare fallback for anything that escapes them.
            AppError::FetchFailed(_) => {
                log::error!("{self}");
                HttpResponse::BadGateway().body("Upstream service unavailable")
            }
            AppError::MalformedSummary(_) | AppError::Template(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    render_with_status(tmpl, StatusCode::OK)
}

/// Render an Askama template with an explicit status, for error states.
pub fn render_with_status<T: Template>(
    tmpl: T,
    status: StatusCode,
) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}
