use actix_session::{Session, SessionExt};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::{Ready, ready};

use crate::errors::AppError;

/// Account role carried in the session and checked per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Tutor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Tutor => "tutor",
        }
    }

    /// The dashboard a signed-in user of this role lands on.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Student => "/dashboard/student",
            Role::Tutor => "/dashboard/tutor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the signed-in user.
///
/// Handlers receive this as an explicit argument via `FromRequest`; nothing
/// reads ambient storage mid-render, so views can be exercised with any
/// injected identity.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub role: Role,
    pub full_name: String,
}

impl CurrentUser {
    /// Guard a view against the wrong account type.
    pub fn require_role(&self, expected: Role) -> Result<(), AppError> {
        if self.role == expected {
            Ok(())
        } else {
            Err(AppError::RoleMismatch {
                expected,
                actual: self.role,
            })
        }
    }

    /// Read the identity out of the session, if a complete one is stored.
    pub fn from_session(session: &Session) -> Option<Self> {
        let user_id = session.get::<i64>("user_id").unwrap_or(None)?;
        let role = session.get::<Role>("role").unwrap_or(None)?;
        let full_name = session
            .get::<String>("full_name")
            .unwrap_or(None)
            .unwrap_or_default();
        Some(CurrentUser {
            user_id,
            role,
            full_name,
        })
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let session = req.get_session();
        ready(CurrentUser::from_session(&session).ok_or(AppError::AuthMissing))
    }
}

/// Store a freshly signed-in identity.
pub fn store_identity(session: &Session, user: &CurrentUser) {
    let _ = session.insert("user_id", user.user_id);
    let _ = session.insert("role", user.role);
    let _ = session.insert("full_name", &user.full_name);
}

/// One-shot notification banner: read it and clear it.
pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}

pub fn set_flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}
