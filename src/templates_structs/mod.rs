// Template context structures for Askama templates, organized by page family.
// All types are re-exported: `use tutorboard::templates_structs::*`

use actix_session::Session;

use crate::auth::csrf;
use crate::auth::session::{CurrentUser, Role, take_flash};
use crate::config;

/// Common context shared by all signed-in pages.
/// Templates access these as `ctx.full_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub full_name: String,
    pub avatar_initial: String,
    pub role: Role,
    pub flash: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session, user: &CurrentUser) -> Self {
        let flash = take_flash(session);
        let csrf_token = csrf::issue_token(session);
        let avatar_initial = user
            .full_name
            .chars()
            .next()
            .unwrap_or('?')
            .to_uppercase()
            .to_string();
        Self {
            full_name: user.full_name.clone(),
            avatar_initial,
            role: user.role,
            flash,
            app_name: config::APP_NAME.to_string(),
            csrf_token,
        }
    }
}

mod common;
mod dashboard;

// Re-export all types for seamless imports
pub use self::common::{DashboardErrorTemplate, HomeTemplate, SigninTemplate};
pub use self::dashboard::{
    PeakTimeRow, PieSlice, PieView, RecommendationRow, StudentDashboardTemplate, SubjectRow,
    TrendBar, TrendChart, TutorDashboardTemplate,
};
