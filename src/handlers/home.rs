use actix_session::Session;
use actix_web::HttpResponse;

use crate::auth::session::CurrentUser;
use crate::config;
use crate::errors::{AppError, render};
use crate::templates_structs::HomeTemplate;

/// Landing page. Also where role-mismatched dashboard requests end up.
pub async fn index(session: Session) -> Result<HttpResponse, AppError> {
    let user = CurrentUser::from_session(&session);
    let tmpl = HomeTemplate {
        app_name: config::APP_NAME.to_string(),
        full_name: user.as_ref().map(|u| u.full_name.clone()),
        dashboard_path: user.as_ref().map(|u| u.role.dashboard_path()),
    };
    render(tmpl)
}
