use actix_session::Session;
use actix_web::{HttpResponse, http::StatusCode, web};

use crate::auth::session::{CurrentUser, Role};
use crate::backend::BackendClient;
use crate::config::AppConfig;
use crate::errors::{AppError, render, render_with_status};
use crate::templates_structs::{
    DashboardErrorTemplate, PageContext, StudentDashboardTemplate, TutorDashboardTemplate,
};

pub async fn student(
    session: Session,
    user: CurrentUser,
    client: web::Data<BackendClient>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    user.require_role(Role::Student)?;
    let ctx = PageContext::build(&session, &user);

    match client.fetch_student_summary(user.user_id).await {
        Ok(summary) => render(StudentDashboardTemplate::build(
            ctx,
            &summary,
            config.trend_chart,
        )),
        Err(err) => failed_dashboard(ctx, err),
    }
}

pub async fn tutor(
    session: Session,
    user: CurrentUser,
    client: web::Data<BackendClient>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, AppError> {
    user.require_role(Role::Tutor)?;
    let ctx = PageContext::build(&session, &user);

    match client.fetch_tutor_summary(user.user_id).await {
        Ok(summary) => render(TutorDashboardTemplate::build(
            ctx,
            &summary,
            config.trend_chart,
            &config.currency_code,
        )),
        Err(err) => failed_dashboard(ctx, err),
    }
}

/// Render the in-page failure state for backend errors. Anything else
/// propagates to the `ResponseError` fallback.
fn failed_dashboard(ctx: PageContext, err: AppError) -> Result<HttpResponse, AppError> {
    let (status, message) = match err {
        AppError::FetchFailed(cause) => {
            log::error!("Dashboard fetch failed: {cause}");
            (StatusCode::BAD_GATEWAY, cause)
        }
        AppError::MalformedSummary(cause) => {
            log::error!("Dashboard summary malformed: {cause}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load dashboard data".to_string(),
            )
        }
        other => return Err(other),
    };
    render_with_status(DashboardErrorTemplate { ctx, message }, status)
}
