use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::auth::session::{CurrentUser, set_flash, store_identity};
use crate::backend::{BackendClient, SigninOutcome};
use crate::config;
use crate::errors::{AppError, render};
use crate::templates_structs::SigninTemplate;

#[derive(Deserialize)]
pub struct SigninForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn signin_page(session: Session) -> Result<HttpResponse, AppError> {
    // Already signed in: straight to the role's dashboard
    if let Some(user) = CurrentUser::from_session(&session) {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", user.role.dashboard_path()))
            .finish());
    }

    let csrf_token = csrf::issue_token(&session);
    let tmpl = SigninTemplate {
        error: None,
        app_name: config::APP_NAME.to_string(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn signin_submit(
    session: Session,
    client: web::Data<BackendClient>,
    form: web::Form<SigninForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify_token(&session, &form.csrf_token)?;

    match client.sign_in(&form.email, &form.password).await {
        Ok(SigninOutcome::Accepted(identity)) => {
            let user = CurrentUser {
                user_id: identity.user_id,
                role: identity.role,
                full_name: identity.full_name,
            };
            store_identity(&session, &user);
            let flash = if user.full_name.is_empty() {
                "Welcome back!".to_string()
            } else {
                format!("Welcome back, {}!", user.full_name)
            };
            set_flash(&session, &flash);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", user.role.dashboard_path()))
                .finish())
        }
        Ok(SigninOutcome::Rejected(message)) => {
            let csrf_token = csrf::issue_token(&session);
            let tmpl = SigninTemplate {
                error: Some(message),
                app_name: config::APP_NAME.to_string(),
                csrf_token,
            };
            render(tmpl)
        }
        Err(AppError::FetchFailed(cause)) => {
            log::error!("Signin request failed: {cause}");
            let csrf_token = csrf::issue_token(&session);
            let tmpl = SigninTemplate {
                error: Some("Could not reach the sign-in service. Please try again.".to_string()),
                app_name: config::APP_NAME.to_string(),
                csrf_token,
            };
            render(tmpl)
        }
        Err(other) => Err(other),
    }
}

pub async fn signout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::verify_token(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/signin"))
        .finish())
}
