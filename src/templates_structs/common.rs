use askama::Template;

use super::PageContext;

#[derive(Template)]
#[template(path = "signin.html")]
pub struct SigninTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub app_name: String,
    /// Present when someone is signed in; switches the hero call-to-action.
    pub full_name: Option<String>,
    pub dashboard_path: Option<&'static str>,
}

/// Shown in place of a dashboard when the backend call fails.
#[derive(Template)]
#[template(path = "dashboard_error.html")]
pub struct DashboardErrorTemplate {
    pub ctx: PageContext,
    pub message: String,
}
