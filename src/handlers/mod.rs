use actix_web::web;

pub mod auth_handlers;
pub mod dashboard;
pub mod home;

/// Route table, shared between `main` and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/signin", web::get().to(auth_handlers::signin_page))
        .route("/signin", web::post().to(auth_handlers::signin_submit))
        .route("/signout", web::post().to(auth_handlers::signout))
        .route("/dashboard/student", web::get().to(dashboard::student))
        .route("/dashboard/tutor", web::get().to(dashboard::tutor));
}
