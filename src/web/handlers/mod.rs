pub mod auth;
pub mod case_studies;
pub mod editor;
pub mod media;
pub mod news;
pub mod overview;
pub mod placeholders;
pub mod services;

use actix_web::web;

/// Register every route. `/services/new` and friends are registered
/// ahead of their `/{id}` siblings so the literal segment wins.
pub fn configure(cfg: &mut web::ServiceConfig) {
    auth::configure(cfg);
    overview::configure(cfg);
    services::configure(cfg);
    case_studies::configure(cfg);
    news::configure(cfg);
    media::configure(cfg);
    editor::configure(cfg);
    placeholders::configure(cfg);
}
