use actix_web::{get, web, HttpRequest, Responder};

use crate::web::helpers::{render, require_session};
use crate::web::session::cached_counts;
use crate::web::templates::PlaceholderTemplate;

// Sections the sidebar links to but the panel does not manage yet.

#[get("/articles")]
pub async fn articles(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    render(PlaceholderTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "articles",
        title: "Articles",
        description: "Manage your articles",
        action_label: "Add Article",
        empty_text: "No articles found.",
    })
}

#[get("/portfolios")]
pub async fn portfolios(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    render(PlaceholderTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "portfolios",
        title: "Portfolios",
        description: "Showcase your work",
        action_label: "Add Portfolio",
        empty_text: "No portfolios found.",
    })
}

#[get("/blogs")]
pub async fn blogs(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    render(PlaceholderTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "blogs",
        title: "Blogs",
        description: "Manage your blog posts",
        action_label: "Add Blog",
        empty_text: "No blog posts found.",
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(articles).service(portfolios).service(blogs);
}
