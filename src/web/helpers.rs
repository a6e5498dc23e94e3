use actix_web::{HttpRequest, HttpResponse};
use askama::Template;

use crate::listing::escape_html;
use crate::models::{Session, StatusFilter};

use super::session::current_session;

pub fn is_htmx(req: &HttpRequest) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn require_session(req: &HttpRequest) -> Result<Session, HttpResponse> {
    match current_session(req) {
        Some(session) => Ok(session),
        None => {
            if is_htmx(req) {
                Err(HttpResponse::Unauthorized()
                    .insert_header(("HX-Redirect", "/login"))
                    .finish())
            } else {
                Err(HttpResponse::SeeOther()
                    .insert_header(("Location", "/login"))
                    .finish())
            }
        }
    }
}

pub fn render<T: Template>(t: T) -> HttpResponse {
    match t.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => HttpResponse::InternalServerError()
            .content_type("text/plain; charset=utf-8")
            .body(format!("Template error: {e}")),
    }
}

/// Unknown filter values fall back to showing everything.
pub fn status_filter(query: Option<&str>) -> StatusFilter {
    query.and_then(|s| s.parse().ok()).unwrap_or_default()
}

pub fn view_mode(query: Option<&str>) -> String {
    match query {
        Some("list") => "list".to_string(),
        _ => "grid".to_string(),
    }
}

pub fn iframe_srcdoc(html: &str) -> String {
    // `srcdoc` is an attribute; escape enough to keep it valid.
    // Browsers will decode entities inside attributes.
    format!(
        r#"<iframe class="preview-iframe" sandbox="allow-same-origin" referrerpolicy="no-referrer" srcdoc="{}"></iframe>"#,
        escape_html(html)
    )
}
