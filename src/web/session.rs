//! Cookie-backed session and the sidebar count cache.
//!
//! The gateway token and the signed-in user profile live in two
//! cookies written at login. Either cookie missing or corrupt reads
//! as "no session".

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::models::{Session, User};

pub const TOKEN_COOKIE: &str = "auth_token";
pub const USER_COOKIE: &str = "auth_user";

pub const SERVICES_COUNT_COOKIE: &str = "sidebar_services_count";
pub const CASE_STUDIES_COUNT_COOKIE: &str = "sidebar_case_studies_count";
pub const NEWS_COUNT_COOKIE: &str = "sidebar_news_count";

pub fn current_session(req: &HttpRequest) -> Option<Session> {
    let token = req
        .cookie(TOKEN_COOKIE)
        .map(|c| c.value().trim().to_string())
        .filter(|s| !s.is_empty())?;

    let user = req
        .cookie(USER_COOKIE)
        .and_then(|c| decode_user(c.value()))?;

    Some(Session { token, user })
}

fn decode_user(encoded: &str) -> Option<User> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_vec(user)
        .ok()
        .map(|bytes| URL_SAFE_NO_PAD.encode(bytes))
}

fn build_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .max_age(actix_web::cookie::time::Duration::days(7))
        .finish()
}

pub fn session_cookies(session: &Session) -> Vec<Cookie<'static>> {
    let mut cookies = vec![build_cookie(TOKEN_COOKIE, session.token.clone())];
    if let Some(encoded) = encode_user(&session.user) {
        cookies.push(build_cookie(USER_COOKIE, encoded));
    }
    cookies
}

pub fn removal_cookies() -> Vec<Cookie<'static>> {
    [TOKEN_COOKIE, USER_COOKIE]
        .iter()
        .map(|name| {
            let mut cookie = Cookie::build(*name, "")
                .path("/")
                .http_only(true)
                .secure(true)
                .same_site(SameSite::Lax)
                .finish();
            cookie.make_removal();
            cookie
        })
        .collect()
}

/// Sidebar badge numbers, read from the count cookies. Missing or
/// garbled cookies show as zero until the next successful fetch.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct SidebarCounts {
    pub services: usize,
    pub case_studies: usize,
    pub news: usize,
}

pub fn cached_counts(req: &HttpRequest) -> SidebarCounts {
    SidebarCounts {
        services: count_cookie(req, SERVICES_COUNT_COOKIE),
        case_studies: count_cookie(req, CASE_STUDIES_COUNT_COOKIE),
        news: count_cookie(req, NEWS_COUNT_COOKIE),
    }
}

fn count_cookie(req: &HttpRequest, name: &str) -> usize {
    req.cookie(name)
        .and_then(|c| c.value().trim().parse().ok())
        .unwrap_or(0)
}

pub fn count_cookie_for(name: &'static str, count: usize) -> Cookie<'static> {
    build_cookie(name, count.to_string())
}
