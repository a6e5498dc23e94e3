use actix_web::cookie::Cookie;
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use chrono::{DateTime, Utc};

use crate::listing::{case_study_card, news_card, service_card, ResourceCard};
use crate::models::Record;
use crate::web::helpers::{render, require_session};
use crate::web::session::{
    cached_counts, count_cookie_for, CASE_STUDIES_COUNT_COOKIE, NEWS_COUNT_COOKIE,
    SERVICES_COUNT_COOKIE,
};
use crate::web::state::AppState;
use crate::web::templates::OverviewTemplate;

#[get("/")]
pub async fn root_redirect() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/overview"))
        .finish()
}

/// Three most recent entries, newest first. Drafts sort by creation
/// date so they do not sink below older published records.
fn recent<A>(
    records: &[Record<A>],
    sort_key: impl Fn(&A) -> Option<DateTime<Utc>>,
    card: impl Fn(&Record<A>) -> ResourceCard,
) -> Vec<ResourceCard> {
    let mut ordered: Vec<(&Record<A>, Option<DateTime<Utc>>)> = records
        .iter()
        .map(|record| (record, sort_key(&record.attributes)))
        .collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered.into_iter().take(3).map(|(record, _)| card(record)).collect()
}

#[get("/overview")]
pub async fn overview_page(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let base = state.config.gateway_url.clone();
    let mut counts = cached_counts(&req);
    let mut refreshed: Vec<Cookie<'static>> = Vec::new();

    let recent_services = match state.gateway.list_services().await {
        Ok(records) => {
            counts.services = records.len();
            refreshed.push(count_cookie_for(SERVICES_COUNT_COOKIE, records.len()));
            recent(
                &records,
                |attrs| attrs.published_at.or(attrs.created_at),
                |record| service_card(record, &base),
            )
        }
        Err(e) => {
            log::error!("Failed to list services: {e}");
            Vec::new()
        }
    };

    let recent_case_studies = match state.gateway.list_case_studies().await {
        Ok(records) => {
            counts.case_studies = records.len();
            refreshed.push(count_cookie_for(CASE_STUDIES_COUNT_COOKIE, records.len()));
            recent(
                &records,
                |attrs| attrs.published_at.or(attrs.created_at),
                |record| case_study_card(record, &base),
            )
        }
        Err(e) => {
            log::error!("Failed to list case studies: {e}");
            Vec::new()
        }
    };

    let recent_news = match state.gateway.list_news().await {
        Ok(records) => {
            counts.news = records.len();
            refreshed.push(count_cookie_for(NEWS_COUNT_COOKIE, records.len()));
            recent(
                &records,
                |attrs| attrs.published_at.or(attrs.created_at),
                |record| news_card(record, &base),
            )
        }
        Err(e) => {
            log::error!("Failed to list news: {e}");
            Vec::new()
        }
    };

    let mut response = render(OverviewTemplate {
        user_name: session.user.display_name(),
        counts,
        active: "overview",
        recent_services,
        recent_case_studies,
        recent_news,
    });
    for cookie in refreshed {
        response.add_cookie(&cookie).ok();
    }
    response
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root_redirect).service(overview_page);
}
