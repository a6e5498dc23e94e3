use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use crate::cards::CardOp;
use crate::drafts::{first_value, parse_pairs, NewsDraft};
use crate::listing::{matches_search, matches_status, news_card, ResourceKind};
use crate::web::forms::ListQuery;
use crate::web::helpers::{render, require_session, status_filter, view_mode};
use crate::web::session::{cached_counts, count_cookie_for, NEWS_COUNT_COOKIE};
use crate::web::state::AppState;
use crate::web::templates::{
    FormPageTemplate, NewsDetailTemplate, NewsFormFields, ResourceListTemplate,
};
use crate::web::views::news_view;

use super::editor::editor_fragment;

const CONTENT_PLACEHOLDER: &str = "Enter the main content for this news article";

fn form_fields(record_id: Option<i64>, draft: NewsDraft, error: Option<String>) -> NewsFormFields {
    NewsFormFields {
        action: match record_id {
            Some(id) => format!("/news/{id}/edit"),
            None => "/news/new".to_string(),
        },
        is_new: record_id.is_none(),
        record_id,
        editor_html: editor_fragment(&draft.content, CONTENT_PLACEHOLDER),
        draft,
        error,
    }
}

fn form_page(
    user_name: String,
    counts: crate::web::session::SidebarCounts,
    fields: NewsFormFields,
) -> HttpResponse {
    let form_html = match askama::Template::render(&fields) {
        Ok(html) => html,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body(format!("Template error: {e}"))
        }
    };
    render(FormPageTemplate {
        user_name,
        counts,
        active: "news",
        form_html,
    })
}

#[get("/news")]
pub async fn news_list(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let q = query.q.clone().unwrap_or_default();
    let filter = status_filter(query.filter.as_deref());
    let view = view_mode(query.view.as_deref());
    let mut counts = cached_counts(&req);

    let mut refreshed = None;
    let records = match state.gateway.list_news().await {
        Ok(records) => {
            counts.news = records.len();
            refreshed = Some(count_cookie_for(NEWS_COUNT_COOKIE, records.len()));
            records
        }
        Err(e) => {
            log::error!("Failed to list news: {e}");
            Vec::new()
        }
    };

    let cards = records
        .iter()
        .filter(|record| matches_status(filter, record.attributes.published_at))
        .filter(|record| {
            matches_search(
                &q,
                &record.attributes.title,
                &record.attributes.short_description,
            )
        })
        .map(|record| news_card(record, &state.config.gateway_url))
        .collect();

    let mut response = render(ResourceListTemplate {
        user_name: session.user.display_name(),
        counts,
        active: "news",
        kind: ResourceKind::News,
        cards,
        query: q,
        filter,
        view,
    });
    if let Some(cookie) = refreshed {
        response.add_cookie(&cookie).ok();
    }
    response
}

#[get("/news/new")]
pub async fn news_new(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    form_page(
        session.user.display_name(),
        cached_counts(&req),
        form_fields(None, NewsDraft::new(), None),
    )
}

#[post("/news/new")]
pub async fn news_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: String,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let pairs = parse_pairs(&body);
    let mut draft = NewsDraft::from_pairs(&pairs);
    // A trail row the editor never touched gets the article's name.
    draft.autofill_trailing_breadcrumb();
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.create_news_article(&payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/news"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(None, draft, Some(e.user_message())),
        ),
    }
}

#[get("/news/{id}")]
pub async fn news_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let item = match state.gateway.get_news_article(id).await {
        Ok(record) => Some(news_view(&record, &state.config.gateway_url)),
        Err(e) => {
            if !e.is_not_found() {
                log::error!("Failed to load news article {id}: {e}");
            }
            None
        }
    };

    render(NewsDetailTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "news",
        item,
    })
}

#[get("/news/{id}/edit")]
pub async fn news_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let fields = match state.gateway.get_news_article(id).await {
        Ok(record) => form_fields(Some(id), NewsDraft::from_record(&record.attributes), None),
        Err(e) => {
            log::error!("Failed to load news article {id}: {e}");
            form_fields(
                Some(id),
                NewsDraft::new(),
                Some("Failed to load news article data.".to_string()),
            )
        }
    };

    form_page(session.user.display_name(), cached_counts(&req), fields)
}

#[post("/news/{id}/edit")]
pub async fn news_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: String,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let pairs = parse_pairs(&body);
    let draft = NewsDraft::from_pairs(&pairs);
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.update_news_article(id, &payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/news"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(Some(id), draft, Some(e.user_message())),
        ),
    }
}

#[post("/news/form/cards")]
pub async fn news_form_cards(req: HttpRequest, body: String) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let pairs = parse_pairs(&body);
    let mut draft = NewsDraft::from_pairs(&pairs);

    let group = first_value(&pairs, "group").unwrap_or_default();
    let op: CardOp = match first_value(&pairs, "op").unwrap_or_default().parse() {
        Ok(op) => op,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };
    let index: usize = first_value(&pairs, "index")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);

    if !draft.apply_op(group, op, index) {
        return HttpResponse::BadRequest().body(format!("unknown card group: {group}"));
    }

    let record_id = first_value(&pairs, "record_id").and_then(|v| v.parse().ok());
    render(form_fields(record_id, draft, None))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(news_list)
        .service(news_new)
        .service(news_create)
        .service(news_form_cards)
        .service(news_detail)
        .service(news_edit)
        .service(news_update);
}
