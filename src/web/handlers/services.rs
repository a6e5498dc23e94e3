use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use crate::cards::CardOp;
use crate::drafts::{first_value, parse_pairs, ServiceDraft};
use crate::listing::{matches_search, matches_status, service_card, ResourceKind};
use crate::web::forms::ListQuery;
use crate::web::helpers::{render, require_session, status_filter, view_mode};
use crate::web::session::{cached_counts, count_cookie_for, SERVICES_COUNT_COOKIE};
use crate::web::state::AppState;
use crate::web::templates::{
    FormPageTemplate, ResourceListTemplate, ServiceDetailTemplate, ServiceFormFields,
};
use crate::web::views::service_view;

fn form_fields(
    record_id: Option<i64>,
    draft: ServiceDraft,
    error: Option<String>,
) -> ServiceFormFields {
    ServiceFormFields {
        action: match record_id {
            Some(id) => format!("/services/{id}/edit"),
            None => "/services/new".to_string(),
        },
        is_new: record_id.is_none(),
        record_id,
        draft,
        error,
    }
}

fn form_page(
    user_name: String,
    counts: crate::web::session::SidebarCounts,
    fields: ServiceFormFields,
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
        active: "services",
        form_html,
    })
}

#[get("/services")]
pub async fn services_list(
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
    let records = match state.gateway.list_services().await {
        Ok(records) => {
            counts.services = records.len();
            refreshed = Some(count_cookie_for(SERVICES_COUNT_COOKIE, records.len()));
            records
        }
        Err(e) => {
            log::error!("Failed to list services: {e}");
            Vec::new()
        }
    };

    let cards = records
        .iter()
        .filter(|record| matches_status(filter, record.attributes.published_at))
        .filter(|record| {
            matches_search(&q, &record.attributes.title, &record.attributes.description)
        })
        .map(|record| service_card(record, &state.config.gateway_url))
        .collect();

    let mut response = render(ResourceListTemplate {
        user_name: session.user.display_name(),
        counts,
        active: "services",
        kind: ResourceKind::Services,
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

#[get("/services/new")]
pub async fn service_new(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    form_page(
        session.user.display_name(),
        cached_counts(&req),
        form_fields(None, ServiceDraft::default(), None),
    )
}

#[post("/services/new")]
pub async fn service_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: String,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let pairs = parse_pairs(&body);
    let draft = ServiceDraft::from_pairs(&pairs);
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.create_service(&payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/services"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(None, draft, Some(e.user_message())),
        ),
    }
}

#[get("/services/{id}")]
pub async fn service_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let item = match state.gateway.get_service(id).await {
        Ok(record) => Some(service_view(&record, &state.config.gateway_url)),
        Err(e) => {
            if !e.is_not_found() {
                log::error!("Failed to load service {id}: {e}");
            }
            None
        }
    };

    render(ServiceDetailTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "services",
        item,
    })
}

#[get("/services/{id}/edit")]
pub async fn service_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let fields = match state.gateway.get_service(id).await {
        Ok(record) => form_fields(Some(id), ServiceDraft::from_record(&record.attributes), None),
        Err(e) => {
            log::error!("Failed to load service {id}: {e}");
            form_fields(
                Some(id),
                ServiceDraft::default(),
                Some("Failed to load service data.".to_string()),
            )
        }
    };

    form_page(session.user.display_name(), cached_counts(&req), fields)
}

#[post("/services/{id}/edit")]
pub async fn service_update(
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
    let draft = ServiceDraft::from_pairs(&pairs);
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.update_service(id, &payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/services"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(Some(id), draft, Some(e.user_message())),
        ),
    }
}

/// Card-row operations posted from the form over htmx; the whole form
/// swaps back with the rows rearranged and everything else intact.
#[post("/services/form/cards")]
pub async fn service_form_cards(req: HttpRequest, body: String) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let pairs = parse_pairs(&body);
    let mut draft = ServiceDraft::from_pairs(&pairs);

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
    cfg.service(services_list)
        .service(service_new)
        .service(service_create)
        .service(service_form_cards)
        .service(service_detail)
        .service(service_edit)
        .service(service_update);
}
