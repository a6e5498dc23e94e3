use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;

use crate::cards::CardOp;
use crate::drafts::{first_value, parse_pairs, CaseStudyDraft};
use crate::listing::{case_study_card, matches_search, matches_status, ResourceKind};
use crate::web::forms::ListQuery;
use crate::web::helpers::{render, require_session, status_filter, view_mode};
use crate::web::session::{cached_counts, count_cookie_for, CASE_STUDIES_COUNT_COOKIE};
use crate::web::state::AppState;
use crate::web::templates::{
    CaseStudyDetailTemplate, CaseStudyFormFields, FormPageTemplate, ResourceListTemplate,
};
use crate::web::views::case_study_view;

use super::editor::editor_fragment;

const CONTENT_PLACEHOLDER: &str = "Enter the main content for this case study";

fn form_fields(
    record_id: Option<i64>,
    draft: CaseStudyDraft,
    error: Option<String>,
) -> CaseStudyFormFields {
    CaseStudyFormFields {
        action: match record_id {
            Some(id) => format!("/case-studies/{id}/edit"),
            None => "/case-studies/new".to_string(),
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
    fields: CaseStudyFormFields,
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
        active: "case-studies",
        form_html,
    })
}

#[get("/case-studies")]
pub async fn case_studies_list(
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
    let records = match state.gateway.list_case_studies().await {
        Ok(records) => {
            counts.case_studies = records.len();
            refreshed = Some(count_cookie_for(CASE_STUDIES_COUNT_COOKIE, records.len()));
            records
        }
        Err(e) => {
            log::error!("Failed to list case studies: {e}");
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
        .map(|record| case_study_card(record, &state.config.gateway_url))
        .collect();

    let mut response = render(ResourceListTemplate {
        user_name: session.user.display_name(),
        counts,
        active: "case-studies",
        kind: ResourceKind::CaseStudies,
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

#[get("/case-studies/new")]
pub async fn case_study_new(req: HttpRequest) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    form_page(
        session.user.display_name(),
        cached_counts(&req),
        form_fields(None, CaseStudyDraft::new(), None),
    )
}

#[post("/case-studies/new")]
pub async fn case_study_create(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: String,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let pairs = parse_pairs(&body);
    let draft = CaseStudyDraft::from_pairs(&pairs);
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.create_case_study(&payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/case-studies"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(None, draft, Some(e.user_message())),
        ),
    }
}

#[get("/case-studies/{id}")]
pub async fn case_study_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let item = match state.gateway.get_case_study(id).await {
        Ok(record) => Some(case_study_view(&record, &state.config.gateway_url)),
        Err(e) => {
            if !e.is_not_found() {
                log::error!("Failed to load case study {id}: {e}");
            }
            None
        }
    };

    render(CaseStudyDetailTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "case-studies",
        item,
    })
}

#[get("/case-studies/{id}/edit")]
pub async fn case_study_edit(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let id = path.into_inner();
    let fields = match state.gateway.get_case_study(id).await {
        Ok(record) => form_fields(
            Some(id),
            CaseStudyDraft::from_record(&record.attributes),
            None,
        ),
        Err(e) => {
            log::error!("Failed to load case study {id}: {e}");
            form_fields(
                Some(id),
                CaseStudyDraft::new(),
                Some("Failed to load case study data.".to_string()),
            )
        }
    };

    form_page(session.user.display_name(), cached_counts(&req), fields)
}

#[post("/case-studies/{id}/edit")]
pub async fn case_study_update(
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
    let draft = CaseStudyDraft::from_pairs(&pairs);
    let publish = first_value(&pairs, "intent") == Some("publish");
    let payload = draft.to_payload(publish, Utc::now());

    match state.gateway.update_case_study(id, &payload).await {
        Ok(()) => HttpResponse::SeeOther()
            .insert_header(("Location", "/case-studies"))
            .finish(),
        Err(e) => form_page(
            session.user.display_name(),
            cached_counts(&req),
            form_fields(Some(id), draft, Some(e.user_message())),
        ),
    }
}

#[post("/case-studies/form/cards")]
pub async fn case_study_form_cards(req: HttpRequest, body: String) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let pairs = parse_pairs(&body);
    let mut draft = CaseStudyDraft::from_pairs(&pairs);

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
    cfg.service(case_studies_list)
        .service(case_study_new)
        .service(case_study_create)
        .service(case_study_form_cards)
        .service(case_study_detail)
        .service(case_study_edit)
        .service(case_study_update);
}
