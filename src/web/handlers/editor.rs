use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

use crate::editor::{insert_image, render_markdown, EditorAction};
use crate::models::absolutize_media_url;
use crate::web::forms::{EditorActionForm, EditorContentForm, EditorImageForm};
use crate::web::helpers::{iframe_srcdoc, render, require_session};
use crate::web::state::AppState;
use crate::web::templates::{EditorPreviewTemplate, EditorTemplate};

const GENERIC_PLACEHOLDER: &str = "Enter content...";

fn placeholder_or_default(placeholder: &str) -> String {
    if placeholder.trim().is_empty() {
        GENERIC_PLACEHOLDER.to_string()
    } else {
        placeholder.to_string()
    }
}

/// Render the editor fragment for embedding in a form page.
pub fn editor_fragment(content: &str, placeholder: &str) -> String {
    let template = EditorTemplate {
        content: content.to_string(),
        cursor: None,
        placeholder: placeholder.to_string(),
        close_modal: false,
    };
    match askama::Template::render(&template) {
        Ok(html) => html,
        Err(e) => {
            log::error!("Failed to render editor fragment: {e}");
            String::new()
        }
    }
}

#[post("/editor/action")]
pub async fn editor_action(req: HttpRequest, form: web::Form<EditorActionForm>) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let action: EditorAction = match form.action.parse() {
        Ok(action) => action,
        Err(e) => return HttpResponse::BadRequest().body(e),
    };

    let edit = action.apply(&form.content, form.selection_start, form.selection_end);
    render(EditorTemplate {
        content: edit.text,
        cursor: Some(edit.cursor),
        placeholder: placeholder_or_default(&form.placeholder),
        close_modal: false,
    })
}

#[post("/editor/preview")]
pub async fn editor_preview(req: HttpRequest, form: web::Form<EditorContentForm>) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let preview_html = if form.content.trim().is_empty() {
        String::new()
    } else {
        iframe_srcdoc(&render_markdown(&form.content))
    };

    render(EditorPreviewTemplate {
        content: form.content.clone(),
        preview_html,
        placeholder: placeholder_or_default(&form.placeholder),
    })
}

#[post("/editor/edit")]
pub async fn editor_edit(req: HttpRequest, form: web::Form<EditorContentForm>) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    render(EditorTemplate {
        content: form.content.clone(),
        cursor: None,
        placeholder: placeholder_or_default(&form.placeholder),
        close_modal: false,
    })
}

/// Splice a picked media file into the draft as markdown. The response
/// also clears the picker modal.
#[post("/editor/image")]
pub async fn editor_image(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<EditorImageForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    match state.gateway.get_media_file(form.file_id).await {
        Ok(file) => {
            let alt = file
                .alternative_text
                .clone()
                .filter(|alt| !alt.trim().is_empty())
                .unwrap_or_else(|| file.name.clone());
            let url = absolutize_media_url(&state.config.gateway_url, &file.url);
            let edit = insert_image(&form.content, form.selection_start, &alt, &url);

            render(EditorTemplate {
                content: edit.text,
                cursor: Some(edit.cursor),
                placeholder: placeholder_or_default(&form.placeholder),
                close_modal: true,
            })
        }
        Err(e) => {
            log::error!("Failed to load media file {}: {e}", form.file_id);
            render(EditorTemplate {
                content: form.content.clone(),
                cursor: None,
                placeholder: placeholder_or_default(&form.placeholder),
                close_modal: true,
            })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(editor_action)
        .service(editor_preview)
        .service(editor_edit)
        .service(editor_image);
}
