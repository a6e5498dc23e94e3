use actix_multipart::Multipart;
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt;

use crate::gateway::{MediaUpdate, UploadFile};
use crate::web::forms::{MediaDetailsForm, MediaQuery, PickerQuery, UrlUploadForm};
use crate::web::helpers::{is_htmx, render, require_session, view_mode};
use crate::web::session::cached_counts;
use crate::web::state::AppState;
use crate::web::templates::{
    MediaDetailTemplate, MediaLibraryTemplate, MediaPickerTemplate, MediaUploadTemplate,
};
use crate::web::views::media_view;

#[get("/media")]
pub async fn media_library(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<MediaQuery>,
) -> impl Responder {
    let session = match require_session(&req) {
        Ok(session) => session,
        Err(resp) => return resp,
    };

    let q = query.q.clone().unwrap_or_default();
    let view = view_mode(query.view.as_deref());

    let files = match state.gateway.list_media().await {
        Ok(files) => files,
        Err(e) => {
            log::error!("Failed to list media: {e}");
            Vec::new()
        }
    };

    let files = files
        .iter()
        .filter(|file| q.is_empty() || file.matches_search(&q))
        .map(|file| media_view(file, &state.config.gateway_url))
        .collect();

    render(MediaLibraryTemplate {
        user_name: session.user.display_name(),
        counts: cached_counts(&req),
        active: "media",
        files,
        query: q,
        view,
    })
}

/// Media picker fragment for forms and the editor. Only images are
/// offered; `target` names the form input the chosen id lands in.
#[get("/media/picker")]
pub async fn media_picker(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PickerQuery>,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let q = query.q.clone().unwrap_or_default();
    let files = match state.gateway.list_media().await {
        Ok(files) => files,
        Err(e) => {
            log::error!("Failed to list media: {e}");
            Vec::new()
        }
    };

    let files = files
        .iter()
        .filter(|file| file.is_image())
        .filter(|file| q.is_empty() || file.matches_search(&q))
        .map(|file| media_view(file, &state.config.gateway_url))
        .collect();

    render(MediaPickerTemplate {
        files,
        query: q,
        target: query.target.clone().unwrap_or_default(),
        editor: query.editor.as_deref() == Some("1"),
    })
}

#[get("/media/upload")]
pub async fn media_upload_form(req: HttpRequest) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    render(MediaUploadTemplate { error: None })
}

async fn read_uploads(mut payload: Multipart) -> Result<Vec<UploadFile>, String> {
    let mut files = Vec::new();

    while let Some(mut field) = payload.try_next().await.map_err(|e| e.to_string())? {
        if field.name() != "files" {
            continue;
        }

        let file_name = field
            .content_disposition()
            .get_filename()
            .map(|name| name.to_string())
            .unwrap_or_else(|| "upload".to_string());
        let mime = field
            .content_type()
            .map(|mime| mime.to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(|e| e.to_string())? {
            bytes.extend_from_slice(&chunk);
        }

        // Browsers post an empty part for an empty file input.
        if !bytes.is_empty() {
            files.push(UploadFile {
                file_name,
                mime,
                bytes,
            });
        }
    }

    Ok(files)
}

fn upload_done(req: &HttpRequest) -> HttpResponse {
    if is_htmx(req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", "/media"))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/media"))
            .finish()
    }
}

#[post("/media/upload")]
pub async fn media_upload(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let files = match read_uploads(payload).await {
        Ok(files) => files,
        Err(e) => {
            log::error!("Malformed upload request: {e}");
            return render(MediaUploadTemplate {
                error: Some("Upload failed. Please try again.".to_string()),
            });
        }
    };

    if files.is_empty() {
        return render(MediaUploadTemplate {
            error: Some("Select at least one file to upload.".to_string()),
        });
    }

    match state.gateway.upload_files(files).await {
        Ok(_) => upload_done(&req),
        Err(e) => render(MediaUploadTemplate {
            error: Some(e.user_message()),
        }),
    }
}

/// From-URL upload: the panel fetches the remote image itself and
/// re-uploads the bytes to the gateway.
#[post("/media/upload/url")]
pub async fn media_upload_url(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<UrlUploadForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let url = form.url.trim();
    if url.is_empty() {
        return render(MediaUploadTemplate {
            error: Some("Enter an image URL.".to_string()),
        });
    }

    let fetched = match state.gateway.fetch_url(url).await {
        Ok(file) => file,
        Err(e) => {
            log::warn!("Failed to fetch {url}: {e}");
            return render(MediaUploadTemplate {
                error: Some("Failed to fetch image from URL".to_string()),
            });
        }
    };

    match state.gateway.upload_files(vec![fetched]).await {
        Ok(_) => upload_done(&req),
        Err(_) => render(MediaUploadTemplate {
            error: Some("Failed to fetch image from URL".to_string()),
        }),
    }
}

#[get("/media/{id}/details")]
pub async fn media_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let id = path.into_inner();
    match state.gateway.get_media_file(id).await {
        Ok(file) => render(MediaDetailTemplate {
            file: media_view(&file, &state.config.gateway_url),
            error: None,
        }),
        Err(e) => {
            log::error!("Failed to load media file {id}: {e}");
            HttpResponse::NotFound().body("File not found")
        }
    }
}

#[post("/media/{id}/details")]
pub async fn media_detail_update(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<i64>,
    form: web::Form<MediaDetailsForm>,
) -> impl Responder {
    if let Err(resp) = require_session(&req) {
        return resp;
    }

    let id = path.into_inner();
    let update = MediaUpdate {
        name: form.name.trim().to_string(),
        alternative_text: form.alternative_text.clone().unwrap_or_default(),
        caption: form.caption.clone().unwrap_or_default(),
    };

    match state.gateway.update_media_file(id, &update).await {
        Ok(_) => {
            if is_htmx(&req) {
                HttpResponse::Ok()
                    .insert_header(("HX-Redirect", "/media"))
                    .finish()
            } else {
                HttpResponse::SeeOther()
                    .insert_header(("Location", "/media"))
                    .finish()
            }
        }
        Err(e) => {
            let message = e.user_message();
            match state.gateway.get_media_file(id).await {
                Ok(file) => render(MediaDetailTemplate {
                    file: media_view(&file, &state.config.gateway_url),
                    error: Some(message),
                }),
                Err(_) => HttpResponse::SeeOther()
                    .insert_header(("Location", "/media"))
                    .finish(),
            }
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(media_library)
        .service(media_picker)
        .service(media_upload_form)
        .service(media_upload)
        .service(media_upload_url)
        .service(media_detail)
        .service(media_detail_update);
}
