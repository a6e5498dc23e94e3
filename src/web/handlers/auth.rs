use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::web::forms::LoginForm;
use crate::web::helpers::{is_htmx, render};
use crate::web::session::{current_session, removal_cookies, session_cookies};
use crate::web::state::AppState;
use crate::web::templates::LoginTemplate;

#[get("/login")]
pub async fn login_form(req: HttpRequest) -> impl Responder {
    // Signed-in editors have no business on the login page.
    if current_session(&req).is_some() {
        return HttpResponse::SeeOther()
            .insert_header(("Location", "/overview"))
            .finish();
    }

    render(LoginTemplate { error: None })
}

#[post("/login")]
pub async fn login_submit(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let email = form.email.trim().to_string();
    let password = form.password.clone();

    if email.is_empty() || password.is_empty() {
        return render(LoginTemplate {
            error: Some("Email and password are required".to_string()),
        });
    }

    match state.gateway.login(&email, &password).await {
        Ok(session) => {
            let mut response = if is_htmx(&req) {
                HttpResponse::Ok()
                    .insert_header(("HX-Redirect", "/overview"))
                    .finish()
            } else {
                HttpResponse::SeeOther()
                    .insert_header(("Location", "/overview"))
                    .finish()
            };
            for cookie in session_cookies(&session) {
                response.add_cookie(&cookie).ok();
            }
            response
        }
        // The gateway's own wording goes straight to the form.
        Err(e) => render(LoginTemplate {
            error: Some(e.user_message()),
        }),
    }
}

#[post("/logout")]
pub async fn logout(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    if let Some(session) = current_session(&req) {
        if let Err(e) = state.gateway.logout(&session.token).await {
            log::warn!("Gateway logout failed: {e}");
        }
    }

    let mut response = if is_htmx(&req) {
        HttpResponse::Ok()
            .insert_header(("HX-Redirect", "/login"))
            .finish()
    } else {
        HttpResponse::SeeOther()
            .insert_header(("Location", "/login"))
            .finish()
    };
    for cookie in removal_cookies() {
        response.add_cookie(&cookie).ok();
    }
    response
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(login_form)
        .service(login_submit)
        .service(logout);
}
