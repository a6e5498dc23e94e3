use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use copydesk::config::Config;
use copydesk::gateway::HttpGateway;
use copydesk::web::middleware::SecurityHeaders;
use copydesk::web::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()
        .expect("Configuration error (set GATEWAY_URL and GATEWAY_API_TOKEN)");
    let gateway =
        HttpGateway::new(&config.gateway_url, &config.gateway_api_token);

    let bind_addr = config.bind_addr.clone();
    let state = Data::new(AppState {
        gateway: Arc::new(gateway),
        config,
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SecurityHeaders)
            .configure(copydesk::web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(bind_addr)?
    .run()
    .await
}
