use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lecture_quiz_server::{
    app_state::AppState,
    config::Config,
    handlers::{self, multipart_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_upload_bytes = config.max_upload_bytes;

    let state = AppState::new(config).map_err(std::io::Error::other)?;

    log::info!("starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(multipart_config(max_upload_bytes))
            .wrap(RequestIdMiddleware)
            .wrap(Cors::permissive())
            .wrap(Logger::new(
                "%a \"%r\" %s %b %T request_id=%{x-request-id}o",
            ))
            .configure(handlers::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
