use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use quiz_room_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let max_upload_bytes = config.max_upload_bytes;

    log::info!(
        "Using model {} at {} (chunk size {}, pacing {}ms)",
        config.llm_model,
        config.llm_api_base_url,
        config.chunk_size,
        config.chunk_pacing_ms
    );

    let state = AppState::new(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(handlers::configure(max_upload_bytes))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
