use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use microwrite_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    config.validate_for_production();

    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config).await.map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("failed to initialise application state: {}", e),
        )
    })?;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(handlers::health_check)
            .service(handlers::get_today_question)
            .service(handlers::generate_today_question)
            .service(handlers::refresh_today_question)
            .service(handlers::submit_answer)
            .service(handlers::re_evaluate_record)
            .service(handlers::list_practice_records)
            .service(handlers::get_practice_stats)
            .service(handlers::list_weakness_points)
            .service(handlers::ask_assistant)
    })
    .bind((host, port))?
    .run()
    .await
}
