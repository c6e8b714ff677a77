use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use profile_match::config::{LoggingSettings, Settings};
use profile_match::{configure_routes, services, AppState, Matcher};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging from settings, with LOG_LEVEL and LOG_FORMAT taking precedence
fn init_logging(settings: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let filter = EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    init_logging(&settings.logging);

    info!("Starting profile matching service...");

    let store = services::build_store(&settings.storage).await.map_err(|e| {
        tracing::error!("Failed to initialize user store: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e)
    })?;

    info!("User store initialized ({})", store.backend());

    let policy = settings.matching.policy();
    let matcher = Matcher::new(policy);

    info!("Matcher initialized with policy: {:?}", policy);

    let app_state = AppState::new(store, matcher);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
