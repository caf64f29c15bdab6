use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use todoguard::config::Config;
use todoguard::store::{MemoryStore, PgStore};
use todoguard::AppState;

async fn build_state(config: &Config) -> io::Result<AppState> {
    let state = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(url)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

            log::info!("using PostgreSQL store");
            AppState::with_store(Arc::new(PgStore::new(pool)), config)
        }
        None => {
            log::warn!("DATABASE_URL not set, keeping users and tasks in memory");
            AppState::with_store(Arc::new(MemoryStore::new()), config)
        }
    };
    state.map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    log::debug!("loaded {:?}", config);

    let state = build_state(&config).await.map_err(|e| {
        log::error!("failed to initialise storage: {}", e);
        e
    })?;

    log::info!("Starting todoguard server at {}", config.server_url());
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
