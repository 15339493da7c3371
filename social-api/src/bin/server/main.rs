use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use auth::Secret;
use social_api::config::Config;
use social_api::domain::account::ports::AuthServicePort;
use social_api::domain::account::service::AuthService;
use social_api::domain::post::ports::PostServicePort;
use social_api::domain::post::service::PostService;
use social_api::inbound::http::router::create_router;
use social_api::outbound::repositories::InMemoryCredentialRepository;
use social_api::outbound::repositories::InMemoryPostRepository;
use social_api::outbound::repositories::PostgresCredentialRepository;
use social_api::outbound::repositories::PostgresPostRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "social_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "social-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        database_configured = config.database.url.is_some(),
        "Configuration loaded"
    );

    let secret = Secret::new(config.jwt.secret.as_bytes()).context("jwt.secret is not usable")?;
    let authenticator = Arc::new(Authenticator::new(&secret));

    let (auth_service, post_service): (Arc<dyn AuthServicePort>, Arc<dyn PostServicePort>) =
        match &config.database.url {
            Some(url) => {
                let pg_pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(url)
                    .await?;
                tracing::info!(
                    max_connections = config.database.max_connections,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
                    Arc::new(PostgresCredentialRepository::new(pg_pool.clone())),
                    Arc::clone(&authenticator),
                ));
                let post_service: Arc<dyn PostServicePort> =
                    Arc::new(PostService::new(Arc::new(PostgresPostRepository::new(pg_pool))));

                (auth_service, post_service)
            }
            None => {
                tracing::warn!(
                    database = "memory",
                    "No database url configured, data will not survive a restart"
                );

                let auth_service: Arc<dyn AuthServicePort> = Arc::new(AuthService::new(
                    Arc::new(InMemoryCredentialRepository::new()),
                    Arc::clone(&authenticator),
                ));
                let post_service: Arc<dyn PostServicePort> =
                    Arc::new(PostService::new(Arc::new(InMemoryPostRepository::new())));

                (auth_service, post_service)
            }
        };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, post_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
