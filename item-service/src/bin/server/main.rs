use std::sync::Arc;

use auth::Authenticator;
use item_service::config::Config;
use item_service::domain::auth::ports::AuthServicePort;
use item_service::domain::auth::service::AuthService;
use item_service::domain::item::ports::ItemServicePort;
use item_service::domain::item::service::ItemService;
use item_service::inbound::http::router::create_router;
use item_service::outbound::repositories::InMemoryItemRepository;
use item_service::outbound::repositories::InMemoryUserRepository;
use item_service::outbound::repositories::PostgresItemRepository;
use item_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_service=debug,auth=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "item-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        database = if config.database.is_configured() { "postgresql" } else { "memory" },
        access_token_minutes = config.jwt.access_token_minutes,
        refresh_token_hours = config.jwt.refresh_token_hours,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.lifetimes()?,
    ));

    let (auth_service, item_service): (Arc<dyn AuthServicePort>, Arc<dyn ItemServicePort>) =
        if config.database.is_configured() {
            let pg_pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(&config.database.url)
                .await?;
            tracing::info!(
                max_connections = config.database.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            sqlx::migrate!("./migrations").run(&pg_pool).await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            (
                Arc::new(AuthService::new(
                    Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                    Arc::clone(&authenticator),
                )),
                Arc::new(ItemService::new(Arc::new(PostgresItemRepository::new(
                    pg_pool,
                )))),
            )
        } else {
            tracing::warn!("database.url is empty, records are kept in memory only");

            (
                Arc::new(AuthService::new(
                    Arc::new(InMemoryUserRepository::new()),
                    Arc::clone(&authenticator),
                )),
                Arc::new(ItemService::new(Arc::new(InMemoryItemRepository::new()))),
            )
        };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, item_service, authenticator);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
