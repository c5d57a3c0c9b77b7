use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use smartpill::adapters::http::{app_router, ApiDependencies};
use smartpill::adapters::{
    InMemoryDoseEventRepository, InMemoryMedicationRepository, InMemoryStoreHealth,
    PostgresDoseEventRepository, PostgresMedicationRepository, PostgresStoreHealth,
};
use smartpill::config::{AppConfig, DatabaseConfig, StoreBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let deps = build_store(&config.database).await?;
    let app = app_router(deps, &config.server, &config.doses);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        %addr,
        backend = config.database.backend.as_str(),
        compliance_strategy = ?config.doses.compliance_strategy,
        "SmartPill listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.as_str().into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn build_store(database: &DatabaseConfig) -> anyhow::Result<ApiDependencies> {
    match database.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(ApiDependencies {
                medications: Arc::new(InMemoryMedicationRepository::new()),
                events: Arc::new(InMemoryDoseEventRepository::new()),
                health: Arc::new(InMemoryStoreHealth),
            })
        }
        StoreBackend::Postgres => {
            // Lazy so an unreachable database surfaces as 503s, not a failed boot.
            let pool = PgPoolOptions::new()
                .min_connections(database.min_connections)
                .max_connections(database.max_connections)
                .acquire_timeout(database.acquire_timeout())
                .idle_timeout(database.idle_timeout())
                .max_lifetime(database.max_lifetime())
                .connect_lazy(&database.url)
                .context("Invalid database URL")?;

            if database.run_migrations {
                tracing::info!("Running database migrations...");
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }

            Ok(ApiDependencies {
                medications: Arc::new(PostgresMedicationRepository::new(pool.clone())),
                events: Arc::new(PostgresDoseEventRepository::new(pool.clone())),
                health: Arc::new(PostgresStoreHealth::new(pool)),
            })
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
