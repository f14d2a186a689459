use anyhow::Result;
use sso_auth::application::{
    commands::auth::AuthSettings,
    ports::{
        security::{PasswordHasher, TokenIssuer},
        time::Clock,
    },
    services::ApplicationServices,
};
use sso_auth::config::{AppConfig, Environment};
use sso_auth::infrastructure::{
    database,
    repositories::SqliteStorage,
    security::{password::Argon2PasswordHasher, token::JwtTokenIssuer},
    time::SystemClock,
};
use sso_auth::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.environment());

    tracing::info!(
        env = %config.environment(),
        email_log_policy = %config.email_log_policy(),
        token_ttl_secs = config.token_ttl().as_secs(),
        "starting sso"
    );

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let storage = Arc::new(SqliteStorage::new(pool));
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(Arc::clone(&clock)));

    let settings = AuthSettings::new(config.token_ttl())
        .with_email_log_policy(config.email_log_policy());

    let services = Arc::new(ApplicationServices::new(
        storage.clone(),
        storage.clone(),
        storage,
        password_hasher,
        token_issuer,
        settings,
    ));

    let app = build_router(HttpState { services });

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing(environment: Environment) {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| environment.default_log_filter().to_string());
    let filter = tracing_subscriber::EnvFilter::new(env_filter);

    let result = if environment.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    if result.is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
