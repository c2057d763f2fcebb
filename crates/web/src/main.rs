use anyhow::Context;
use storage::Database;
use web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Workout API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!("Connecting to database at: {}", config.database_host());
    let db = Database::new(&config.database_url, config.max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    if config.run_migrations {
        tracing::info!("Running database migrations");
        db.run_migrations()
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Database migrations completed successfully");
    }

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, web::app(db)).await?;

    Ok(())
}
