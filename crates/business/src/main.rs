use anyhow::Result;
use business::{config::Config, logging::init_logging, Backend};
use tracing::info;

/// Applies schema migrations and checks that the store answers queries.
#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    init_logging(&config.logging);

    info!("Starting access control backend v{}", env!("CARGO_PKG_VERSION"));

    let backend = Backend::connect(&config).await?;

    let scope = backend.begin_request();
    let persons = scope.persons.get_all().await?;
    let roles = scope.roles.get_all().await?;
    info!(
        session_id = %scope.session_id(),
        persons = persons.len(),
        roles = roles.len(),
        "Store ready"
    );

    Ok(())
}
