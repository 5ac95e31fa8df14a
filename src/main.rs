use bookkeeper::{config, errors::Result, report, store};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load the seed chart (bookkeeper.toml override or built-in defaults)
    let chart = config::chart::load_chart_or_default()
        .inspect_err(|e| error!("Failed to load chart configuration: {e}"))?;

    // 4. Connect and make sure the schema and seed data exist
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;
    store::initialize_if_empty(&db, &chart)
        .await
        .inspect_err(|e| error!("Failed to seed chart of accounts: {e}"))?;

    // 5. Print the requested report(s)
    let which = env::args().nth(1).unwrap_or_else(|| "all".to_string());
    match which.as_str() {
        "tax" => println!("{}", report::generate_tax_report(&db).await?),
        "accounts" => println!("{}", report::generate_account_report(&db).await?),
        _ => {
            println!("{}\n", report::generate_tax_report(&db).await?);
            println!("{}", report::generate_account_report(&db).await?);
        }
    }

    Ok(())
}
