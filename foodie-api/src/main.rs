use clap::Parser;
use dotenvy::dotenv;
use foodie_store::Store;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod handlers;
mod models;

use handlers::{AppState, app};

#[derive(Parser, Debug)]
#[command(version, about = "Read-only restaurant and dish query service")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// SQLite database file
    #[arg(long, env = "DATABASE_URL", default_value = "./db/database.sqlite")]
    database_url: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Opening store at {}", cli.database_url);
    let store = Store::connect(&cli.database_url).await?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cli.port)).await?;
    info!("Foodie API listening on {}", listener.local_addr()?);

    axum::serve(listener, app(AppState { store })).await?;

    Ok(())
}
