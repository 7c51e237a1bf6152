use anyhow::Result;
use taskboard::commands::Cli;
use taskboard::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskboard=debug")))
            .with_target(false)
            .init();
    }

    Cli::menu().await
}
