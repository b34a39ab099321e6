use clap::Parser;
use steam_top_games::utils::{logger, validation::Validate};
use steam_top_games::CliConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is normal outside local development.
    let dotenv_result = dotenv::dotenv();

    let cli = CliConfig::parse();
    logger::init_logger(cli.verbose, cli.json_logs);

    if let Err(e) = dotenv_result {
        tracing::warn!("Could not load .env file ({}), using process environment", e);
    }

    tracing::info!("Starting steam-top-games");
    let config = cli.into_service_config();
    tracing::debug!("Service config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(2);
    }

    if let Err(e) = steam_top_games::serve(config).await {
        tracing::error!("Server failed: {} (category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}
