use clap::Parser;

use storefront::cli::{Cli, Command};
use storefront::config::Config;
use storefront::services::ProductService;
use storefront::{db, logging, seed, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let _log_guard = logging::init(&config.logging)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => server::run(config).await,
        Command::Seed { file } => {
            let pool = db::create_pool(&config.database).await?;
            let service = ProductService::new(pool);
            let imported = seed::seed_from_file(&service, &file).await?;
            tracing::info!("Seeded {} products", imported);
            Ok(())
        },
    }
}
