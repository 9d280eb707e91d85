use clap::Parser;

use tripsight::models::config::DashboardConfig;

/// Terminal client for the trip-safety analytics dashboard.
#[derive(Parser, Debug)]
#[command(name = "tripsight", version, about)]
struct Cli {
    /// Configuration file name, without extension.
    #[arg(long, default_value = "tripsight")]
    config: String,

    /// Overrides the analytics service base URL.
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let mut settings = config::Config::builder()
        .add_source(config::File::with_name(&cli.config).required(false))
        .add_source(config::Environment::with_prefix("TRIPSIGHT"));

    if let Some(base_url) = cli.base_url {
        settings = settings
            .set_override("base_url", base_url)
            .map_err(|e| std::io::Error::other(format!("Failed to apply overrides: {e}")))?;
    }

    let config: DashboardConfig = settings
        .build()
        .and_then(|settings| settings.try_deserialize())
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    tripsight::run(config).await
}
