use std::path::Path;

use anyhow::Context;
use clap::Parser;

use password_lab::api::{self, AppState};
use password_lab::cli::{self, Args, CliCommand};
use password_lab::core::config::Config;
use password_lab::{crypto, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config).context("Failed to initialise logging")?;
    config.log_rejected();
    log::debug!("Loaded config: {:?}", config);

    if !crypto::ARGON2_AVAILABLE {
        log::warn!("Argon2 backend not compiled in; Argon2 digests will show a placeholder");
    }

    match args.command {
        Some(CliCommand::Serve { port, address }) => {
            let address = address.unwrap_or_else(|| config.web_address.clone());
            let port = port.unwrap_or(config.web_port);

            println!("🚀 Password Security Lab API on http://{}:{}", address, port);
            println!("📖 Docs at http://{}:{}/swagger-ui/", address, port);

            api::start_server(AppState::from(&config), &address, port)
                .await
                .map_err(|e| {
                    log::error!("API server failed: {}", e);
                    e
                })
                .context("API server failed")?;
            log::info!("API server shut down gracefully");
        }
        Some(command) => cli::handlers::run_command(&config, command, args.json)?,
        None => cli::menu::run_cli_menu(&config)?,
    }

    Ok(())
}
