use agentcore_proxy::{config, server};
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Accepts a bare level (`debug`) or filter directives (`agentcore_proxy=debug,info`).
fn log_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter: '{}' ({}). Use a level (error, warn, info, debug, trace) or directives",
            level,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .without_time()
        .init();

    info!("Configuration loaded, log level: {}", log_level);

    if std::env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        server::run_lambda(config).await?;
    } else {
        server::run_local(config).await?;
    }

    Ok(())
}
