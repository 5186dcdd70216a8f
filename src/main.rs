use std::path::PathBuf;

use anyhow::Context;
use docroot::config::Config;
use docroot::server::{ServeRoot, Server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true)
        .init();

    let mut args = std::env::args_os().skip(1);
    let file = args
        .next()
        .map(PathBuf::from)
        .context("usage: docroot <file-in-root-dir> [config.yaml]")?;
    let config_path = args.next().map(PathBuf::from);

    let root = ServeRoot::from_file_arg(&file)?;
    tracing::info!("The root directory of web server is: {}", root.path().display());

    let cfg = Config::load(config_path.as_deref())?;
    let server = Server::bind(cfg, root).await?;

    tokio::select! {
        res = server.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
