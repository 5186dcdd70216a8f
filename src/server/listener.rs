use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::{info, Instrument};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::root::ServeRoot;

/// Owns the listening socket and hands each connection to its own task.
pub struct Server {
    listener: TcpListener,
    root: Arc<ServeRoot>,
    config: Arc<Config>,
    /// Present only when `max_connections` is configured.
    limit: Option<Arc<Semaphore>>,
}

impl Server {
    pub async fn bind(config: Config, root: ServeRoot) -> anyhow::Result<Self> {
        config.validate()?;

        let addr = config.listen_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("error listening on {addr}"))?;
        info!("Listening on {}", addr);

        let limit = config
            .max_connections
            .map(|n| Arc::new(Semaphore::new(n)));

        Ok(Self {
            listener,
            root: Arc::new(root),
            config: Arc::new(config),
            limit,
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until accepting fails.
    ///
    /// An accept error is returned to the caller and ends the loop; it is
    /// never retried.
    pub async fn run(self) -> anyhow::Result<()> {
        info!(root = %self.root.path().display(), "Waiting for clients");

        loop {
            // With a limit, wait for a free slot before taking the next client.
            let permit = match &self.limit {
                Some(limit) => Some(
                    limit
                        .clone()
                        .acquire_owned()
                        .await
                        .context("connection limiter closed")?,
                ),
                None => None,
            };

            let (socket, peer) = self
                .listener
                .accept()
                .await
                .context("error accepting new connection")?;
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, self.root.clone(), self.config.clone());
            let span = tracing::info_span!("conn", %peer);
            tokio::spawn(
                async move {
                    // Outcome is already logged by the connection itself.
                    let _ = conn.run().await;
                    drop(permit);
                }
                .instrument(span),
            );
        }
    }
}
