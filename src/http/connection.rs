use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::error::ProtocolError;
use crate::http::parser::read_request;
use crate::http::request::Request;
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::server::root::ServeRoot;

const INDEX_LOCATION: &str = "index.html";

/// Serves exactly one request on one connection, then closes it.
pub struct Connection<S> {
    stream: S,
    root: Arc<ServeRoot>,
    config: Arc<Config>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: Arc<ServeRoot>, config: Arc<Config>) -> Self {
        Self {
            stream,
            root,
            config,
        }
    }

    /// Handles the request and closes the stream on every path.
    ///
    /// Decode errors are logged and nothing is written: the client only sees
    /// the connection close. On success the status that was sent is returned.
    pub async fn run(mut self) -> Result<StatusCode, ProtocolError> {
        let result = self.serve().await;

        match &result {
            Ok(status) => info!(status = status.as_u16(), "Sent response"),
            Err(e @ ProtocolError::TransportWrite(_)) => {
                error!(error = %e, "Could not write response to connection")
            }
            Err(e) if e.is_premature_close() => {
                warn!("Connection closed before a complete request arrived")
            }
            Err(e) => warn!(error = %e, "Dropping request without a response"),
        }

        // Best effort; the stream is dropped right after either way.
        let _ = self.stream.shutdown().await;
        result
    }

    async fn serve(&mut self) -> Result<StatusCode, ProtocolError> {
        let request = read_request(&mut self.stream, self.config.max_line_length).await?;
        let response = respond(&self.root, &self.config, &request).await;

        ResponseWriter::new(&response)
            .write_to_stream(&mut self.stream)
            .await?;
        Ok(response.status)
    }
}

/// Decides the response for a decoded request.
///
/// - `/` always redirects to the index page.
/// - An unreadable file is a 404 with the configured body and no
///   `Content-Length`.
/// - Anything else is a 200 with the file contents.
///
/// The request's `Host` value is echoed back in every response.
pub async fn respond(root: &ServeRoot, config: &Config, request: &Request) -> Response {
    let mut response = if request.path() == "/" {
        Response::moved_permanently(INDEX_LOCATION)
    } else {
        match root.read(request.path()).await {
            Ok(content) => Response::ok(content),
            Err(e) => {
                info!(path = request.path(), error = %e, "File not found");
                Response::not_found(config.not_found_body.as_bytes())
            }
        }
    };

    if let Some(host) = request.host() {
        response.set_header("Host", host);
    }

    response
}
