use std::io;

/// Errors raised while decoding a request or sending its response.
///
/// Every variant except [`ProtocolError::FileAccess`] aborts the connection
/// without a response. `FileAccess` is turned into a 404 by the handler.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The connection failed or closed before a full line arrived.
    #[error("could not read from connection: {0}")]
    TransportRead(#[source] io::Error),

    /// A line grew past the configured maximum without a CRLF.
    #[error("line exceeds {limit} bytes")]
    LineTooLong { limit: usize },

    /// The line is not valid UTF-8; carries a lossy rendering for logs.
    #[error("line is not valid UTF-8: '{0}'")]
    InvalidEncoding(String),

    #[error("malformed request line '{0}'")]
    MalformedRequestLine(String),

    #[error("unsupported method '{0}'")]
    UnsupportedMethod(String),

    #[error("unsupported version '{0}'")]
    UnsupportedVersion(String),

    #[error("malformed header line '{0}'")]
    MalformedHeaderLine(String),

    #[error("missing 'Host' header")]
    MissingHostHeader,

    #[error("could not read file: {0}")]
    FileAccess(#[source] io::Error),

    #[error("could not write response: {0}")]
    TransportWrite(#[source] io::Error),
}

impl ProtocolError {
    /// True when the peer hung up before sending a complete line.
    pub fn is_premature_close(&self) -> bool {
        matches!(self, ProtocolError::TransportRead(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
