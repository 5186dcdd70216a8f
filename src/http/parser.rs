use tokio::io::AsyncRead;

use crate::http::error::ProtocolError;
use crate::http::headers::Headers;
use crate::http::line::read_line;
use crate::http::request::Request;

const SUPPORTED_METHOD: &str = "GET";
const SUPPORTED_VERSION: &str = "HTTP/1.1";

/// Reads the request line and returns the request target.
///
/// The line must be exactly `GET <path> HTTP/1.1`, separated by single
/// spaces. The path is returned verbatim: no percent-decoding and no query
/// stripping.
pub async fn decode_request_line<R>(source: &mut R, max_len: usize) -> Result<String, ProtocolError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let line = read_line(source, max_len).await.map_err(|e| match e {
        ProtocolError::InvalidEncoding(line) => ProtocolError::MalformedRequestLine(line),
        other => other,
    })?;
    parse_request_line(&line).map(str::to_string)
}

fn parse_request_line(line: &str) -> Result<&str, ProtocolError> {
    let parts: Vec<&str> = line.split(' ').collect();

    let &[method, path, version] = parts.as_slice() else {
        return Err(ProtocolError::MalformedRequestLine(line.to_string()));
    };

    if method != SUPPORTED_METHOD {
        return Err(ProtocolError::UnsupportedMethod(method.to_string()));
    }

    if version != SUPPORTED_VERSION {
        return Err(ProtocolError::UnsupportedVersion(version.to_string()));
    }

    // Every target we serve is rooted; anything else is not a request line.
    if !path.starts_with('/') {
        return Err(ProtocolError::MalformedRequestLine(line.to_string()));
    }

    Ok(path)
}

/// Reads header lines up to and including the blank line.
///
/// Each line is split on its first colon and both halves are trimmed. A
/// repeated key keeps its last value.
pub async fn decode_headers<R>(source: &mut R, max_len: usize) -> Result<Headers, ProtocolError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut headers = Headers::new();

    loop {
        let line = read_line(source, max_len).await.map_err(|e| match e {
            ProtocolError::InvalidEncoding(line) => ProtocolError::MalformedHeaderLine(line),
            other => other,
        })?;
        if line.is_empty() {
            break;
        }

        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| ProtocolError::MalformedHeaderLine(line.clone()))?;

        let (key, value) = (key.trim(), value.trim());
        tracing::debug!(key, value, "Decoded header line");
        headers.insert(key, value);
    }

    Ok(headers)
}

/// Decodes a complete request head and enforces the `Host` requirement.
///
/// Nothing past the blank line is consumed; request bodies are never read.
pub async fn read_request<R>(source: &mut R, max_len: usize) -> Result<Request, ProtocolError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let path = decode_request_line(source, max_len).await?;
    tracing::info!(path = %path, "Got GET request");

    let headers = decode_headers(source, max_len).await?;
    if !headers.contains_key("Host") {
        return Err(ProtocolError::MissingHostHeader);
    }

    Ok(Request::new(path, headers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        assert_eq!(parse_request_line("GET /a.html HTTP/1.1").unwrap(), "/a.html");
    }

    #[test]
    fn double_space_yields_four_tokens() {
        let err = parse_request_line("GET  /a HTTP/1.1").unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedRequestLine(_)));
    }

    #[test]
    fn method_is_checked_before_version() {
        let err = parse_request_line("POST / HTTP/1.0").unwrap_err();
        assert!(matches!(err, ProtocolError::UnsupportedMethod(m) if m == "POST"));
    }
}
