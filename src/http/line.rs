use bytes::{BufMut, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::error::ProtocolError;

const CRLF: &[u8] = b"\r\n";

/// Reads a single CRLF-terminated line from `source`, one byte at a time.
///
/// The returned string excludes the CRLF. Bytes after the CRLF are left
/// unread, so the next call picks up exactly where this one stopped.
///
/// Fails with [`ProtocolError::TransportRead`] if the read fails or the
/// source is exhausted before a CRLF, and with
/// [`ProtocolError::LineTooLong`] once more than `max_len` bytes arrive
/// without a terminator. A line that is not valid UTF-8 is rejected with
/// [`ProtocolError::InvalidEncoding`].
pub async fn read_line<R>(source: &mut R, max_len: usize) -> Result<String, ProtocolError>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = BytesMut::with_capacity(128);

    loop {
        let byte = source
            .read_u8()
            .await
            .map_err(ProtocolError::TransportRead)?;
        buf.put_u8(byte);

        if buf.ends_with(CRLF) {
            buf.truncate(buf.len() - CRLF.len());
            break;
        }

        // One extra byte is allowed for a pending '\r'.
        if buf.len() > max_len.saturating_add(1) {
            return Err(ProtocolError::LineTooLong { limit: max_len });
        }
    }

    let line = String::from_utf8(buf.to_vec())
        .map_err(|e| ProtocolError::InvalidEncoding(String::from_utf8_lossy(e.as_bytes()).into_owned()))?;
    tracing::debug!(line = %line, "Read line from connection");
    Ok(line)
}
