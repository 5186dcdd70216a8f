//! HTTP/1.1 wire protocol, decoded and encoded by hand.
//!
//! # Architecture
//!
//! - **`line`**: reads one CRLF-terminated line, a byte at a time
//! - **`parser`**: decodes the request line and the header block
//! - **`headers`**: ordered, last-value-wins header mapping
//! - **`request`**: the decoded request
//! - **`response`**: status codes and the response descriptor
//! - **`writer`**: serializes a response and writes it back
//! - **`connection`**: the per-connection request handler
//! - **`error`**: the error taxonomy shared by all of the above
//!
//! # Connection lifecycle
//!
//! Each connection carries exactly one request:
//!
//! ```text
//!        ┌──────────────────┐
//!        │  Request line    │ ← "GET <path> HTTP/1.1"
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Headers       │ ← until the blank line; Host required
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │  File lookup     │ ← 301 for "/", 404 on read failure, else 200
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← one write attempt
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! Any decode failure skips straight to `Closed` without writing anything.

pub mod connection;
pub mod error;
pub mod headers;
pub mod line;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
