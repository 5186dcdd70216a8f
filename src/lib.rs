//! docroot - a minimal static file server
//!
//! Serves files from one directory over HTTP/1.1, decoding requests and
//! encoding responses by hand on top of raw TCP.

pub mod config;
pub mod http;
pub mod server;
