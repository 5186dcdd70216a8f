//! Process-facing side of the server: the root directory and the acceptor.

pub mod listener;
pub mod root;

pub use listener::Server;
pub use root::ServeRoot;
