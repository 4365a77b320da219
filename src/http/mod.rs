//! HTTP server startup and lifecycle.
//!
//! The server includes:
//! - Plain HTTP/1.1 on the configured address
//! - Graceful shutdown on SIGTERM/SIGINT

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
