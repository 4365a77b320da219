//! hostinfo: a minimal JSON info service.
//!
//! Serves four fixed GET routes (`/`, `/status`, `/health`, `/info`) that
//! report constants, startup labels, and the host name. Used to validate
//! container build, orchestration, and health-check wiring.

pub mod config;
pub mod error;
pub mod host;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use host::{HostIdentity, LookupError, SystemHost};
pub use routes::create_router;
pub use state::AppState;
