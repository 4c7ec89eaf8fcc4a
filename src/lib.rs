pub mod check;
pub mod config;
pub mod observability;
pub mod routes;
pub mod server;

pub use config::Config;
pub use routes::{AppState, Envelope, router};
