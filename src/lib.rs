pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod openapi;
pub mod render;
pub mod server;
pub mod session;
pub mod telemetry;

pub use error::{Make2OasError, Result};
