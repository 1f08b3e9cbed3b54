use crate::config::FetchOptions;
use crate::error::{Make2OasError, Result};
use crate::server::{self, AppState};
use colored::*;
use std::net::SocketAddr;

pub async fn execute_serve(
    host: &str,
    port: u16,
    allow_any_host: bool,
    options: FetchOptions,
) -> Result<()> {
    println!("{}", "Starting web server...".bright_blue());
    println!("  Port: {}", port);
    if allow_any_host {
        println!("  {}", "Any Make host accepted".yellow());
    }
    println!();

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| Make2OasError::ValidationError(format!("Invalid bind address: {}", e)))?;

    let state = AppState {
        fetch_options: options,
        allow_any_host,
    };

    server::start_server(addr, state).await
}
