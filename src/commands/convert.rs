//! Convert command implementation
//!
//! Walks the session from connecting through scenario selection to the
//! generated document, then exports it.

use super::{OutputTarget, emit_document};
use crate::client::{MakeClient, ScenarioSource, list_on_demand_scenarios};
use crate::config::{ConnectionConfig, ConnectionInput, FetchOptions};
use crate::error::{Make2OasError, Result};
use crate::render::OutputFormat;
use crate::session::Session;
use colored::Colorize;
use std::path::PathBuf;

pub struct ConvertCommandArgs {
    pub connection: ConnectionInput,
    pub options: FetchOptions,
    pub scenario_id: i64,
    pub format: OutputFormat,
    pub target: OutputTarget,
}

/// Execute the convert command
pub async fn execute_convert(args: ConvertCommandArgs) -> Result<Option<PathBuf>> {
    let config = ConnectionConfig::from_input(args.connection.with_env_fallback())?;
    let client = MakeClient::new(config.clone())?;

    eprintln!("{} Fetching scenarios from {}", "→".blue(), config.origin);
    let scenarios = list_on_demand_scenarios(&client, args.options).await?;
    let session = Session::new().connected(config, scenarios)?;
    eprintln!(
        "{} Found {} on-demand scenarios",
        "✓".green(),
        session.scenarios().len()
    );

    session.find_scenario(args.scenario_id)?;

    eprintln!(
        "{} Fetching interface of scenario {}",
        "→".blue(),
        args.scenario_id
    );
    let interface = client.fetch_interface(args.scenario_id).await?;
    let session = session.converted(args.scenario_id, interface)?;

    let Session::Converting {
        scenario, document, ..
    } = &session
    else {
        return Err(Make2OasError::InvalidTransition(
            "conversion did not produce a document".to_string(),
        ));
    };

    eprintln!(
        "{} Generated OpenAPI {} for {}",
        "✓".green(),
        document.openapi,
        scenario.name.bold()
    );

    emit_document(document, &scenario.name, args.format, &args.target)
}
