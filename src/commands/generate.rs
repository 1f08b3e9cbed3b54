use super::{OutputTarget, emit_document};
use crate::config::parse_origin;
use crate::error::Result;
use crate::loader::load_interface;
use crate::models::Scenario;
use crate::openapi::generate_document;
use crate::render::OutputFormat;
use colored::*;
use std::path::{Path, PathBuf};

pub struct GenerateCommandArgs<'a> {
    pub interface_path: &'a Path,
    pub scenario_id: i64,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub base_url: &'a str,
    pub allow_any_host: bool,
    pub format: OutputFormat,
    pub target: OutputTarget,
}

/// Execute the generate command
pub fn execute_generate(args: GenerateCommandArgs<'_>) -> Result<Option<PathBuf>> {
    let origin = parse_origin(args.base_url, args.allow_any_host)?;
    let interface = load_interface(args.interface_path)?;
    eprintln!(
        "{} Loaded interface: {} ({} inputs, {} outputs)",
        "✓".green(),
        args.interface_path.display(),
        interface.input.len(),
        interface.output.len()
    );

    let mut scenario = Scenario::new(args.scenario_id, args.name);
    if let Some(description) = args.description {
        scenario = scenario.with_description(description);
    }

    let document = generate_document(&scenario, &interface, &origin);
    emit_document(&document, &scenario.name, args.format, &args.target)
}
