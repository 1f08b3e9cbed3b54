use crate::error::Result;
use crate::loader::load_openapi;
use colored::*;
use std::path::Path;

pub fn execute_check(path: &Path) -> Result<()> {
    println!("{}", "Checking OpenAPI document...".bright_blue());
    println!("  Path: {}", path.display());

    let checked = load_openapi(path)?;

    println!("\n{}", "✓ Document is valid".green());
    println!("  Title: {}", checked.spec.info.title.bold());
    println!("  OpenAPI Version: {}", checked.spec.openapi);
    println!("  Paths: {}", checked.path_count);
    println!("  Schemas: {}", checked.schema_count);

    Ok(())
}
