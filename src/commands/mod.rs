pub mod check;
pub mod convert;
pub mod generate;
pub mod list;
pub mod serve;

pub use check::execute_check;
pub use convert::{ConvertCommandArgs, execute_convert};
pub use generate::{GenerateCommandArgs, execute_generate};
pub use list::execute_list;
pub use serve::execute_serve;

use crate::error::Result;
use crate::models::OpenApiDocument;
use crate::render::{self, OutputFormat};
use colored::*;
use std::path::{Path, PathBuf};

/// Where a rendered document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    /// File path, or a directory that receives the default file name
    Path(Option<PathBuf>),
}

/// Resolve the artifact path for a scenario
pub fn artifact_path(target: Option<&Path>, scenario_name: &str, format: OutputFormat) -> PathBuf {
    let file_name = render::artifact_file_name(scenario_name, format);
    match target {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

/// Render the document and write it to the requested target.
/// Returns the written path, if any.
pub fn emit_document(
    document: &OpenApiDocument,
    scenario_name: &str,
    format: OutputFormat,
    target: &OutputTarget,
) -> Result<Option<PathBuf>> {
    let content = render::render_document(document, format)?;

    match target {
        OutputTarget::Stdout => {
            // Plain output so it can be piped
            print!("{}", content);
            if !content.ends_with('\n') {
                println!();
            }
            Ok(None)
        }
        OutputTarget::Path(path) => {
            let path = artifact_path(path.as_deref(), scenario_name, format);
            let written = render::write_artifact(&path, &content)?;
            println!(
                "{} OpenAPI specification written to {} ({})",
                "✓".green(),
                written.display().to_string().bold(),
                format.extension().to_uppercase()
            );
            Ok(Some(written))
        }
    }
}
