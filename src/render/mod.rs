//! Text rendering and file export of generated documents

pub mod yaml;

pub use yaml::to_yaml;

use crate::error::{Make2OasError, Result};
use crate::models::OpenApiDocument;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;
use tempfile::NamedTempFile;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Make2OasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(Make2OasError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render a document as pretty JSON or block YAML
pub fn render_document(document: &OpenApiDocument, format: OutputFormat) -> Result<String> {
    let value = serde_json::to_value(document)?;
    let content = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&value)?,
        OutputFormat::Yaml => to_yaml(&value),
    };
    Ok(content)
}

/// Lowercased scenario name with every non-alphanumeric run replaced by `_`
pub fn slug(name: &str) -> String {
    NON_ALPHANUMERIC
        .replace_all(&name.to_lowercase(), "_")
        .into_owned()
}

/// File name of the exported artifact, e.g. `daily_sync_openapi_spec.yaml`
pub fn artifact_file_name(scenario_name: &str, format: OutputFormat) -> String {
    format!("{}_openapi_spec.{}", slug(scenario_name), format.extension())
}

/// Write rendered content to `path`, replacing the file atomically
pub fn write_artifact(path: &Path, content: &str) -> Result<PathBuf> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote artifact");
    Ok(path.to_path_buf())
}
