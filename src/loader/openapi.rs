use crate::error::{Make2OasError, Result};
use crate::models::Reference;
use oas3::OpenApiV3Spec;
use std::fs;
use std::path::Path;

/// Result of checking a generated document
#[derive(Debug)]
pub struct CheckedSpec {
    pub spec: OpenApiV3Spec,
    pub path_count: usize,
    pub schema_count: usize,
}

/// Load a generated OpenAPI document (JSON or YAML) and check its structure
pub fn load_openapi<P: AsRef<Path>>(path: P) -> Result<CheckedSpec> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Make2OasError::OpenApiLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    check_openapi(&content)
}

/// Parse document text and validate version, paths and schema references
pub fn check_openapi(content: &str) -> Result<CheckedSpec> {
    let raw: serde_json::Value = serde_yaml::from_str(content).map_err(|e| {
        Make2OasError::OpenApiLoadError(format!("Failed to parse OpenAPI document: {}", e))
    })?;

    let spec: OpenApiV3Spec = serde_json::from_value(raw.clone()).map_err(|e| {
        Make2OasError::OpenApiLoadError(format!("Not an OpenAPI 3 document: {}", e))
    })?;

    if !spec.openapi.starts_with("3.1") {
        return Err(Make2OasError::ValidationError(format!(
            "Unsupported OpenAPI version: {}. Only 3.1.x is generated.",
            spec.openapi
        )));
    }

    let path_count = spec.paths.as_ref().map_or(0, |paths| paths.len());
    if path_count == 0 {
        return Err(Make2OasError::ValidationError(
            "OpenAPI spec must have at least one path".to_string(),
        ));
    }

    let schemas = raw
        .pointer("/components/schemas")
        .and_then(|schemas| schemas.as_object());
    let schema_count = schemas.map_or(0, |schemas| schemas.len());

    let mut refs = Vec::new();
    collect_refs(&raw, &mut refs);
    let dangling: Vec<&str> = refs
        .iter()
        .filter(|reference| {
            reference
                .schema_name()
                .is_none_or(|name| schemas.is_none_or(|schemas| !schemas.contains_key(name)))
        })
        .map(|reference| reference.reference.as_str())
        .collect();

    if !dangling.is_empty() {
        return Err(Make2OasError::ValidationError(format!(
            "Dangling schema references: {}",
            dangling.join(", ")
        )));
    }

    Ok(CheckedSpec {
        spec,
        path_count,
        schema_count,
    })
}

fn collect_refs(value: &serde_json::Value, refs: &mut Vec<Reference>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, entry) in map {
                match (key.as_str(), entry) {
                    ("$ref", serde_json::Value::String(reference)) => refs.push(Reference {
                        reference: reference.clone(),
                    }),
                    _ => collect_refs(entry, refs),
                }
            }
        }
        serde_json::Value::Array(items) => {
            for item in items {
                collect_refs(item, refs);
            }
        }
        _ => {}
    }
}
