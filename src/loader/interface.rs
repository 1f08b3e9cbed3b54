use crate::error::{Make2OasError, Result};
use crate::models::ScenarioInterface;
use crate::models::make::InterfaceEnvelope;
use std::fs;
use std::path::Path;

/// Load a scenario interface from a JSON or YAML file.
///
/// Accepts both the API envelope (`{interface: {input, output}}`) and a bare
/// `{input, output}` object.
pub fn load_interface<P: AsRef<Path>>(path: P) -> Result<ScenarioInterface> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Make2OasError::InvalidInterface(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    parse_interface(&content)
}

/// Parse interface text; YAML is a superset of JSON so one parser covers both
pub fn parse_interface(content: &str) -> Result<ScenarioInterface> {
    let value: serde_json::Value = serde_yaml::from_str(content).map_err(|e| {
        Make2OasError::InvalidInterface(format!("Failed to parse interface document: {}", e))
    })?;

    if !value.is_object() {
        return Err(Make2OasError::InvalidInterface(
            "Interface document must be a mapping".to_string(),
        ));
    }

    let interface = if value.get("interface").is_some() {
        serde_json::from_value::<InterfaceEnvelope>(value).map(|envelope| envelope.interface)
    } else {
        serde_json::from_value::<ScenarioInterface>(value)
    }
    .map_err(|e| Make2OasError::InvalidInterface(e.to_string()))?;

    Ok(interface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldType;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_envelope_json() {
        let json = r#"{
            "interface": {
                "input": [{ "name": "amount", "type": "number", "required": true }],
                "output": [{ "name": "result", "type": "text", "label": "Result" }]
            }
        }"#;

        let interface = parse_interface(json).unwrap();
        assert_eq!(interface.input[0].field_type, FieldType::Number);
        assert_eq!(interface.input[0].required, Some(true));
        assert_eq!(interface.output[0].label.as_deref(), Some("Result"));
    }

    #[test]
    fn test_load_bare_yaml_file() {
        let yaml = r#"
input:
  - name: payload
    type: dynamicCollection
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let interface = load_interface(file.path()).unwrap();
        assert_eq!(interface.input[0].field_type, FieldType::DynamicCollection);
        assert!(interface.output.is_empty());
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert!(parse_interface("- a\n- b\n").is_err());
        assert!(parse_interface("input: [{ type: text }]").is_err());
    }

    #[test]
    fn test_load_nonexistent_file() {
        let err = load_interface("/nonexistent/interface.json").unwrap_err();
        assert!(matches!(err, Make2OasError::InvalidInterface(_)));
    }
}
