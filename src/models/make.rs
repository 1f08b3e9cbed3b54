use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheduling type that makes a scenario callable through its interface
pub const ON_DEMAND: &str = "on-demand";

/// Field type tag as reported by the Make interface endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Object,
    Array,
    Collection,
    /// Object whose member structure is not statically declared
    DynamicCollection,
    /// Any tag this crate does not know about, kept verbatim
    Unknown(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Collection => "collection",
            Self::DynamicCollection => "dynamicCollection",
            Self::Unknown(tag) => tag,
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "object" => Self::Object,
            "array" => Self::Array,
            "collection" => Self::Collection,
            "dynamicCollection" => Self::DynamicCollection,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, typed parameter or result slot of a scenario interface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            label: None,
            help: None,
            required: None,
            default: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Label when set and non-empty, otherwise the field name
    pub fn display_name(&self) -> &str {
        self.label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(&self.name)
    }

    /// Help text when set and non-empty
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref().filter(|help| !help.is_empty())
    }
}

/// Typed inputs and outputs a scenario exposes for on-demand runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInterface {
    #[serde(default)]
    pub input: Vec<Field>,

    #[serde(default)]
    pub output: Vec<Field>,
}

impl ScenarioInterface {
    pub fn new(input: Vec<Field>, output: Vec<Field>) -> Self {
        Self { input, output }
    }

    /// Return a copy where every field name is non-empty and unique within
    /// its list. The first occurrence of a name wins.
    pub fn normalized(&self) -> Self {
        Self {
            input: dedupe_fields(&self.input, "input"),
            output: dedupe_fields(&self.output, "output"),
        }
    }
}

fn dedupe_fields(fields: &[Field], list: &str) -> Vec<Field> {
    let mut seen = IndexSet::new();
    let mut kept = Vec::with_capacity(fields.len());

    for field in fields {
        if field.name.is_empty() {
            tracing::warn!("Dropping {} field without a name", list);
            continue;
        }
        if !seen.insert(field.name.as_str()) {
            tracing::warn!("Dropping duplicate {} field '{}'", list, field.name);
            continue;
        }
        kept.push(field.clone());
    }

    kept
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheduling {
    #[serde(rename = "type")]
    pub scheduling_type: String,
}

/// A remotely defined automation workflow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: i64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduling: Option<Scheduling>,
}

impl Scenario {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            scheduling: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_scheduling(mut self, scheduling_type: impl Into<String>) -> Self {
        self.scheduling = Some(Scheduling {
            scheduling_type: scheduling_type.into(),
        });
        self
    }

    pub fn scheduling_type(&self) -> Option<&str> {
        self.scheduling
            .as_ref()
            .map(|scheduling| scheduling.scheduling_type.as_str())
    }

    /// Only on-demand scenarios expose a callable interface
    pub fn is_on_demand(&self) -> bool {
        self.scheduling_type() == Some(ON_DEMAND)
    }

    /// Case-insensitive match against name or description
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self
                .description
                .as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&query))
    }
}

/// Keep only scenarios matching the search query; an empty query keeps all
pub fn filter_scenarios<'a>(scenarios: &'a [Scenario], query: &str) -> Vec<&'a Scenario> {
    scenarios
        .iter()
        .filter(|scenario| scenario.matches(query))
        .collect()
}

/// Response body of `GET /api/v2/scenarios`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioPage {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// Response body of `GET /api/v2/scenarios/{id}/interface`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceEnvelope {
    pub interface: ScenarioInterface,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_type_round_trips_known_and_unknown_tags() {
        let fields: Vec<Field> = serde_json::from_value(json!([
            { "name": "a", "type": "dynamicCollection" },
            { "name": "b", "type": "date" }
        ]))
        .unwrap();

        assert_eq!(fields[0].field_type, FieldType::DynamicCollection);
        assert_eq!(fields[1].field_type, FieldType::Unknown("date".to_string()));

        let value = serde_json::to_value(&fields[1]).unwrap();
        assert_eq!(value, json!({ "name": "b", "type": "date" }));
    }

    #[test]
    fn test_null_default_is_absent() {
        let field: Field =
            serde_json::from_value(json!({ "name": "a", "type": "text", "default": null }))
                .unwrap();
        assert!(field.default.is_none());
    }

    #[test]
    fn test_normalized_keeps_first_duplicate() {
        let interface = ScenarioInterface::new(
            vec![
                Field::new("amount", "number"),
                Field::new("amount", "text"),
                Field::new("", "text"),
                Field::new("note", "text"),
            ],
            vec![Field::new("result", "text"), Field::new("result", "boolean")],
        );

        let normalized = interface.normalized();

        assert_eq!(normalized.input.len(), 2);
        assert_eq!(normalized.input[0].field_type, FieldType::Number);
        assert_eq!(normalized.input[1].name, "note");
        assert_eq!(normalized.output.len(), 1);
        assert_eq!(normalized.output[0].field_type, FieldType::Text);
    }

    #[test]
    fn test_scenario_scheduling() {
        let scenario: Scenario = serde_json::from_value(json!({
            "id": 7,
            "name": "Sync",
            "scheduling": { "type": "on-demand" }
        }))
        .unwrap();
        assert!(scenario.is_on_demand());

        let scheduled = Scenario::new(8, "Nightly").with_scheduling("indefinitely");
        assert!(!scheduled.is_on_demand());
        assert!(!Scenario::new(9, "Bare").is_on_demand());
    }

    #[test]
    fn test_filter_scenarios_matches_name_or_description() {
        let scenarios = vec![
            Scenario::new(1, "Daily Sync"),
            Scenario::new(2, "Invoices").with_description("Sync invoices to CRM"),
            Scenario::new(3, "Cleanup"),
        ];

        let ids: Vec<i64> = filter_scenarios(&scenarios, "SYNC")
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(filter_scenarios(&scenarios, "").len(), 3);
    }
}
