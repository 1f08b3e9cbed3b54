//! Mapping from Make field type tags to JSON Schema types and example values

use crate::models::{FieldType, JsonSchemaType};
use serde_json::{Value, json};

/// Placeholder used for text fields and any tag without a better example
pub const EXAMPLE_TEXT: &str = "example";

/// Convert a Make field type to its JSON Schema type.
///
/// Unknown tags map to `string`. `dynamicCollection` is an open object,
/// not an array.
pub fn to_schema_type(field_type: &FieldType) -> JsonSchemaType {
    match field_type {
        FieldType::Text => JsonSchemaType::String,
        FieldType::Number => JsonSchemaType::Number,
        FieldType::Boolean => JsonSchemaType::Boolean,
        FieldType::Object => JsonSchemaType::Object,
        FieldType::Array | FieldType::Collection => JsonSchemaType::Array,
        FieldType::DynamicCollection => JsonSchemaType::Object,
        FieldType::Unknown(_) => JsonSchemaType::String,
    }
}

/// Representative example value for a Make field type
pub fn default_value(field_type: &FieldType) -> Value {
    match field_type {
        FieldType::Text => json!(EXAMPLE_TEXT),
        FieldType::Number => json!(0),
        FieldType::Boolean => json!(false),
        FieldType::Object => json!({}),
        FieldType::Array | FieldType::Collection => json!([]),
        FieldType::DynamicCollection => json!({}),
        FieldType::Unknown(_) => json!(EXAMPLE_TEXT),
    }
}
