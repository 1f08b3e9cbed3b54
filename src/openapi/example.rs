use super::typemap::default_value;
use crate::models::Field;
use serde_json::{Map, Value};

/// Build the example `data` payload for the request body.
///
/// A declared default wins; otherwise the type's representative value is used.
pub fn generate_example(inputs: &[Field]) -> Value {
    let example: Map<String, Value> = inputs
        .iter()
        .map(|field| {
            let value = field
                .default
                .clone()
                .unwrap_or_else(|| default_value(&field.field_type));
            (field.name.clone(), value)
        })
        .collect();

    Value::Object(example)
}
