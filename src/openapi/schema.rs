//! `components.schemas` generation from a scenario interface

use super::typemap::to_schema_type;
use crate::models::{
    Field, FieldType, JsonSchemaType, Reference, ScenarioInterface, SchemaNode, SchemaOrRef,
};
use indexmap::IndexMap;

/// Aggregate schema of the request `data` object
pub const REQUEST_DATA: &str = "RequestData";

/// Aggregate schema of the response `outputs` object
pub const RESPONSE_OUTPUTS: &str = "ResponseOutputs";

/// Which side of the interface a field belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Input,
    Output,
}

/// Name of the per-field component schema
pub fn field_schema_name(field: &Field) -> String {
    format!("{}Schema", field.name)
}

/// Build the schema of one interface field
pub fn generate_field_schema(field: &Field, role: FieldRole) -> SchemaNode {
    let schema = match field.field_type {
        FieldType::Collection => SchemaNode::new(JsonSchemaType::Array)
            .with_items(SchemaNode::object(IndexMap::new())),
        FieldType::DynamicCollection => SchemaNode::object(IndexMap::new()),
        ref other => SchemaNode::new(to_schema_type(other)),
    };

    schema.with_description(describe(field, role))
}

fn describe(field: &Field, role: FieldRole) -> String {
    if let Some(help) = field.help_text() {
        return help.to_string();
    }
    match role {
        FieldRole::Input => format!("{} parameter", field.display_name()),
        FieldRole::Output => format!("{} output", field.display_name()),
    }
}

/// Build every component schema for an interface.
///
/// Inputs come first, then outputs, then the `RequestData` and
/// `ResponseOutputs` aggregates whose properties reference the per-field
/// schemas. An output sharing a name with an input replaces the input's
/// schema in place.
pub fn generate_schemas(interface: &ScenarioInterface) -> IndexMap<String, SchemaNode> {
    let mut schemas = IndexMap::new();

    for field in &interface.input {
        schemas.insert(
            field_schema_name(field),
            generate_field_schema(field, FieldRole::Input),
        );
    }

    for field in &interface.output {
        schemas.insert(
            field_schema_name(field),
            generate_field_schema(field, FieldRole::Output),
        );
    }

    schemas.insert(REQUEST_DATA.to_string(), aggregate(&interface.input));
    schemas.insert(RESPONSE_OUTPUTS.to_string(), aggregate(&interface.output));

    schemas
}

fn aggregate(fields: &[Field]) -> SchemaNode {
    let properties: IndexMap<String, SchemaOrRef> = fields
        .iter()
        .map(|field| {
            (
                field.name.clone(),
                SchemaOrRef::from(Reference::schema(&field_schema_name(field))),
            )
        })
        .collect();

    SchemaNode::object(properties)
}
