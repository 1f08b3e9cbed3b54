//! The single `POST /scenarios/{id}/run` path item

use super::example::generate_example;
use super::schema::{REQUEST_DATA, RESPONSE_OUTPUTS};
use crate::models::openapi::{MediaType, Operation, PathItem, RequestBody, Response};
use crate::models::{JsonSchemaType, Reference, ScenarioInterface, SchemaNode, SchemaOrRef};
use indexmap::IndexMap;
use serde_json::json;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Name of the API key security scheme
pub const API_KEY_SCHEME: &str = "api_key";

pub fn run_path(scenario_id: i64) -> String {
    format!("/scenarios/{}/run", scenario_id)
}

pub fn operation_id(scenario_id: i64) -> String {
    format!("runScenario{}", scenario_id)
}

/// Build the paths map for running one scenario
pub fn generate_paths(
    scenario_id: i64,
    scenario_name: &str,
    interface: &ScenarioInterface,
) -> IndexMap<String, PathItem> {
    let operation = Operation {
        operation_id: operation_id(scenario_id),
        summary: format!("Run scenario {}", scenario_name),
        description: format!(
            "Execute the \"{}\" scenario with ID {}",
            scenario_name, scenario_id
        ),
        request_body: request_body(interface),
        responses: responses(),
        security: vec![IndexMap::from([(API_KEY_SCHEME.to_string(), Vec::new())])],
    };

    IndexMap::from([(run_path(scenario_id), PathItem { post: operation })])
}

fn request_body(interface: &ScenarioInterface) -> RequestBody {
    let schema = SchemaNode::object(IndexMap::from([
        (
            "data".to_string(),
            SchemaOrRef::from(Reference::schema(REQUEST_DATA)),
        ),
        (
            "responsive".to_string(),
            SchemaNode::new(JsonSchemaType::Boolean)
                .with_description("Whether to wait for the scenario execution to complete")
                .into(),
        ),
    ]))
    .with_required(vec!["data".to_string()]);

    let example = json!({
        "data": generate_example(&interface.input),
        "responsive": true,
    });

    RequestBody {
        content: json_content(schema, Some(example)),
        required: true,
    }
}

fn responses() -> IndexMap<String, Response> {
    let success = SchemaNode::object(IndexMap::from([
        (
            "executionId".to_string(),
            SchemaOrRef::from(SchemaNode::new(JsonSchemaType::String)),
        ),
        (
            "outputs".to_string(),
            Reference::schema(RESPONSE_OUTPUTS).into(),
        ),
    ]));

    IndexMap::from([
        ("200".to_string(), response("Successful execution", success)),
        ("400".to_string(), response("Bad request", error_schema())),
        ("401".to_string(), response("Unauthorized", error_schema())),
    ])
}

fn error_schema() -> SchemaNode {
    SchemaNode::object(IndexMap::from([(
        "error".to_string(),
        SchemaOrRef::from(SchemaNode::new(JsonSchemaType::String)),
    )]))
}

fn response(description: &str, schema: SchemaNode) -> Response {
    Response {
        description: description.to_string(),
        content: json_content(schema, None),
    }
}

fn json_content(
    schema: SchemaNode,
    example: Option<serde_json::Value>,
) -> IndexMap<String, MediaType> {
    IndexMap::from([(JSON_CONTENT_TYPE.to_string(), MediaType { schema, example })])
}
