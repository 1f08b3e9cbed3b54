//! OpenAPI document generation for Make scenarios
//!
//! The generators are pure: each call builds a fresh document from the
//! scenario, its interface and the server origin, without any I/O.

pub mod example;
pub mod paths;
pub mod schema;
pub mod typemap;

pub use example::generate_example;
pub use paths::generate_paths;
pub use schema::{generate_field_schema, generate_schemas};
pub use typemap::{default_value, to_schema_type};

use crate::models::openapi::{Components, Info, OPENAPI_VERSION, SecurityScheme, Server};
use crate::models::{OpenApiDocument, Scenario, ScenarioInterface};
use indexmap::IndexMap;

/// Version stamped into `info.version`
pub const DOCUMENT_VERSION: &str = "1.0.0";

/// Assemble the OpenAPI document for running a scenario.
///
/// The interface is normalized first so every field name is unique and
/// non-empty; `server_origin` is the Make instance origin, e.g.
/// `https://eu1.make.com`.
pub fn generate_document(
    scenario: &Scenario,
    interface: &ScenarioInterface,
    server_origin: &str,
) -> OpenApiDocument {
    let interface = interface.normalized();

    let description = scenario
        .description
        .as_deref()
        .filter(|description| !description.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("API for running the \"{}\" scenario", scenario.name));

    OpenApiDocument {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: format!("Run {}", scenario.name),
            version: DOCUMENT_VERSION.to_string(),
            description: Some(description),
        },
        servers: vec![Server {
            url: format!("{}/api/v2", server_origin.trim_end_matches('/')),
        }],
        paths: generate_paths(scenario.id, &scenario.name, &interface),
        components: Components {
            schemas: generate_schemas(&interface),
            security_schemes: IndexMap::from([(
                paths::API_KEY_SCHEME.to_string(),
                api_key_scheme(),
            )]),
        },
    }
}

fn api_key_scheme() -> SecurityScheme {
    SecurityScheme {
        scheme_type: "apiKey".to_string(),
        location: "header".to_string(),
        name: "Authorization".to_string(),
        description: "API key with format: \"Token YOUR_API_KEY\"".to_string(),
    }
}
