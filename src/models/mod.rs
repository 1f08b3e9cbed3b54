pub mod make;
pub mod openapi;

pub use make::{Field, FieldType, Scenario, ScenarioInterface, Scheduling};
pub use openapi::{JsonSchemaType, OpenApiDocument, Reference, SchemaNode, SchemaOrRef};
