use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// OpenAPI version emitted for every generated document
pub const OPENAPI_VERSION: &str = "3.1.0";

/// Prefix of every local schema reference
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// OpenAPI document root object, restricted to the parts this crate emits
/// https://spec.openapis.org/oas/v3.1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    pub openapi: String,
    pub info: Info,
    pub servers: Vec<Server>,
    pub paths: IndexMap<String, PathItem>,
    pub components: Components,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub post: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub summary: String,

    pub description: String,

    #[serde(rename = "requestBody")]
    pub request_body: RequestBody,

    pub responses: IndexMap<String, Response>,

    /// Each entry maps a security scheme name to its required scopes
    pub security: Vec<IndexMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    pub content: IndexMap<String, MediaType>,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    pub schema: SchemaNode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    pub content: IndexMap<String, MediaType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Components {
    pub schemas: IndexMap<String, SchemaNode>,

    #[serde(rename = "securitySchemes")]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,

    #[serde(rename = "in")]
    pub location: String,

    pub name: String,

    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonSchemaType {
    String,
    Number,
    Boolean,
    Object,
    Array,
}

/// JSON Schema fragment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: JsonSchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaOrRef>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl SchemaNode {
    pub fn new(schema_type: JsonSchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            items: None,
            required: None,
        }
    }

    /// Object schema with the given properties
    pub fn object(properties: IndexMap<String, SchemaOrRef>) -> Self {
        Self {
            properties: Some(properties),
            ..Self::new(JsonSchemaType::Object)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_items(mut self, items: SchemaNode) -> Self {
        self.items = Some(Box::new(items));
        self
    }

    pub fn with_required(mut self, required: Vec<String>) -> Self {
        self.required = Some(required);
        self
    }

    /// All reference targets reachable from this node
    pub fn references(&self) -> Vec<&Reference> {
        let mut refs = Vec::new();
        self.collect_references(&mut refs);
        refs
    }

    fn collect_references<'a>(&'a self, refs: &mut Vec<&'a Reference>) {
        if let Some(properties) = &self.properties {
            for property in properties.values() {
                match property {
                    SchemaOrRef::Ref(reference) => refs.push(reference),
                    SchemaOrRef::Schema(schema) => schema.collect_references(refs),
                }
            }
        }
        if let Some(items) = &self.items {
            items.collect_references(refs);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "$ref")]
    pub reference: String,
}

impl Reference {
    /// Reference to a named entry of `components.schemas`
    pub fn schema(name: &str) -> Self {
        Self {
            reference: format!("{}{}", SCHEMA_REF_PREFIX, name),
        }
    }

    /// Name of the referenced component schema, if this is a local schema ref
    pub fn schema_name(&self) -> Option<&str> {
        self.reference.strip_prefix(SCHEMA_REF_PREFIX)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref(Reference),
    Schema(SchemaNode),
}

impl From<Reference> for SchemaOrRef {
    fn from(reference: Reference) -> Self {
        Self::Ref(reference)
    }
}

impl From<SchemaNode> for SchemaOrRef {
    fn from(schema: SchemaNode) -> Self {
        Self::Schema(schema)
    }
}

impl OpenApiDocument {
    /// Every schema reference in the document, including the paths section
    pub fn references(&self) -> Vec<&Reference> {
        let mut refs = Vec::new();
        for schema in self.components.schemas.values() {
            refs.extend(schema.references());
        }
        for item in self.paths.values() {
            let operation = &item.post;
            for media in operation.request_body.content.values() {
                refs.extend(media.schema.references());
            }
            for response in operation.responses.values() {
                for media in response.content.values() {
                    refs.extend(media.schema.references());
                }
            }
        }
        refs
    }

    /// References whose target is missing from `components.schemas`
    pub fn dangling_references(&self) -> Vec<String> {
        self.references()
            .into_iter()
            .filter(|reference| {
                reference
                    .schema_name()
                    .is_none_or(|name| !self.components.schemas.contains_key(name))
            })
            .map(|reference| reference.reference.clone())
            .collect()
    }
}
