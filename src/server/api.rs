use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::{
    Make2OasError,
    client::{MakeClient, ScenarioSource, list_on_demand_scenarios},
    config::{ConnectionConfig, ConnectionInput, FetchOptions, parse_origin},
    models::{OpenApiDocument, Scenario, ScenarioInterface},
    openapi::generate_document,
    render::{OutputFormat, artifact_file_name, render_document},
};

/// Shared application state
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub fetch_options: FetchOptions,
    pub allow_any_host: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

/// Map pipeline errors to HTTP responses
fn error_response(error: Make2OasError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &error {
        Make2OasError::InvalidConnectionInput(_)
        | Make2OasError::InvalidInterface(_)
        | Make2OasError::UnsupportedFormat(_)
        | Make2OasError::ValidationError(_) => StatusCode::BAD_REQUEST,
        Make2OasError::ScenarioNotFound(_) => StatusCode::NOT_FOUND,
        e if e.is_unauthorized() => StatusCode::UNAUTHORIZED,
        Make2OasError::RemoteListingFailed { .. }
        | Make2OasError::RemoteInterfaceFailed { .. }
        | Make2OasError::FetchExhausted { .. }
        | Make2OasError::Http(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    tracing::warn!(status = status.as_u16(), "Request failed: {}", error);
    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
}

fn connect(
    state: &AppState,
    base_url: String,
    api_key: String,
    team_id: Option<String>,
    organization_id: Option<String>,
) -> Result<MakeClient, Make2OasError> {
    let config = ConnectionConfig::from_input(ConnectionInput {
        base_url: Some(base_url),
        api_key: Some(api_key),
        team_id,
        organization_id,
        allow_any_host: state.allow_any_host,
    })?;
    MakeClient::new(config)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenariosRequest {
    pub base_url: String,
    pub api_key: String,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub organization_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScenariosResponse {
    pub scenarios: Vec<Scenario>,
}

/// POST /api/scenarios - List on-demand scenarios across all pages
pub async fn list_scenarios(
    State(state): State<AppState>,
    Json(request): Json<ScenariosRequest>,
) -> ApiResult<ScenariosResponse> {
    let client = connect(
        &state,
        request.base_url,
        request.api_key,
        request.team_id,
        request.organization_id,
    )
    .map_err(error_response)?;

    let scenarios = list_on_demand_scenarios(&client, state.fetch_options)
        .await
        .map_err(error_response)?;

    Ok(Json(ScenariosResponse { scenarios }))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfaceRequest {
    pub base_url: String,
    pub api_key: String,
    pub scenario_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterfaceResponse {
    pub interface: ScenarioInterface,
}

/// POST /api/scenarios/interface - Fetch the interface of one scenario
pub async fn get_interface(
    State(state): State<AppState>,
    Json(request): Json<InterfaceRequest>,
) -> ApiResult<InterfaceResponse> {
    let client = connect(&state, request.base_url, request.api_key, None, None)
        .map_err(error_response)?;

    let interface = client
        .fetch_interface(request.scenario_id)
        .await
        .map_err(error_response)?;

    Ok(Json(InterfaceResponse { interface }))
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiRequest {
    pub base_url: String,
    pub scenario: Scenario,
    pub interface: ScenarioInterface,
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiResponse {
    pub file_name: String,
    pub content: String,
    pub document: OpenApiDocument,
}

/// POST /api/openapi - Generate and render the document for a scenario
pub async fn generate_openapi(
    State(state): State<AppState>,
    Json(request): Json<OpenApiRequest>,
) -> ApiResult<OpenApiResponse> {
    let origin = parse_origin(&request.base_url, state.allow_any_host).map_err(error_response)?;

    let document = generate_document(&request.scenario, &request.interface, &origin);
    let content = render_document(&document, request.format).map_err(error_response)?;

    Ok(Json(OpenApiResponse {
        file_name: artifact_file_name(&request.scenario.name, request.format),
        content,
        document,
    }))
}
