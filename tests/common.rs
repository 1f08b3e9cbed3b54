#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// Requests observed by the mock Make server
#[derive(Clone, Default)]
pub struct Recorded {
    pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub auth_headers: Arc<Mutex<Vec<String>>>,
}

impl Recorded {
    pub fn request_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub fn offsets(&self) -> Vec<String> {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .map(|q| q.get("pg[offset]").cloned().unwrap_or_default())
            .collect()
    }
}

#[derive(Clone)]
struct MockState {
    page_sizes: Vec<usize>,
    fail_status: Option<u16>,
    recorded: Recorded,
}

/// Scenario with an id derived from its position; even ids are on-demand
pub fn scenario_json(id: usize) -> Value {
    let scheduling = if id % 2 == 0 { "on-demand" } else { "indefinitely" };
    json!({
        "id": id,
        "name": format!("Scenario {id}"),
        "description": "",
        "scheduling": { "type": scheduling },
        "islinked": true
    })
}

async fn scenarios(
    State(state): State<MockState>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let request = {
        let mut queries = state.recorded.queries.lock().unwrap();
        queries.push(query.clone());
        queries.len() - 1
    };
    state.recorded.auth_headers.lock().unwrap().push(
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    );

    if let Some(status) = state.fail_status {
        return Err((
            StatusCode::from_u16(status).unwrap(),
            "Access denied".to_string(),
        ));
    }

    let offset: usize = query
        .get("pg[offset]")
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let size = state.page_sizes.get(request).copied().unwrap_or(0);
    let page: Vec<Value> = (offset..offset + size).map(scenario_json).collect();

    Ok(Json(json!({ "scenarios": page, "pg": { "limit": 100, "offset": offset } })))
}

async fn interface(Path(id): Path<u64>) -> Result<Json<Value>, (StatusCode, String)> {
    if id == 404 {
        return Err((StatusCode::NOT_FOUND, String::new()));
    }
    let fixture = include_str!("fixtures/interface.json");
    Ok(Json(serde_json::from_str(fixture).unwrap()))
}

/// Start a mock Make API serving pages of the given sizes, in order
pub async fn spawn_make_mock(
    page_sizes: Vec<usize>,
    fail_status: Option<u16>,
) -> (String, Recorded) {
    let recorded = Recorded::default();
    let state = MockState {
        page_sizes,
        fail_status,
        recorded: recorded.clone(),
    };

    let app = Router::new()
        .route("/api/v2/scenarios", get(scenarios))
        .route("/api/v2/scenarios/{id}/interface", get(interface))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), recorded)
}
