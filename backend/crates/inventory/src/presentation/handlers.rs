//! HTTP Handlers

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use kernel::{AppError, AuthContext};
use std::sync::Arc;

use crate::application::{
    AddServerUseCase, DeleteServerUseCase, ListServersUseCase, ProbeHostUseCase,
    UpdateServerUseCase,
};
use crate::domain::entities::ServerId;
use crate::domain::probe::{ProbeOutcome, ProbeReport, Prober};
use crate::domain::repository::ServerRepository;
use crate::domain::value_objects::ServerInput;
use crate::error::{InventoryError, InventoryResult};
use crate::presentation::dto::{
    HealthResponse, MessageResponse, ProbeFailureResponse, SERVER_ADDED, SERVER_DELETED,
    SERVER_UPDATED, ServerMutationResponse, ServerPayload, ServerResponse,
};
use crate::presentation::pages::index_page;

/// Shared state for inventory handlers
#[derive(Clone)]
pub struct InventoryAppState<R, P>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub prober: Arc<P>,
}

// ============================================================================
// Request helpers
// ============================================================================

/// Unwrap a JSON body. A body that fails to parse is reported as
/// `Unauthorized` to non-admins so they learn nothing about validation.
fn server_input(
    auth: &AuthContext,
    payload: Result<Json<ServerPayload>, JsonRejection>,
) -> InventoryResult<ServerInput> {
    match payload {
        Ok(Json(payload)) => Ok(payload.into()),
        Err(_) if !auth.is_admin() => Err(InventoryError::Unauthorized),
        Err(rejection) => Err(InventoryError::MalformedBody(rejection.body_text())),
    }
}

/// Unwrap an id path segment. Non-numeric ids cannot name a server.
fn server_id(
    auth: &AuthContext,
    path: Result<Path<i64>, PathRejection>,
) -> InventoryResult<ServerId> {
    match path {
        Ok(Path(id)) => Ok(ServerId(id)),
        Err(_) if !auth.is_admin() => Err(InventoryError::Unauthorized),
        Err(_) => Err(InventoryError::ServerNotFound),
    }
}

// ============================================================================
// Registry
// ============================================================================

/// GET /
pub async fn index<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    auth: AuthContext,
) -> InventoryResult<Html<String>>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let servers = ListServersUseCase::new(state.repo.clone()).execute().await?;
    Ok(Html(index_page(&servers, &auth)))
}

/// GET /list
pub async fn list_servers<R, P>(
    State(state): State<InventoryAppState<R, P>>,
) -> InventoryResult<Json<Vec<ServerResponse>>>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let servers = ListServersUseCase::new(state.repo.clone()).execute().await?;
    Ok(Json(servers.into_iter().map(ServerResponse::from).collect()))
}

/// POST /add
pub async fn add_server<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    auth: AuthContext,
    payload: Result<Json<ServerPayload>, JsonRejection>,
) -> InventoryResult<Json<ServerMutationResponse>>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let input = server_input(&auth, payload)?;
    let record = AddServerUseCase::new(state.repo.clone())
        .execute(&auth, &input)
        .await?;

    Ok(Json(ServerMutationResponse {
        message: SERVER_ADDED,
        server: record.into(),
    }))
}

/// PUT /update/{id}
pub async fn update_server<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    auth: AuthContext,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ServerPayload>, JsonRejection>,
) -> InventoryResult<Json<ServerMutationResponse>>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let id = server_id(&auth, path)?;
    let input = server_input(&auth, payload)?;
    let record = UpdateServerUseCase::new(state.repo.clone())
        .execute(&auth, id, &input)
        .await?;

    Ok(Json(ServerMutationResponse {
        message: SERVER_UPDATED,
        server: record.into(),
    }))
}

/// DELETE /delete/{id}
pub async fn delete_server<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    auth: AuthContext,
    path: Result<Path<i64>, PathRejection>,
) -> InventoryResult<Json<MessageResponse>>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let id = server_id(&auth, path)?;
    DeleteServerUseCase::new(state.repo.clone())
        .execute(&auth, id)
        .await?;

    Ok(Json(MessageResponse {
        message: SERVER_DELETED.to_string(),
        output: None,
    }))
}

/// GET /health
pub async fn health<R, P>(State(state): State<InventoryAppState<R, P>>) -> Response
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    match state.repo.health_check().await {
        Ok(()) => Json(HealthResponse {
            status: "ok",
            database: "ok",
        })
        .into_response(),
        Err(e) => {
            e.log();
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unavailable",
                }),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Probes
// ============================================================================

/// GET /ping/{ip}
pub async fn ping<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    Path(ip): Path<String>,
) -> InventoryResult<Response>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let report = ProbeHostUseCase::new(state.prober.clone()).ping(&ip).await?;
    Ok(ping_response(report))
}

/// GET /telnet/{ip}/{port}
pub async fn telnet<R, P>(
    State(state): State<InventoryAppState<R, P>>,
    Path((ip, port)): Path<(String, String)>,
) -> InventoryResult<Response>
where
    R: ServerRepository + Clone + Send + Sync + 'static,
    P: Prober + Clone + Send + Sync + 'static,
{
    let report = ProbeHostUseCase::new(state.prober.clone())
        .tcp_connect(&ip, &port)
        .await?;
    Ok(telnet_response(report))
}

fn ping_response(report: ProbeReport) -> Response {
    match report.outcome {
        ProbeOutcome::Reachable { output } => Json(MessageResponse {
            message: "Ping successful".to_string(),
            output: Some(output),
        })
        .into_response(),
        ProbeOutcome::Unreachable { output } => (
            StatusCode::BAD_REQUEST,
            Json(ProbeFailureResponse {
                error: "Ping failed",
                output,
            }),
        )
            .into_response(),
        ProbeOutcome::TimedOut => AppError::request_timeout("Ping timed out").into_response(),
        ProbeOutcome::Refused => {
            AppError::internal("Ping error: connection refused").into_response()
        }
        ProbeOutcome::Failed { message } => {
            AppError::internal(format!("Ping error: {message}")).into_response()
        }
    }
}

fn telnet_response(report: ProbeReport) -> Response {
    let target = report.target;
    match report.outcome {
        ProbeOutcome::Reachable { .. } => Json(MessageResponse {
            message: format!("Telnet successful to {target}"),
            output: None,
        })
        .into_response(),
        ProbeOutcome::Refused => {
            AppError::bad_request(format!("Connection refused to {target}")).into_response()
        }
        ProbeOutcome::TimedOut => AppError::internal("Telnet error: timed out").into_response(),
        ProbeOutcome::Unreachable { output: message } | ProbeOutcome::Failed { message } => {
            AppError::internal(format!("Telnet error: {message}")).into_response()
        }
    }
}
