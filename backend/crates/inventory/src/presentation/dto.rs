//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::ServerRecord;
use crate::domain::value_objects::{RawPort, ServerInput};

pub const SERVER_ADDED: &str = "Server added successfully";
pub const SERVER_UPDATED: &str = "Server updated successfully";
pub const SERVER_DELETED: &str = "Server deleted successfully";

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /add` and `PUT /update/{id}`
///
/// `port` may be a JSON integer or a string of digits.
#[derive(Debug, Default, Deserialize)]
pub struct ServerPayload {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub port: Option<Value>,
}

impl From<ServerPayload> for ServerInput {
    fn from(payload: ServerPayload) -> Self {
        ServerInput {
            ip: payload.ip,
            name: payload.name,
            port: payload.port.and_then(raw_port),
        }
    }
}

fn raw_port(value: Value) -> Option<RawPort> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(n.as_i64().map_or(RawPort::Unsupported, RawPort::Integer)),
        Value::String(s) => Some(RawPort::Text(s)),
        _ => Some(RawPort::Unsupported),
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ServerResponse {
    pub id: i64,
    pub ip: String,
    pub name: String,
    pub port: u16,
}

impl From<ServerRecord> for ServerResponse {
    fn from(record: ServerRecord) -> Self {
        Self {
            id: record.id.get(),
            ip: record.ip,
            name: record.name,
            port: record.port,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServerMutationResponse {
    pub message: &'static str,
    pub server: ServerResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Failed probe that still produced tool output
#[derive(Debug, Serialize)]
pub struct ProbeFailureResponse {
    pub error: &'static str,
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}
