//! Calculator request and response payloads.

use serde::{Deserialize, Serialize};

/// Operands for an arithmetic endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRequest {
    pub a: f64,
    pub b: f64,
}

/// Result of a successful operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub result: f64,
}
