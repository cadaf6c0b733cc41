//! Calculator endpoints mapping onto the core arithmetic operations.

use actix_web::{web, HttpResponse};

use calc_core::operations;

use crate::dto::calculator::{OperationRequest, OperationResponse};
use crate::handlers::error::handle_domain_error;

/// Handler for POST /add
pub async fn add(request: web::Json<OperationRequest>) -> HttpResponse {
    HttpResponse::Ok().json(OperationResponse {
        result: operations::add(request.a, request.b),
    })
}

/// Handler for POST /subtract
pub async fn subtract(request: web::Json<OperationRequest>) -> HttpResponse {
    HttpResponse::Ok().json(OperationResponse {
        result: operations::subtract(request.a, request.b),
    })
}

/// Handler for POST /multiply
pub async fn multiply(request: web::Json<OperationRequest>) -> HttpResponse {
    HttpResponse::Ok().json(OperationResponse {
        result: operations::multiply(request.a, request.b),
    })
}

/// Handler for POST /divide
///
/// Responds 400 when the divisor is zero.
pub async fn divide(request: web::Json<OperationRequest>) -> HttpResponse {
    match operations::divide(request.a, request.b) {
        Ok(result) => HttpResponse::Ok().json(OperationResponse { result }),
        Err(error) => handle_domain_error(error),
    }
}
