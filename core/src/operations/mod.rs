//! Stateless arithmetic operations behind the calculator endpoints.

use crate::errors::{DomainError, DomainResult};

/// Adds two numbers.
pub fn add(a: f64, b: f64) -> f64 {
    let result = a + b;
    tracing::debug!("add: {a} + {b} = {result}");
    result
}

/// Subtracts `b` from `a`.
pub fn subtract(a: f64, b: f64) -> f64 {
    let result = a - b;
    tracing::debug!("subtract: {a} - {b} = {result}");
    result
}

/// Multiplies two numbers.
pub fn multiply(a: f64, b: f64) -> f64 {
    let result = a * b;
    tracing::debug!("multiply: {a} * {b} = {result}");
    result
}

/// Divides `a` by `b`. A zero divisor is a validation error, not a panic
/// or an infinity.
pub fn divide(a: f64, b: f64) -> DomainResult<f64> {
    if b == 0.0 {
        return Err(DomainError::Validation {
            message: "Division by zero is not allowed.".to_string(),
        });
    }
    let result = a / b;
    tracing::debug!("divide: {a} / {b} = {result}");
    Ok(result)
}
