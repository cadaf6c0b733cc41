//! HTTP surface for the calculator backend: registration, login, the
//! protected current-user endpoint and the arithmetic endpoints.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
