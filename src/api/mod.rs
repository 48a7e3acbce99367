//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP verbs on `/api/v1/shortlink` into store calls and store
//! results back into status codes and negotiated bodies.
//!
//! # Modules
//!
//! - [`negotiation`] - `Accept` handling (`text/plain` or `application/json`)
//! - [`error`] - store error to HTTP status table
//! - [`dto`] - response bodies that are not domain entities
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - tracing and security headers
//! - [`routes`] - route configuration

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod negotiation;
pub mod routes;
