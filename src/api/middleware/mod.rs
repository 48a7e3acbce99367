//! HTTP middleware.
//!
//! Provides request tracing and security response headers. Neither affects
//! handler behaviour.

pub mod security_headers;
pub mod tracing;
