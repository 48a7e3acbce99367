//! HTTP request handlers.
//!
//! - [`shortlinks`] - the five REST operations on `/api/v1/shortlink`
//! - [`redirect`] - redirect serving on `/{name}`
//! - [`health`] - liveness and readiness probes

pub mod health;
pub mod redirect;
pub mod shortlinks;

pub use health::{healthz_handler, readyz_handler};
pub use redirect::redirect_handler;
pub use shortlinks::{
    create_shortlink_handler, delete_shortlink_handler, get_shortlink_handler,
    list_shortlinks_handler, update_shortlink_handler,
};
