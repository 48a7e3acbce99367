//! API route configuration.

use crate::api::handlers::{
    create_shortlink_handler, delete_shortlink_handler, get_shortlink_handler,
    list_shortlinks_handler, update_shortlink_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Version 1 shortlink routes, nested under `/api/v1`.
///
/// # Endpoints
///
/// - `GET    /shortlink/`        - List shortlinks (also without trailing slash)
/// - `GET    /shortlink/{name}`  - Get a shortlink
/// - `POST   /shortlink/{name}`  - Create a shortlink
/// - `PUT    /shortlink/{name}`  - Replace a shortlink's spec
/// - `DELETE /shortlink/{name}`  - Delete a shortlink
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/shortlink/", get(list_shortlinks_handler))
        .route("/shortlink", get(list_shortlinks_handler))
        .route(
            "/shortlink/{name}",
            get(get_shortlink_handler)
                .post(create_shortlink_handler)
                .put(update_shortlink_handler)
                .delete(delete_shortlink_handler),
        )
}
