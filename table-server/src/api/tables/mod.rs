//! Table Listing API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/tables", get(handler::list))
        .route("/table/{external_id}", get(handler::get_by_external_id))
}
