//! 服务信息路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | / | GET | 服务信息和用法示例 | 无 |
//!
//! The root payload doubles as the health check for the hosting platform
//! and as quick documentation for whoever wires up the integration.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::catalog::TypeSummary;
use crate::core::ServerState;

/// 服务信息路由 - 公共路由
pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(info))
}

/// 服务信息响应
#[derive(Serialize)]
pub struct InfoResponse {
    /// 状态行
    status: &'static str,
    /// 版本号
    version: &'static str,
    /// 桌台总数
    total_tables: usize,
    /// 每种区域的桌台数
    tables_by_type: TypeSummary,
    /// 接口一览
    endpoints: Vec<EndpointInfo>,
    /// 示例请求
    example_request: ExampleRequest,
}

#[derive(Serialize)]
pub struct EndpointInfo {
    method: &'static str,
    path: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleRequest {
    url: &'static str,
    method: &'static str,
    body: ExampleBody,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleBody {
    party_size: u32,
    table_preference: &'static str,
}

/// GET / - 服务信息
pub async fn info(State(state): State<ServerState>) -> Json<InfoResponse> {
    Json(InfoResponse {
        status: "Table selection API is running",
        version: env!("CARGO_PKG_VERSION"),
        total_tables: state.catalog.len(),
        tables_by_type: state.catalog.summary(),
        endpoints: vec![
            EndpointInfo {
                method: "POST",
                path: "/select-table",
                description: "Select best table based on party size and preference",
            },
            EndpointInfo {
                method: "GET",
                path: "/tables",
                description: "List tables, optionally filtered by type and capacity",
            },
            EndpointInfo {
                method: "GET",
                path: "/table/{externalId}",
                description: "Look up a table by its calendar id",
            },
            EndpointInfo {
                method: "GET",
                path: "/",
                description: "Service info",
            },
        ],
        example_request: ExampleRequest {
            url: "/select-table",
            method: "POST",
            body: ExampleBody {
                party_size: 4,
                table_preference: "Tafel Raam",
            },
        },
    })
}
