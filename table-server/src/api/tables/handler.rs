//! Table Listing API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use crate::catalog::{ListFilter, Table, TableType, TypeSummary};
use crate::core::{ApiError, Result, ServerState};

/// GET /tables 查询参数
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(rename = "type")]
    pub table_type: Option<String>,
    pub min_capacity: Option<u32>,
    pub max_capacity: Option<u32>,
}

/// GET /tables 响应
///
/// `total_tables` and `summary` always describe the full catalog, also
/// when filters narrow `tables` down.
#[derive(Debug, Serialize)]
pub struct ListTablesResponse {
    pub success: bool,
    pub tables: Vec<Table>,
    pub total_tables: usize,
    pub summary: TypeSummary,
}

#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub success: bool,
    pub table: Table,
}

/// GET /tables - 按条件列出桌台
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListTablesResponse>> {
    let table_type = match query.table_type.as_deref() {
        None => None,
        Some(raw) => Some(TableType::parse(raw).ok_or_else(|| ApiError::InvalidParameter {
            name: "type",
            reason: format!("unknown table type '{raw}'"),
        })?),
    };

    let filter = ListFilter {
        table_type,
        min_capacity: query.min_capacity,
        max_capacity: query.max_capacity,
    };

    Ok(Json(ListTablesResponse {
        success: true,
        tables: state.catalog.filter(&filter),
        total_tables: state.catalog.len(),
        summary: state.catalog.summary(),
    }))
}

/// GET /table/{external_id} - 按日历 ID 查找桌台
pub async fn get_by_external_id(
    State(state): State<ServerState>,
    Path(external_id): Path<String>,
) -> Result<Json<TableResponse>> {
    let table = state
        .catalog
        .find_by_external_id(&external_id)
        .ok_or(ApiError::UnknownExternalId(external_id))?;

    Ok(Json(TableResponse {
        success: true,
        table: table.clone(),
    }))
}
