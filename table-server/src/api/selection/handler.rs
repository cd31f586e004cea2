//! Table Selection API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{Table, TableRef, TableType};
use crate::core::{ApiError, Result, ServerState};
use crate::selection::{self, ActionKind, Selection, SelectionMethod};

/// POST /select-table 请求体
///
/// `partySize` arrives as a JSON number or a numeric string - the
/// scheduling integration sends both, so it is validated by hand instead
/// of letting the deserializer reject one of the two shapes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectTableRequest {
    party_size: Option<Value>,
    table_preference: Option<String>,
    action_type: Option<String>,
}

/// 选中结果的决策依据
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reasoning {
    party_size: u32,
    requested_table: Option<String>,
    selection_method: SelectionMethod,
    table_type: TableType,
    capacity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedTableResponse {
    success: bool,
    selected_table: Table,
    reasoning: Reasoning,
}

/// 取消/改期响应：完整桌台列表，供调用方逐个日历查找预订
#[derive(Debug, Serialize)]
pub struct ActionListingResponse {
    success: bool,
    action: ActionKind,
    tables: Vec<TableRef>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SelectTableResponse {
    Selected(SelectedTableResponse),
    Action(ActionListingResponse),
}

/// POST /select-table - 为客人选择最合适的桌台
pub async fn select_table(
    State(state): State<ServerState>,
    Json(request): Json<SelectTableRequest>,
) -> Result<Json<SelectTableResponse>> {
    // Cancel/reschedule skips selection: the caller needs every calendar,
    // not a single table.
    if let Some(action) = request.action_type.as_deref().and_then(selection::match_action) {
        return Ok(Json(SelectTableResponse::Action(ActionListingResponse {
            success: true,
            action,
            tables: state.catalog.refs(),
        })));
    }

    let party_size = match &request.party_size {
        None => return Err(ApiError::MissingParameter("partySize")),
        Some(value) => parse_party_size(value)?,
    };

    match selection::select_table(&state.catalog, party_size, request.table_preference.as_deref()) {
        Selection::Chosen { table, method } => {
            let reasoning = Reasoning {
                party_size,
                requested_table: request.table_preference.clone(),
                selection_method: method,
                table_type: table.table_type,
                capacity: table.capacity,
            };
            Ok(Json(SelectTableResponse::Selected(SelectedTableResponse {
                success: true,
                selected_table: table.clone(),
                reasoning,
            })))
        }
        Selection::NoneSuitable => Err(ApiError::NoSuitableTable {
            party_size,
            preference: request.table_preference,
            available: state.catalog.snapshot(),
        }),
    }
}

/// Validate the flexible `partySize` field into a positive integer.
fn parse_party_size(value: &Value) -> Result<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };

    match parsed.and_then(|n| u32::try_from(n).ok()) {
        Some(n) if n >= 1 => Ok(n),
        _ => Err(ApiError::InvalidParameter {
            name: "partySize",
            reason: format!("expected a positive integer, got {value}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_party_size_number() {
        assert_eq!(parse_party_size(&json!(4)).unwrap(), 4);
    }

    #[test]
    fn test_parse_party_size_numeric_string() {
        assert_eq!(parse_party_size(&json!("4")).unwrap(), 4);
        assert_eq!(parse_party_size(&json!(" 10 ")).unwrap(), 10);
    }

    #[test]
    fn test_parse_party_size_rejects_garbage() {
        assert!(parse_party_size(&json!("vier")).is_err());
        assert!(parse_party_size(&json!(0)).is_err());
        assert!(parse_party_size(&json!(-3)).is_err());
        assert!(parse_party_size(&json!(4.5)).is_err());
        assert!(parse_party_size(&json!(true)).is_err());
    }
}
