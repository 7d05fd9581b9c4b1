//! The storage backend seen by the orchestrator.
//!
//! Adapters translate these calls into their own transport. The orchestrator
//! only ever sees storage-shape records, [`ListResponse`] and
//! [`OperationResult`].

mod memory;

pub use memory::MemoryGateway;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::context::SessionContext;
use crate::models::EntityKind;
use crate::schema::StorageRecord;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },

    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Malformed backend response: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps any transport or driver error.
    pub fn backend(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        GatewayError::Backend(error.into())
    }
}

/// A list answer, either a bare sequence or a `{success, data}` envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ListResponse {
    Records(Vec<StorageRecord>),
    Envelope {
        success: bool,
        data: Option<Vec<StorageRecord>>,
    },
}

impl ListResponse {
    /// Normalises either form to a sequence. A failed envelope, or one
    /// without data, is an empty list.
    pub fn into_records(self) -> Vec<StorageRecord> {
        match self {
            ListResponse::Records(records) => records,
            ListResponse::Envelope {
                success: true,
                data: Some(records),
            } => records,
            ListResponse::Envelope { .. } => Vec::new(),
        }
    }

    /// Parses a wire body of either form as records of `kind`.
    pub fn from_json(kind: EntityKind, body: Value) -> Result<Self, GatewayError> {
        match body {
            Value::Array(rows) => Ok(ListResponse::Records(parse_rows(kind, rows))),
            Value::Object(mut map) => {
                let success = match map.get("success") {
                    Some(Value::Bool(flag)) => *flag,
                    Some(other) => {
                        return Err(GatewayError::Malformed(format!(
                            "envelope 'success' must be a boolean, got {}",
                            other
                        )))
                    }
                    None => {
                        return Err(GatewayError::Malformed(
                            "expected a list or a {success, data} envelope".to_string(),
                        ))
                    }
                };
                if !success {
                    return Ok(ListResponse::Envelope {
                        success: false,
                        data: None,
                    });
                }
                let data = match map.remove("data") {
                    Some(Value::Array(rows)) => Some(parse_rows(kind, rows)),
                    Some(Value::Null) | None => None,
                    Some(other) => {
                        return Err(GatewayError::Malformed(format!(
                            "envelope 'data' must be a list, got {}",
                            other
                        )))
                    }
                };
                Ok(ListResponse::Envelope { success, data })
            }
            other => Err(GatewayError::Malformed(format!(
                "expected a list or a {{success, data}} envelope, got {}",
                other
            ))),
        }
    }
}

/// Rows that are not objects are dropped; the rest keep their order.
fn parse_rows(kind: EntityKind, rows: Vec<Value>) -> Vec<StorageRecord> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match StorageRecord::from_json(kind, row) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%kind, index, error = %e, "Skipping unreadable row");
                None
            }
        })
        .collect()
}

/// Uniform answer to create/update/delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationResult {
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "crate::schema::lenient::id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl OperationResult {
    /// Result of a persisted record, echoing it back.
    pub fn stored(record: &StorageRecord) -> Result<Self, GatewayError> {
        Ok(Self {
            success: true,
            id: record.id().map(str::to_string),
            data: Some(serde_json::to_value(record)?),
        })
    }

    pub fn deleted() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }
}

/// Remote data store, scoped per call by the session context.
#[async_trait]
pub trait StorageGateway: Send + Sync {
    async fn list(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
    ) -> Result<ListResponse, GatewayError>;

    async fn create(
        &self,
        ctx: &SessionContext,
        record: StorageRecord,
    ) -> Result<OperationResult, GatewayError>;

    async fn update(
        &self,
        ctx: &SessionContext,
        id: &str,
        record: StorageRecord,
    ) -> Result<OperationResult, GatewayError>;

    async fn delete(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
        id: &str,
    ) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_list_passes_through() {
        let response = ListResponse::from_json(
            EntityKind::Warehouse,
            json!([{"nome": "Central"}, {"nome": "Viana"}]),
        )
        .unwrap();
        assert_eq!(response.into_records().len(), 2);
    }

    #[test]
    fn test_failed_envelope_is_empty() {
        let response =
            ListResponse::from_json(EntityKind::Purchase, json!({"success": false})).unwrap();
        assert_eq!(
            response,
            ListResponse::Envelope {
                success: false,
                data: None
            }
        );
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_envelope_without_data_is_empty() {
        let response = ListResponse::Envelope {
            success: true,
            data: None,
        };
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_failed_envelope_ignores_data() {
        let response = ListResponse::from_json(
            EntityKind::Warehouse,
            json!({"success": false, "data": [{"nome": "Central"}]}),
        )
        .unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_envelope_with_data() {
        let response = ListResponse::from_json(
            EntityKind::Purchase,
            json!({"success": true, "data": [{"fornecedor_id": "f-1", "total": "1140"}]}),
        )
        .unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].kind(), EntityKind::Purchase);
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            ListResponse::from_json(EntityKind::Client, json!("oops")),
            Err(GatewayError::Malformed(_))
        ));
        assert!(matches!(
            ListResponse::from_json(EntityKind::Client, json!({"rows": []})),
            Err(GatewayError::Malformed(_))
        ));
        assert!(matches!(
            ListResponse::from_json(EntityKind::Client, json!({"success": "yes"})),
            Err(GatewayError::Malformed(_))
        ));
    }

    #[test]
    fn test_failed_envelope_skips_unreadable_data() {
        let response = ListResponse::from_json(
            EntityKind::Client,
            json!({"success": false, "data": [{"nome": 5}]}),
        )
        .unwrap();
        assert!(response.into_records().is_empty());

        let response = ListResponse::from_json(
            EntityKind::Client,
            json!({"success": false, "data": {"erro": "sessão expirada"}}),
        )
        .unwrap();
        assert!(response.into_records().is_empty());
    }

    #[test]
    fn test_loose_rows_keep_order() {
        let response = ListResponse::from_json(
            EntityKind::Purchase,
            json!([
                {"total": 10, "itens": null},
                {"total": 5, "itens": "nenhum"}
            ]),
        )
        .unwrap();
        let records = response.into_records();
        assert_eq!(records.len(), 2);
        match (&records[0], &records[1]) {
            (StorageRecord::Purchase(first), StorageRecord::Purchase(second)) => {
                assert_eq!(first.total, Some(10.0));
                assert_eq!(second.total, Some(5.0));
                assert_eq!(first.items, None);
                assert_eq!(second.items, None);
            }
            other => panic!("expected purchases, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_text_fields_are_read() {
        let records =
            ListResponse::from_json(EntityKind::Client, json!([{"nome": 5, "email": 7}]))
                .unwrap()
                .into_records();
        match &records[0] {
            StorageRecord::Client(client) => {
                assert_eq!(client.name.as_deref(), Some("5"));
                assert_eq!(client.email.as_deref(), Some("7"));
            }
            other => panic!("expected a client, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_rows_are_skipped() {
        let records = ListResponse::from_json(
            EntityKind::Warehouse,
            json!([{"nome": "Central"}, 3, "x", {"nome": "Viana"}]),
        )
        .unwrap()
        .into_records();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_operation_result_accepts_numeric_id() {
        let result: OperationResult =
            serde_json::from_value(json!({"success": true, "id": 42})).unwrap();
        assert_eq!(result.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_operation_result_serialization() {
        let json = serde_json::to_value(OperationResult::deleted()).unwrap();
        assert_eq!(json, json!({"success": true}));
    }
}
