use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{GatewayError, ListResponse, OperationResult, StorageGateway};
use crate::context::SessionContext;
use crate::models::EntityKind;
use crate::schema::StorageRecord;

type Table = Vec<StorageRecord>;

/// In-process backend, partitioned by company and kind.
///
/// Records keep insertion order. Kinds registered with
/// [`MemoryGateway::with_envelope`] answer `list` the way envelope-style
/// endpoints do.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    tables: RwLock<HashMap<(String, EntityKind), Table>>,
    enveloped: HashSet<EntityKind>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_envelope(mut self, kind: EntityKind) -> Self {
        self.enveloped.insert(kind);
        self
    }

    /// Inserts records as-is, keeping any ids they already carry.
    pub async fn seed(&self, ctx: &SessionContext, records: impl IntoIterator<Item = StorageRecord>) {
        let mut tables = self.tables.write().await;
        for record in records {
            tables
                .entry((ctx.scope().to_string(), record.kind()))
                .or_default()
                .push(record);
        }
    }

    pub async fn len(&self, ctx: &SessionContext, kind: EntityKind) -> usize {
        let tables = self.tables.read().await;
        tables
            .get(&(ctx.scope().to_string(), kind))
            .map_or(0, Vec::len)
    }
}

#[async_trait]
impl StorageGateway for MemoryGateway {
    async fn list(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
    ) -> Result<ListResponse, GatewayError> {
        let tables = self.tables.read().await;
        let records = tables
            .get(&(ctx.scope().to_string(), kind))
            .cloned()
            .unwrap_or_default();

        if self.enveloped.contains(&kind) {
            Ok(ListResponse::Envelope {
                success: true,
                data: Some(records),
            })
        } else {
            Ok(ListResponse::Records(records))
        }
    }

    async fn create(
        &self,
        ctx: &SessionContext,
        mut record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        record.set_id(Uuid::new_v4().to_string());
        let result = OperationResult::stored(&record)?;

        let mut tables = self.tables.write().await;
        tables
            .entry((ctx.scope().to_string(), record.kind()))
            .or_default()
            .push(record);
        Ok(result)
    }

    async fn update(
        &self,
        ctx: &SessionContext,
        id: &str,
        mut record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        let kind = record.kind();
        record.set_id(id);

        let mut tables = self.tables.write().await;
        let slot = tables
            .get_mut(&(ctx.scope().to_string(), kind))
            .and_then(|table| table.iter_mut().find(|r| r.id() == Some(id)))
            .ok_or_else(|| GatewayError::NotFound {
                kind,
                id: id.to_string(),
            })?;
        *slot = record;
        OperationResult::stored(slot)
    }

    async fn delete(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
        id: &str,
    ) -> Result<(), GatewayError> {
        let mut tables = self.tables.write().await;
        let table = tables.get_mut(&(ctx.scope().to_string(), kind));
        let position = table
            .as_ref()
            .and_then(|table| table.iter().position(|r| r.id() == Some(id)));

        match (table, position) {
            (Some(table), Some(index)) => {
                table.remove(index);
                Ok(())
            }
            _ => Err(GatewayError::NotFound {
                kind,
                id: id.to_string(),
            }),
        }
    }
}
