use async_trait::async_trait;
use gestor_core::{
    EntityKind, GatewayError, ListResponse, OperationResult, SessionContext, StorageGateway,
    StorageRecord,
};
use uuid::Uuid;

use crate::db::RecordRepository;

/// Local backend over the `records` table.
pub struct SqliteGateway {
    repo: RecordRepository,
}

impl SqliteGateway {
    pub fn new(repo: RecordRepository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl StorageGateway for SqliteGateway {
    async fn list(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
    ) -> Result<ListResponse, GatewayError> {
        let records = self
            .repo
            .list(ctx.scope(), kind)
            .await
            .map_err(GatewayError::backend)?;
        Ok(ListResponse::Records(records))
    }

    async fn create(
        &self,
        ctx: &SessionContext,
        mut record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        record.set_id(Uuid::new_v4().to_string());
        self.repo
            .insert(ctx.scope(), &record)
            .await
            .map_err(GatewayError::backend)?;
        OperationResult::stored(&record)
    }

    async fn update(
        &self,
        ctx: &SessionContext,
        id: &str,
        mut record: StorageRecord,
    ) -> Result<OperationResult, GatewayError> {
        record.set_id(id);
        let found = self
            .repo
            .update(ctx.scope(), id, &record)
            .await
            .map_err(GatewayError::backend)?;
        if !found {
            return Err(GatewayError::NotFound {
                kind: record.kind(),
                id: id.to_string(),
            });
        }
        OperationResult::stored(&record)
    }

    async fn delete(
        &self,
        ctx: &SessionContext,
        kind: EntityKind,
        id: &str,
    ) -> Result<(), GatewayError> {
        let found = self
            .repo
            .delete(ctx.scope(), kind, id)
            .await
            .map_err(GatewayError::backend)?;
        if found {
            Ok(())
        } else {
            Err(GatewayError::NotFound {
                kind,
                id: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use gestor_core::{
        Action, AuditRecorder, Client, Entity, MemorySink, Orchestrator, OrchestratorError,
    };
    use std::sync::Arc;
    use tempfile::tempdir;

    async fn orchestrator(dir: &tempfile::TempDir) -> Orchestrator {
        let pool = init_db(&dir.path().join("gestor.db")).await.unwrap();
        Orchestrator::new(
            Arc::new(SqliteGateway::new(RecordRepository::new(pool))),
            AuditRecorder::new(Arc::new(MemorySink::new())),
            SessionContext::new("emp-1"),
        )
    }

    #[tokio::test]
    async fn test_create_update_delete_cycle() {
        let dir = tempdir().unwrap();
        let orchestrator = orchestrator(&dir).await;
        let client = Client::new("Kianda Comercial", "5417000001");

        let created = orchestrator
            .process_operation(Action::Create, client.clone().into(), None)
            .await
            .unwrap();
        let id = created.id.unwrap();

        let renamed = Client {
            name: "Kianda Comercial Lda".to_string(),
            ..client
        };
        orchestrator
            .process_operation(Action::Update, renamed.into(), Some(&id))
            .await
            .unwrap();

        let clients = orchestrator
            .synchronize_module(EntityKind::Client)
            .await
            .unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].id(), Some(id.as_str()));
        assert_eq!(clients[0].label(), "Kianda Comercial Lda");

        orchestrator
            .process_operation(Action::Delete, Entity::blank(EntityKind::Client), Some(&id))
            .await
            .unwrap();
        assert!(orchestrator
            .synchronize_module(EntityKind::Client)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_storage_error() {
        let dir = tempdir().unwrap();
        let orchestrator = orchestrator(&dir).await;

        let err = orchestrator
            .process_operation(
                Action::Update,
                Client::new("Kianda Comercial", "5417000001").into(),
                Some("missing"),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::Storage(GatewayError::NotFound { .. })
        ));
    }
}
