//! Coordinates a single intent end to end.
//!
//! Mutations go audit → precondition → map → stamp → validate → gateway.
//! Reads go gateway → envelope normalisation → map, preserving gateway
//! order. The orchestrator holds no mutable state, so one instance can serve
//! any number of concurrent intents.

mod error;

pub use error::OrchestratorError;

use std::sync::Arc;

use futures::future::try_join_all;

use crate::audit::AuditRecorder;
use crate::context::SessionContext;
use crate::gateway::{OperationResult, StorageGateway};
use crate::mapper;
use crate::models::{Action, Entity, EntityKind};
use crate::schema::StorageRecord;
use crate::validator::{self, Validation};

pub struct Orchestrator {
    gateway: Arc<dyn StorageGateway>,
    audit: AuditRecorder,
    context: SessionContext,
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<dyn StorageGateway>,
        audit: AuditRecorder,
        context: SessionContext,
    ) -> Self {
        Self {
            gateway,
            audit,
            context,
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Runs one mutating intent.
    ///
    /// `id` is required for update and delete. Create and update return the
    /// gateway's result unchanged; delete returns a bare success.
    pub async fn process_operation(
        &self,
        action: Action,
        payload: Entity,
        id: Option<&str>,
    ) -> Result<OperationResult, OrchestratorError> {
        let kind = payload.kind();
        self.audit.record(action, kind, &payload);

        let id = id.map(str::trim).filter(|id| !id.is_empty());
        if matches!(action, Action::Update | Action::Delete) && id.is_none() {
            return Err(OrchestratorError::Precondition { action, kind });
        }

        match (action, id) {
            (Action::Delete, Some(id)) => {
                tracing::debug!(%kind, id, "Deleting");
                self.gateway.delete(&self.context, kind, id).await?;
                tracing::info!(%kind, id, "Deleted");
                Ok(OperationResult::deleted())
            }
            (Action::Update, Some(id)) => {
                let record = self.prepare(&payload)?;
                tracing::debug!(%kind, id, "Updating");
                let result = self.gateway.update(&self.context, id, record).await?;
                tracing::info!(%kind, id, "Updated");
                Ok(result)
            }
            _ => {
                let record = self.prepare(&payload)?;
                tracing::debug!(%kind, "Creating");
                let result = self.gateway.create(&self.context, record).await?;
                tracing::info!(%kind, id = result.id.as_deref().unwrap_or("-"), "Created");
                Ok(result)
            }
        }
    }

    /// Loads every record of `kind`, in gateway order, as application
    /// records. A failed or empty envelope yields an empty list.
    pub async fn synchronize_module(
        &self,
        kind: EntityKind,
    ) -> Result<Vec<Entity>, OrchestratorError> {
        tracing::debug!(module = kind.module(), "Synchronizing");
        let records = self.gateway.list(&self.context, kind).await?.into_records();

        let entities: Vec<Entity> = records
            .into_iter()
            .filter(|record| {
                let matches = record.kind() == kind;
                if !matches {
                    tracing::warn!(
                        module = kind.module(),
                        found = %record.kind(),
                        "Skipping record of another kind"
                    );
                }
                matches
            })
            .map(mapper::to_application)
            .collect();

        tracing::debug!(module = kind.module(), count = entities.len(), "Synchronized");
        Ok(entities)
    }

    /// Synchronizes several modules concurrently, returning them in the
    /// order requested. The first failure aborts the batch.
    pub async fn synchronize_modules(
        &self,
        kinds: &[EntityKind],
    ) -> Result<Vec<Vec<Entity>>, OrchestratorError> {
        try_join_all(kinds.iter().map(|kind| self.synchronize_module(*kind))).await
    }

    /// Validates a payload as it would be persisted, without auditing or
    /// touching the gateway.
    pub fn check(&self, payload: &Entity) -> Validation {
        let mut record = mapper::to_storage(payload);
        self.context.stamp(&mut record);
        validator::validate(&record)
    }

    fn prepare(&self, payload: &Entity) -> Result<StorageRecord, OrchestratorError> {
        let mut record = mapper::to_storage(payload);
        self.context.stamp(&mut record);

        let validation = validator::validate(&record);
        if !validation.valid {
            tracing::debug!(kind = %record.kind(), errors = ?validation.errors, "Rejected");
            return Err(OrchestratorError::Validation {
                kind: record.kind(),
                errors: validation.errors,
            });
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MemorySink;
    use crate::gateway::{GatewayError, ListResponse, MemoryGateway};
    use crate::models::{Client, Invoice, LineItem, Purchase, Warehouse};
    use crate::schema::{ClientRecord, PurchaseRecord, WarehouseRecord};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;

    /// Gateway that answers from a script and counts calls.
    struct ScriptedGateway {
        list: Option<ListResponse>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            Self {
                list: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn listing(response: ListResponse) -> Self {
            Self {
                list: Some(response),
                ..Self::new()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn log(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl StorageGateway for ScriptedGateway {
        async fn list(
            &self,
            _ctx: &SessionContext,
            kind: EntityKind,
        ) -> Result<ListResponse, GatewayError> {
            self.log(format!("list {}", kind));
            self.list
                .clone()
                .ok_or_else(|| GatewayError::Rejected("list unavailable".to_string()))
        }

        async fn create(
            &self,
            _ctx: &SessionContext,
            record: StorageRecord,
        ) -> Result<OperationResult, GatewayError> {
            self.log(format!("create {}", record.kind()));
            Ok(OperationResult {
                success: true,
                id: Some("srv-1".to_string()),
                data: Some(json!({"echo": serde_json::to_value(&record)?})),
            })
        }

        async fn update(
            &self,
            _ctx: &SessionContext,
            id: &str,
            record: StorageRecord,
        ) -> Result<OperationResult, GatewayError> {
            self.log(format!("update {} {}", record.kind(), id));
            Ok(OperationResult {
                success: true,
                id: Some(id.to_string()),
                data: None,
            })
        }

        async fn delete(
            &self,
            _ctx: &SessionContext,
            kind: EntityKind,
            id: &str,
        ) -> Result<(), GatewayError> {
            self.log(format!("delete {} {}", kind, id));
            Ok(())
        }
    }

    fn orchestrator(gateway: Arc<dyn StorageGateway>) -> (Orchestrator, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let orchestrator = Orchestrator::new(
            gateway,
            AuditRecorder::new(sink.clone()),
            SessionContext::new("emp-1").with_operator("op-1"),
        );
        (orchestrator, sink)
    }

    fn valid_client() -> Entity {
        Client::new("Kianda Comercial", "5417000001").into()
    }

    fn warehouse_row(name: &str) -> StorageRecord {
        StorageRecord::Warehouse(WarehouseRecord {
            name: Some(name.to_string()),
            ..WarehouseRecord::default()
        })
    }

    #[tokio::test]
    async fn test_update_without_id_is_precondition_error() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, sink) = orchestrator(gateway.clone());

        let err = orchestrator
            .process_operation(Action::Update, valid_client(), None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::Precondition {
                action: Action::Update,
                kind: EntityKind::Client
            }
        ));
        assert!(gateway.calls().is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_precondition_checked_before_validation() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, _) = orchestrator(gateway.clone());

        let err = orchestrator
            .process_operation(Action::Delete, Client::default().into(), Some("  "))
            .await
            .unwrap_err();

        assert!(matches!(err, OrchestratorError::Precondition { .. }));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_gateway() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, sink) = orchestrator(gateway.clone());

        let err = orchestrator
            .process_operation(
                Action::Create,
                Client::new("Kianda Comercial", "12345").into(),
                None,
            )
            .await
            .unwrap_err();

        assert_eq!(
            err.validation_errors(),
            &["NIF deve ter 9 ou 10 dígitos".to_string()]
        );
        assert!(gateway.calls().is_empty());
        // Rejected attempts are still audited.
        assert_eq!(sink.entries()[0].action, Action::Create);
    }

    #[tokio::test]
    async fn test_create_returns_gateway_result_verbatim() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, _) = orchestrator(gateway.clone());

        let result = orchestrator
            .process_operation(Action::Create, valid_client(), None)
            .await
            .unwrap();

        assert_eq!(result.id.as_deref(), Some("srv-1"));
        assert_eq!(result.data.unwrap()["echo"]["nif"], "5417000001");
        assert_eq!(gateway.calls(), vec!["create client".to_string()]);
    }

    #[tokio::test]
    async fn test_update_and_delete_dispatch() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, sink) = orchestrator(gateway.clone());

        orchestrator
            .process_operation(Action::Update, valid_client(), Some("c-9"))
            .await
            .unwrap();
        let deleted = orchestrator
            .process_operation(Action::Delete, Entity::blank(EntityKind::Client), Some("c-9"))
            .await
            .unwrap();

        assert_eq!(deleted, OperationResult::deleted());
        assert_eq!(
            gateway.calls(),
            vec!["update client c-9".to_string(), "delete client c-9".to_string()]
        );
        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_invoice_is_stamped_with_session() {
        let gateway = Arc::new(MemoryGateway::new());
        let (orchestrator, _) = orchestrator(gateway.clone());
        let invoice = Invoice {
            client_id: Some("c-1".into()),
            ..Invoice::default()
        }
        .with_items(vec![LineItem::new("Consultoria", 2.0, 50_000.0)]);

        let result = orchestrator
            .process_operation(Action::Create, invoice.into(), None)
            .await
            .unwrap();

        let data = result.data.unwrap();
        assert_eq!(data["empresa_id"], "emp-1");
        assert_eq!(data["operador_id"], "op-1");
    }

    #[tokio::test]
    async fn test_failed_envelope_yields_empty_list() {
        let gateway = Arc::new(ScriptedGateway::listing(ListResponse::Envelope {
            success: false,
            data: None,
        }));
        let (orchestrator, _) = orchestrator(gateway);

        let entities = orchestrator
            .synchronize_module(EntityKind::Client)
            .await
            .unwrap();
        assert!(entities.is_empty());
    }

    #[tokio::test]
    async fn test_bare_list_is_mapped_in_order() {
        let rows = vec![warehouse_row("A"), warehouse_row("B"), warehouse_row("C")];
        let expected: Vec<Entity> = rows.iter().cloned().map(mapper::to_application).collect();
        let gateway = Arc::new(ScriptedGateway::listing(ListResponse::Records(rows)));
        let (orchestrator, _) = orchestrator(gateway);

        let entities = orchestrator
            .synchronize_module(EntityKind::Warehouse)
            .await
            .unwrap();

        assert_eq!(entities, expected);
        assert_eq!(
            entities.iter().map(Entity::label).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }

    #[tokio::test]
    async fn test_purchase_envelope_keeps_amounts() {
        let body = json!({
            "success": true,
            "data": [{"id": 7, "fornecedor_id": "f-1", "subtotal": 1000, "valor_imposto": "140", "total": 1140}]
        });
        let response = ListResponse::from_json(EntityKind::Purchase, body).unwrap();
        let gateway = Arc::new(ScriptedGateway::listing(response));
        let (orchestrator, _) = orchestrator(gateway);

        let entities = orchestrator
            .synchronize_module(EntityKind::Purchase)
            .await
            .unwrap();

        assert_eq!(entities.len(), 1);
        let Entity::Purchase(purchase) = &entities[0] else {
            panic!("expected a purchase");
        };
        assert_eq!(purchase.id.as_deref(), Some("7"));
        assert_eq!(purchase.subtotal, 1000.0);
        assert_eq!(purchase.tax_amount, 140.0);
        assert_eq!(purchase.total, 1140.0);
        assert!(purchase.items.is_empty());
    }

    #[tokio::test]
    async fn test_records_of_other_kinds_are_skipped() {
        let gateway = Arc::new(ScriptedGateway::listing(ListResponse::Records(vec![
            warehouse_row("Central"),
            StorageRecord::Client(ClientRecord::default()),
        ])));
        let (orchestrator, _) = orchestrator(gateway);

        let entities = orchestrator
            .synchronize_module(EntityKind::Warehouse)
            .await
            .unwrap();
        assert_eq!(entities, vec![Entity::from(Warehouse::new("Central"))]);
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, _) = orchestrator(gateway);

        let err = orchestrator
            .synchronize_module(EntityKind::Client)
            .await
            .unwrap_err();
        assert!(matches!(err, OrchestratorError::Storage(GatewayError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_synchronize_modules_keeps_request_order() {
        let gateway = Arc::new(MemoryGateway::new().with_envelope(EntityKind::Purchase));
        let (orchestrator, _) = orchestrator(gateway.clone());
        gateway
            .seed(
                orchestrator.context(),
                [
                    warehouse_row("Central"),
                    StorageRecord::Purchase(PurchaseRecord::default()),
                    StorageRecord::Purchase(PurchaseRecord::default()),
                ],
            )
            .await;

        let modules = orchestrator
            .synchronize_modules(&[EntityKind::Purchase, EntityKind::Client, EntityKind::Warehouse])
            .await
            .unwrap();

        assert_eq!(
            modules.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![2, 0, 1]
        );
    }

    #[tokio::test]
    async fn test_full_cycle_against_memory_gateway() {
        let gateway = Arc::new(MemoryGateway::new());
        let (orchestrator, sink) = orchestrator(gateway.clone());
        let purchase = Purchase::new("f-1", "FT 2025/118")
            .with_items(vec![LineItem::new("Cimento", 10.0, 7_000.0).with_tax_rate(14.0)]);

        let id = orchestrator
            .process_operation(Action::Create, purchase.clone().into(), None)
            .await
            .unwrap()
            .id
            .unwrap();

        let listed = orchestrator
            .synchronize_module(EntityKind::Purchase)
            .await
            .unwrap();
        let expected = Purchase {
            id: Some(id.clone()),
            ..purchase
        };
        assert_eq!(listed, vec![Entity::from(expected)]);

        orchestrator
            .process_operation(Action::Delete, Entity::blank(EntityKind::Purchase), Some(&id))
            .await
            .unwrap();
        assert_eq!(gateway.len(orchestrator.context(), EntityKind::Purchase).await, 0);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_check_does_not_audit() {
        let gateway = Arc::new(ScriptedGateway::new());
        let (orchestrator, sink) = orchestrator(gateway.clone());

        let validation = orchestrator.check(&Client::new("AB", "123").into());

        assert_eq!(validation.errors.len(), 2);
        assert!(sink.is_empty());
        assert!(gateway.calls().is_empty());
    }
}
