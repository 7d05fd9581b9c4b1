//! Gestor Core Library
//!
//! Entity models, storage schema mapping, validation, audit and the
//! orchestration of create/update/delete and module synchronization against
//! a pluggable storage gateway.

pub mod audit;
pub mod context;
pub mod gateway;
pub mod mapper;
pub mod models;
pub mod orchestrator;
pub mod schema;
pub mod validator;

pub use audit::{
    AuditEntry, AuditError, AuditRecorder, AuditSink, JsonlFileSink, MemorySink, TracingSink,
    SYSTEM_ACTOR,
};
pub use context::SessionContext;
pub use gateway::{GatewayError, ListResponse, MemoryGateway, OperationResult, StorageGateway};
pub use models::{
    Action, CashRegister, Client, ClientType, DocumentType, Entity, EntityKind, Invoice,
    InvoiceStatus, LineItem, Metric, Product, Purchase, PurchaseStatus, Series, Supplier,
    SupplierType, Transaction, User, UserRole, Warehouse,
};
pub use orchestrator::{Orchestrator, OrchestratorError};
pub use schema::StorageRecord;
pub use validator::{validate, Validation};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
