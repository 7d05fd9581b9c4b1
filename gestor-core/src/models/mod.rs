mod cash_register;
mod client;
mod entity;
mod entity_kind;
mod invoice;
mod line_item;
mod metric;
mod product;
mod purchase;
mod series;
mod supplier;
mod transaction;
mod user;
mod warehouse;

pub use cash_register::CashRegister;
pub use client::{Client, ClientType};
pub use entity::Entity;
pub use entity_kind::{Action, EntityKind};
pub use invoice::{DocumentType, Invoice, InvoiceStatus};
pub use line_item::LineItem;
pub use metric::Metric;
pub use product::Product;
pub use purchase::{Purchase, PurchaseStatus};
pub use series::Series;
pub use supplier::{Supplier, SupplierType};
pub use transaction::Transaction;
pub use user::{User, UserRole};
pub use warehouse::Warehouse;

/// City used when the backend has none on record.
pub const DEFAULT_CITY: &str = "Luanda";
/// Country used when the backend has none on record.
pub const DEFAULT_COUNTRY: &str = "Angola";
pub const DEFAULT_CURRENCY: &str = "AOA";
pub const DEFAULT_EXCHANGE_RATE: f64 = 1.0;
pub const DEFAULT_PURCHASE_TYPE: &str = "compra";
pub const DEFAULT_UNIT: &str = "UN";
/// Standard IVA rate, in percent.
pub const DEFAULT_TAX_RATE: f64 = 14.0;
/// Display name for a party the caller has not resolved.
pub const UNRESOLVED_PARTY: &str = "Desconhecido";
