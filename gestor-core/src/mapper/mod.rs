//! Bidirectional translation between application and storage shapes.
//!
//! Each kind has a `to_application` / `to_storage` pair in its own module.
//! The functions are pure and structural: they rename fields, coerce
//! storage values into application types and fill documented defaults,
//! but never validate and never look anything up.
//!
//! Defaults applied on the way to the application:
//!
//! | Field | Default |
//! |---|---|
//! | any amount / quantity | `0` (also for unreadable or non-finite values) |
//! | `cidade` | `Luanda` |
//! | `pais` | `Angola` |
//! | `moeda` | `AOA` |
//! | `cambio` | `1` |
//! | `items` | empty |
//! | `clienteNome` / `fornecedorNome` | `Desconhecido` |
//! | product `unidade` / `taxaIva` | `UN` / `14` |
//! | series `proximoNumero` / `ativa` | `1` / `true` |
//! | enumerations | the enum's default variant |

pub mod cash_register;
pub mod client;
mod coerce;
pub mod invoice;
pub mod line_item;
pub mod metric;
pub mod product;
pub mod purchase;
pub mod series;
pub mod supplier;
pub mod user;
pub mod warehouse;

use crate::models::Entity;
use crate::schema::StorageRecord;

/// Storage → application, dispatching on the record's kind.
pub fn to_application(record: StorageRecord) -> Entity {
    match record {
        StorageRecord::Client(r) => Entity::Client(client::to_application(r)),
        StorageRecord::Supplier(r) => Entity::Supplier(supplier::to_application(r)),
        StorageRecord::Invoice(r) => Entity::Invoice(invoice::to_application(r)),
        StorageRecord::Purchase(r) => Entity::Purchase(purchase::to_application(r)),
        StorageRecord::CashRegister(r) => Entity::CashRegister(cash_register::to_application(r)),
        StorageRecord::Series(r) => Entity::Series(series::to_application(r)),
        StorageRecord::User(r) => Entity::User(user::to_application(r)),
        StorageRecord::Metric(r) => Entity::Metric(metric::to_application(r)),
        StorageRecord::Warehouse(r) => Entity::Warehouse(warehouse::to_application(r)),
        StorageRecord::Product(r) => Entity::Product(product::to_application(r)),
    }
}

/// Application → storage, dispatching on the entity's kind.
pub fn to_storage(entity: &Entity) -> StorageRecord {
    match entity {
        Entity::Client(e) => StorageRecord::Client(client::to_storage(e)),
        Entity::Supplier(e) => StorageRecord::Supplier(supplier::to_storage(e)),
        Entity::Invoice(e) => StorageRecord::Invoice(invoice::to_storage(e)),
        Entity::Purchase(e) => StorageRecord::Purchase(purchase::to_storage(e)),
        Entity::CashRegister(e) => StorageRecord::CashRegister(cash_register::to_storage(e)),
        Entity::Series(e) => StorageRecord::Series(series::to_storage(e)),
        Entity::User(e) => StorageRecord::User(user::to_storage(e)),
        Entity::Metric(e) => StorageRecord::Metric(metric::to_storage(e)),
        Entity::Warehouse(e) => StorageRecord::Warehouse(warehouse::to_storage(e)),
        Entity::Product(e) => StorageRecord::Product(product::to_storage(e)),
    }
}
