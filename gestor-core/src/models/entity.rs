use serde::Serialize;

use super::{
    CashRegister, Client, EntityKind, Invoice, Metric, Product, Purchase, Series, Supplier, User,
    Warehouse,
};

/// An application-shape record of any kind.
///
/// Serializes as the inner record, so JSON output is exactly what the UI
/// expects for that kind. Deserialization needs the kind up front, see
/// [`Entity::from_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entity {
    Client(Client),
    Supplier(Supplier),
    Invoice(Invoice),
    Purchase(Purchase),
    CashRegister(CashRegister),
    Series(Series),
    User(User),
    Metric(Metric),
    Warehouse(Warehouse),
    Product(Product),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Client(_) => EntityKind::Client,
            Entity::Supplier(_) => EntityKind::Supplier,
            Entity::Invoice(_) => EntityKind::Invoice,
            Entity::Purchase(_) => EntityKind::Purchase,
            Entity::CashRegister(_) => EntityKind::CashRegister,
            Entity::Series(_) => EntityKind::Series,
            Entity::User(_) => EntityKind::User,
            Entity::Metric(_) => EntityKind::Metric,
            Entity::Warehouse(_) => EntityKind::Warehouse,
            Entity::Product(_) => EntityKind::Product,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Entity::Client(e) => e.id.as_deref(),
            Entity::Supplier(e) => e.id.as_deref(),
            Entity::Invoice(e) => e.id.as_deref(),
            Entity::Purchase(e) => e.id.as_deref(),
            Entity::CashRegister(e) => e.id.as_deref(),
            Entity::Series(e) => e.id.as_deref(),
            Entity::User(e) => e.id.as_deref(),
            Entity::Metric(e) => e.id.as_deref(),
            Entity::Warehouse(e) => e.id.as_deref(),
            Entity::Product(e) => e.id.as_deref(),
        }
    }

    /// Short human label used in listings.
    pub fn label(&self) -> String {
        match self {
            Entity::Client(e) => e.name.clone(),
            Entity::Supplier(e) => e.name.clone(),
            Entity::Invoice(e) => match (&e.series_code, &e.number) {
                (Some(series), Some(number)) => {
                    format!("{} {}/{}", e.document_type, series, number)
                }
                (_, Some(number)) => format!("{} {}", e.document_type, number),
                _ => format!("{} (sem número)", e.document_type),
            },
            Entity::Purchase(e) => e
                .document_number
                .clone()
                .unwrap_or_else(|| e.purchase_type.clone()),
            Entity::CashRegister(e) => e.name.clone(),
            Entity::Series(e) => e.code.clone(),
            Entity::User(e) => e.name.clone(),
            Entity::Metric(e) => e.name.clone(),
            Entity::Warehouse(e) => e.name.clone(),
            Entity::Product(e) => e.name.clone(),
        }
    }

    /// An all-defaults record of `kind`, e.g. for delete intents that only
    /// carry an id.
    pub fn blank(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Client => Entity::Client(Client::default()),
            EntityKind::Supplier => Entity::Supplier(Supplier::default()),
            EntityKind::Invoice => Entity::Invoice(Invoice::default()),
            EntityKind::Purchase => Entity::Purchase(Purchase::default()),
            EntityKind::CashRegister => Entity::CashRegister(CashRegister::default()),
            EntityKind::Series => Entity::Series(Series::default()),
            EntityKind::User => Entity::User(User::default()),
            EntityKind::Metric => Entity::Metric(Metric::default()),
            EntityKind::Warehouse => Entity::Warehouse(Warehouse::default()),
            EntityKind::Product => Entity::Product(Product::default()),
        }
    }

    /// Parses an application-shape JSON payload as a record of `kind`.
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            EntityKind::Client => Entity::Client(serde_json::from_value(value)?),
            EntityKind::Supplier => Entity::Supplier(serde_json::from_value(value)?),
            EntityKind::Invoice => Entity::Invoice(serde_json::from_value(value)?),
            EntityKind::Purchase => Entity::Purchase(serde_json::from_value(value)?),
            EntityKind::CashRegister => Entity::CashRegister(serde_json::from_value(value)?),
            EntityKind::Series => Entity::Series(serde_json::from_value(value)?),
            EntityKind::User => Entity::User(serde_json::from_value(value)?),
            EntityKind::Metric => Entity::Metric(serde_json::from_value(value)?),
            EntityKind::Warehouse => Entity::Warehouse(serde_json::from_value(value)?),
            EntityKind::Product => Entity::Product(serde_json::from_value(value)?),
        })
    }
}

macro_rules! entity_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Entity {
                fn from(value: $variant) -> Self {
                    Entity::$variant(value)
                }
            }
        )*
    };
}

entity_from!(
    Client,
    Supplier,
    Invoice,
    Purchase,
    CashRegister,
    Series,
    User,
    Metric,
    Warehouse,
    Product,
);
