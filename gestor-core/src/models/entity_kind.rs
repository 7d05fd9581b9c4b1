use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of entity kinds the orchestration layer knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
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
}

impl EntityKind {
    pub const ALL: [EntityKind; 10] = [
        EntityKind::Client,
        EntityKind::Supplier,
        EntityKind::Invoice,
        EntityKind::Purchase,
        EntityKind::CashRegister,
        EntityKind::Series,
        EntityKind::User,
        EntityKind::Metric,
        EntityKind::Warehouse,
        EntityKind::Product,
    ];

    /// Name of the module (batch collection) holding entities of this kind.
    pub fn module(&self) -> &'static str {
        match self {
            EntityKind::Client => "clientes",
            EntityKind::Supplier => "fornecedores",
            EntityKind::Invoice => "faturas",
            EntityKind::Purchase => "compras",
            EntityKind::CashRegister => "caixas",
            EntityKind::Series => "series",
            EntityKind::User => "utilizadores",
            EntityKind::Metric => "metricas",
            EntityKind::Warehouse => "armazens",
            EntityKind::Product => "produtos",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Client => write!(f, "client"),
            EntityKind::Supplier => write!(f, "supplier"),
            EntityKind::Invoice => write!(f, "invoice"),
            EntityKind::Purchase => write!(f, "purchase"),
            EntityKind::CashRegister => write!(f, "cash-register"),
            EntityKind::Series => write!(f, "series"),
            EntityKind::User => write!(f, "user"),
            EntityKind::Metric => write!(f, "metric"),
            EntityKind::Warehouse => write!(f, "warehouse"),
            EntityKind::Product => write!(f, "product"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts either the kind name (`invoice`) or its module name (`faturas`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.to_string() == needle || kind.module() == needle)
            .ok_or_else(|| {
                format!(
                    "Invalid entity kind '{}'. Valid options: {}",
                    s,
                    EntityKind::ALL
                        .iter()
                        .map(|k| k.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

/// A mutating intent on one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Action::Create),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            _ => Err(format!(
                "Invalid action '{}'. Valid options: create, update, delete",
                s
            )),
        }
    }
}
