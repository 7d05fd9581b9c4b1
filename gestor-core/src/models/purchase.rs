use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::LineItem;
use super::{DEFAULT_PURCHASE_TYPE, UNRESOLVED_PARTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    #[default]
    Pendente,
    Recebida,
    Paga,
    Anulada,
}

impl fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurchaseStatus::Pendente => write!(f, "pendente"),
            PurchaseStatus::Recebida => write!(f, "recebida"),
            PurchaseStatus::Paga => write!(f, "paga"),
            PurchaseStatus::Anulada => write!(f, "anulada"),
        }
    }
}

impl FromStr for PurchaseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendente" => Ok(PurchaseStatus::Pendente),
            "recebida" => Ok(PurchaseStatus::Recebida),
            "paga" => Ok(PurchaseStatus::Paga),
            "anulada" => Ok(PurchaseStatus::Anulada),
            _ => Err(format!(
                "Invalid purchase status '{}'. Valid options: pendente, recebida, paga, anulada",
                s
            )),
        }
    }
}

/// Application-shape purchase ("compra").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Purchase {
    pub id: Option<String>,
    #[serde(rename = "tipo")]
    pub purchase_type: String,
    #[serde(rename = "fornecedorId")]
    pub supplier_id: Option<String>,
    /// Display only; never sent to storage.
    #[serde(rename = "fornecedorNome")]
    pub supplier_name: String,
    #[serde(rename = "numeroDocumento")]
    pub document_number: Option<String>,
    #[serde(rename = "dataDocumento")]
    pub document_date: Option<NaiveDate>,
    #[serde(rename = "dataVencimento")]
    pub due_date: Option<NaiveDate>,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
    #[serde(rename = "estado")]
    pub status: PurchaseStatus,
    #[serde(rename = "armazemId")]
    pub warehouse_id: Option<String>,
    #[serde(rename = "metodoPagamentoId")]
    pub payment_method_id: Option<String>,
}

impl Default for Purchase {
    fn default() -> Self {
        Self {
            id: None,
            purchase_type: DEFAULT_PURCHASE_TYPE.to_string(),
            supplier_id: None,
            supplier_name: UNRESOLVED_PARTY.to_string(),
            document_number: None,
            document_date: None,
            due_date: None,
            items: Vec::new(),
            subtotal: 0.0,
            tax_amount: 0.0,
            total: 0.0,
            status: PurchaseStatus::default(),
            warehouse_id: None,
            payment_method_id: None,
        }
    }
}

impl Purchase {
    pub fn new(supplier_id: impl Into<String>, document_number: impl Into<String>) -> Self {
        Self {
            supplier_id: Some(supplier_id.into()),
            document_number: Some(document_number.into()),
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.subtotal = items.iter().map(|i| i.total).sum();
        self.tax_amount = items.iter().map(|i| i.total * i.tax_rate / 100.0).sum();
        self.total = self.subtotal + self.tax_amount;
        self.items = items;
        self
    }
}
