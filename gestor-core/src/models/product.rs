use serde::{Deserialize, Serialize};

use super::{DEFAULT_TAX_RATE, DEFAULT_UNIT};

/// Application-shape product ("produto").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    pub id: Option<String>,
    #[serde(rename = "codigo")]
    pub code: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "custo")]
    pub cost: f64,
    /// VAT percentage, e.g. `14.0`.
    #[serde(rename = "taxaIva")]
    pub tax_rate: f64,
    pub stock: f64,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: None,
            code: None,
            name: String::new(),
            description: None,
            unit: DEFAULT_UNIT.to_string(),
            price: 0.0,
            cost: 0.0,
            tax_rate: DEFAULT_TAX_RATE,
            stock: 0.0,
            category: None,
            active: true,
        }
    }
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            ..Self::default()
        }
    }

    /// Unit price with VAT applied.
    pub fn gross_price(&self) -> f64 {
        self.price * (1.0 + self.tax_rate / 100.0)
    }
}
