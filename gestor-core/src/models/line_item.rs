use serde::{Deserialize, Serialize};

/// One line of an invoice or purchase document.
///
/// The orchestration layer never recomputes line totals; they are carried
/// as the UI computed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "produtoId")]
    pub product_id: Option<String>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "quantidade")]
    pub quantity: f64,
    #[serde(rename = "precoUnitario")]
    pub unit_price: f64,
    #[serde(rename = "desconto")]
    pub discount: f64,
    #[serde(rename = "taxaIva")]
    pub tax_rate: f64,
    pub total: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            total: quantity * unit_price,
            ..Self::default()
        }
    }

    pub fn with_product(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn with_tax_rate(mut self, rate: f64) -> Self {
        self.tax_rate = rate;
        self
    }
}
