use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::line_item::LineItem;
use super::{DEFAULT_CURRENCY, DEFAULT_EXCHANGE_RATE, UNRESOLVED_PARTY};

/// Fiscal document type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Fatura
    #[default]
    Ft,
    /// Fatura-recibo
    Fr,
    /// Fatura pró-forma
    Fp,
    /// Nota de crédito
    Nc,
    /// Nota de débito
    Nd,
    /// Recibo
    Rc,
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Ft => write!(f, "FT"),
            DocumentType::Fr => write!(f, "FR"),
            DocumentType::Fp => write!(f, "FP"),
            DocumentType::Nc => write!(f, "NC"),
            DocumentType::Nd => write!(f, "ND"),
            DocumentType::Rc => write!(f, "RC"),
        }
    }
}

impl FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FT" => Ok(DocumentType::Ft),
            "FR" => Ok(DocumentType::Fr),
            "FP" => Ok(DocumentType::Fp),
            "NC" => Ok(DocumentType::Nc),
            "ND" => Ok(DocumentType::Nd),
            "RC" => Ok(DocumentType::Rc),
            _ => Err(format!(
                "Invalid document type '{}'. Valid options: FT, FR, FP, NC, ND, RC",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Rascunho,
    Emitida,
    ParcialmentePaga,
    Paga,
    Anulada,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Rascunho => write!(f, "rascunho"),
            InvoiceStatus::Emitida => write!(f, "emitida"),
            InvoiceStatus::ParcialmentePaga => write!(f, "parcialmente_paga"),
            InvoiceStatus::Paga => write!(f, "paga"),
            InvoiceStatus::Anulada => write!(f, "anulada"),
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rascunho" => Ok(InvoiceStatus::Rascunho),
            "emitida" => Ok(InvoiceStatus::Emitida),
            "parcialmente_paga" => Ok(InvoiceStatus::ParcialmentePaga),
            "paga" => Ok(InvoiceStatus::Paga),
            "anulada" => Ok(InvoiceStatus::Anulada),
            _ => Err(format!(
                "Invalid invoice status '{}'. Valid options: rascunho, emitida, parcialmente_paga, paga, anulada",
                s
            )),
        }
    }
}

/// Application-shape invoice ("fatura").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Invoice {
    pub id: Option<String>,
    #[serde(rename = "tipo")]
    pub document_type: DocumentType,
    #[serde(rename = "serieId")]
    pub series_id: Option<String>,
    #[serde(rename = "serie")]
    pub series_code: Option<String>,
    #[serde(rename = "numero")]
    pub number: Option<String>,
    #[serde(rename = "dataEmissao")]
    pub issue_date: Option<NaiveDate>,
    #[serde(rename = "dataVencimento")]
    pub due_date: Option<NaiveDate>,
    #[serde(rename = "dataContabilistica")]
    pub accounting_date: Option<NaiveDate>,
    #[serde(rename = "clienteId")]
    pub client_id: Option<String>,
    /// Display only; never sent to storage.
    #[serde(rename = "clienteNome")]
    pub client_name: String,
    pub items: Vec<LineItem>,
    pub subtotal: f64,
    #[serde(rename = "desconto")]
    pub discount: f64,
    #[serde(rename = "imposto")]
    pub tax: f64,
    #[serde(rename = "retencao")]
    pub withholding: f64,
    #[serde(rename = "cativacao")]
    pub retention: f64,
    pub total: f64,
    #[serde(rename = "valorPago")]
    pub paid_amount: f64,
    #[serde(rename = "moeda")]
    pub currency: String,
    #[serde(rename = "cambio")]
    pub exchange_rate: f64,
    #[serde(rename = "estado")]
    pub status: InvoiceStatus,
    #[serde(rename = "certificada")]
    pub certified: bool,
    pub hash: Option<String>,
    #[serde(rename = "empresaId")]
    pub company_id: Option<String>,
    #[serde(rename = "localTrabalhoId")]
    pub work_location_id: Option<String>,
    #[serde(rename = "caixaId")]
    pub cash_register_id: Option<String>,
    #[serde(rename = "operadorId")]
    pub operator_id: Option<String>,
}

impl Default for Invoice {
    fn default() -> Self {
        Self {
            id: None,
            document_type: DocumentType::default(),
            series_id: None,
            series_code: None,
            number: None,
            issue_date: None,
            due_date: None,
            accounting_date: None,
            client_id: None,
            client_name: UNRESOLVED_PARTY.to_string(),
            items: Vec::new(),
            subtotal: 0.0,
            discount: 0.0,
            tax: 0.0,
            withholding: 0.0,
            retention: 0.0,
            total: 0.0,
            paid_amount: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            exchange_rate: DEFAULT_EXCHANGE_RATE,
            status: InvoiceStatus::default(),
            certified: false,
            hash: None,
            company_id: None,
            work_location_id: None,
            cash_register_id: None,
            operator_id: None,
        }
    }
}

impl Invoice {
    pub fn new(client_id: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            client_id: Some(client_id.into()),
            issue_date: Some(issue_date),
            ..Self::default()
        }
    }

    /// Sets the items and recomputes subtotal, tax and total from them.
    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.subtotal = items.iter().map(|i| i.total).sum();
        self.tax = items.iter().map(|i| i.total * i.tax_rate / 100.0).sum();
        self.total = self.subtotal - self.discount + self.tax - self.withholding;
        self.items = items;
        self
    }

    /// Amount still owed on the document.
    pub fn outstanding(&self) -> f64 {
        (self.total - self.paid_amount).max(0.0)
    }
}
