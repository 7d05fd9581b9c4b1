use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::{self, Transaction};
use super::{DEFAULT_CITY, DEFAULT_COUNTRY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierType {
    #[default]
    Nacional,
    Estrangeiro,
    PrestadorServicos,
}

impl fmt::Display for SupplierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SupplierType::Nacional => write!(f, "nacional"),
            SupplierType::Estrangeiro => write!(f, "estrangeiro"),
            SupplierType::PrestadorServicos => write!(f, "prestador_servicos"),
        }
    }
}

impl FromStr for SupplierType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "nacional" => Ok(SupplierType::Nacional),
            "estrangeiro" => Ok(SupplierType::Estrangeiro),
            "prestador_servicos" | "prestador_de_servicos" => Ok(SupplierType::PrestadorServicos),
            _ => Err(format!(
                "Invalid supplier type '{}'. Valid options: nacional, estrangeiro, prestador_servicos",
                s
            )),
        }
    }
}

/// Application-shape supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Supplier {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nif")]
    pub tax_id: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "morada")]
    pub street: Option<String>,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "provincia")]
    pub province: Option<String>,
    #[serde(rename = "municipio")]
    pub municipality: Option<String>,
    #[serde(rename = "codigoPostal")]
    pub postal_code: Option<String>,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "tipoFornecedor")]
    pub supplier_type: SupplierType,
    pub iban: Option<String>,
    pub swift: Option<String>,
    #[serde(rename = "siglaBanco")]
    pub bank_initials: Option<String>,
    #[serde(rename = "numeroSegurancaSocial")]
    pub social_security: Option<String>,
    #[serde(rename = "saldo")]
    pub balance: f64,
    #[serde(rename = "movimentos")]
    pub transactions: Vec<Transaction>,
}

impl Default for Supplier {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            tax_id: String::new(),
            email: None,
            phone: None,
            street: None,
            city: DEFAULT_CITY.to_string(),
            province: None,
            municipality: None,
            postal_code: None,
            country: DEFAULT_COUNTRY.to_string(),
            supplier_type: SupplierType::default(),
            iban: None,
            swift: None,
            bank_initials: None,
            social_security: None,
            balance: 0.0,
            transactions: Vec::new(),
        }
    }
}

impl Supplier {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, supplier_type: SupplierType) -> Self {
        self.supplier_type = supplier_type;
        self
    }

    pub fn with_bank(
        mut self,
        iban: impl Into<String>,
        swift: impl Into<String>,
        initials: impl Into<String>,
    ) -> Self {
        self.iban = Some(iban.into());
        self.swift = Some(swift.into());
        self.bank_initials = Some(initials.into());
        self
    }

    pub fn push_transaction(&mut self, tx: Transaction) {
        self.balance = transaction::append(&mut self.transactions, self.balance, tx);
    }
}
