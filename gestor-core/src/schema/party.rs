use serde::{Deserialize, Serialize};

use super::lenient;

/// Storage-shape client row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "nif", deserialize_with = "lenient::text")]
    pub tax_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(rename = "telefone", deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(rename = "endereco", deserialize_with = "lenient::text")]
    pub street: Option<String>,
    #[serde(rename = "cidade", deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(rename = "provincia", deserialize_with = "lenient::text")]
    pub province: Option<String>,
    #[serde(rename = "municipio", deserialize_with = "lenient::text")]
    pub municipality: Option<String>,
    #[serde(rename = "codigo_postal", deserialize_with = "lenient::text")]
    pub postal_code: Option<String>,
    #[serde(rename = "pais", deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(rename = "tipo_cliente", deserialize_with = "lenient::text")]
    pub client_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub iban: Option<String>,
    #[serde(rename = "conta_partilhada", deserialize_with = "lenient::flag")]
    pub shared_account: Option<bool>,
    #[serde(rename = "saldo_inicial", deserialize_with = "lenient::number")]
    pub initial_balance: Option<f64>,
}

/// Storage-shape supplier row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupplierRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "nif", deserialize_with = "lenient::text")]
    pub tax_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(rename = "telefone", deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(rename = "endereco", deserialize_with = "lenient::text")]
    pub street: Option<String>,
    #[serde(rename = "cidade", deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(rename = "provincia", deserialize_with = "lenient::text")]
    pub province: Option<String>,
    #[serde(rename = "municipio", deserialize_with = "lenient::text")]
    pub municipality: Option<String>,
    #[serde(rename = "codigo_postal", deserialize_with = "lenient::text")]
    pub postal_code: Option<String>,
    #[serde(rename = "pais", deserialize_with = "lenient::text")]
    pub country: Option<String>,
    #[serde(rename = "tipo_fornecedor", deserialize_with = "lenient::text")]
    pub supplier_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub iban: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub swift: Option<String>,
    #[serde(rename = "sigla_banco", deserialize_with = "lenient::text")]
    pub bank_initials: Option<String>,
    #[serde(rename = "num_seguranca_social", deserialize_with = "lenient::text")]
    pub social_security: Option<String>,
}
