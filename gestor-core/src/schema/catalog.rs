use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CashRegisterRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "descricao", deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "local_trabalho_id", deserialize_with = "lenient::id")]
    pub work_location_id: Option<String>,
    #[serde(rename = "saldo_inicial", deserialize_with = "lenient::number")]
    pub opening_balance: Option<f64>,
    #[serde(rename = "saldo_atual", deserialize_with = "lenient::number")]
    pub current_balance: Option<f64>,
    #[serde(rename = "aberto", deserialize_with = "lenient::flag")]
    pub open: Option<bool>,
    #[serde(rename = "operador_id", deserialize_with = "lenient::id")]
    pub operator_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeriesRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "codigo", deserialize_with = "lenient::text")]
    pub code: Option<String>,
    #[serde(rename = "tipo_documento", deserialize_with = "lenient::text")]
    pub document_type: Option<String>,
    #[serde(rename = "ano", deserialize_with = "lenient::integer")]
    pub year: Option<i64>,
    #[serde(rename = "proximo_numero", deserialize_with = "lenient::integer")]
    pub next_number: Option<i64>,
    #[serde(rename = "ativa", deserialize_with = "lenient::flag")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(rename = "perfil", deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(rename = "ativo", deserialize_with = "lenient::flag")]
    pub active: Option<bool>,
    #[serde(rename = "empresa_id", deserialize_with = "lenient::id")]
    pub company_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "codigo", deserialize_with = "lenient::text")]
    pub code: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "descricao", deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "unidade", deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    #[serde(rename = "preco_venda", deserialize_with = "lenient::number")]
    pub price: Option<f64>,
    #[serde(rename = "preco_custo", deserialize_with = "lenient::number")]
    pub cost: Option<f64>,
    #[serde(rename = "taxa_iva", deserialize_with = "lenient::number")]
    pub tax_rate: Option<f64>,
    #[serde(rename = "quantidade_stock", deserialize_with = "lenient::number")]
    pub stock: Option<f64>,
    #[serde(rename = "categoria", deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(rename = "ativo", deserialize_with = "lenient::flag")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WarehouseRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "codigo", deserialize_with = "lenient::text")]
    pub code: Option<String>,
    #[serde(rename = "localizacao", deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(rename = "responsavel", deserialize_with = "lenient::text")]
    pub manager: Option<String>,
    #[serde(rename = "ativo", deserialize_with = "lenient::flag")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "nome", deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(rename = "valor", deserialize_with = "lenient::number")]
    pub value: Option<f64>,
    #[serde(rename = "unidade", deserialize_with = "lenient::text")]
    pub unit: Option<String>,
    #[serde(rename = "periodo", deserialize_with = "lenient::text")]
    pub period: Option<String>,
    #[serde(rename = "data_registo", deserialize_with = "lenient::text")]
    pub recorded_at: Option<String>,
}
