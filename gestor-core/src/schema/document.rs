use serde::{Deserialize, Serialize};

use super::lenient;

/// Storage-shape document line, shared by invoices and purchases.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LineItemRecord {
    #[serde(rename = "produto_id", deserialize_with = "lenient::id")]
    pub product_id: Option<String>,
    #[serde(rename = "descricao", deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(rename = "quantidade", deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
    #[serde(rename = "preco_unitario", deserialize_with = "lenient::number")]
    pub unit_price: Option<f64>,
    #[serde(rename = "desconto", deserialize_with = "lenient::number")]
    pub discount: Option<f64>,
    #[serde(rename = "taxa_iva", deserialize_with = "lenient::number")]
    pub tax_rate: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total: Option<f64>,
}

/// Storage-shape invoice row. Dates are `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InvoiceRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "tipo_documento", deserialize_with = "lenient::text")]
    pub document_type: Option<String>,
    #[serde(rename = "serie_id", deserialize_with = "lenient::id")]
    pub series_id: Option<String>,
    #[serde(rename = "serie_codigo", deserialize_with = "lenient::text")]
    pub series_code: Option<String>,
    #[serde(rename = "numero", deserialize_with = "lenient::text")]
    pub number: Option<String>,
    #[serde(rename = "data_emissao", deserialize_with = "lenient::text")]
    pub issue_date: Option<String>,
    #[serde(rename = "data_vencimento", deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(rename = "data_contabilistica", deserialize_with = "lenient::text")]
    pub accounting_date: Option<String>,
    #[serde(rename = "cliente_id", deserialize_with = "lenient::id")]
    pub client_id: Option<String>,
    #[serde(rename = "itens", deserialize_with = "lenient::items")]
    pub items: Option<Vec<LineItemRecord>>,
    #[serde(deserialize_with = "lenient::number")]
    pub subtotal: Option<f64>,
    #[serde(rename = "desconto", deserialize_with = "lenient::number")]
    pub discount: Option<f64>,
    #[serde(rename = "imposto", deserialize_with = "lenient::number")]
    pub tax: Option<f64>,
    #[serde(rename = "retencao_fonte", deserialize_with = "lenient::number")]
    pub withholding: Option<f64>,
    #[serde(rename = "cativacao", deserialize_with = "lenient::number")]
    pub retention: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total: Option<f64>,
    #[serde(rename = "valor_pago", deserialize_with = "lenient::number")]
    pub paid_amount: Option<f64>,
    #[serde(rename = "moeda", deserialize_with = "lenient::text")]
    pub currency: Option<String>,
    #[serde(rename = "cambio", deserialize_with = "lenient::number")]
    pub exchange_rate: Option<f64>,
    #[serde(rename = "estado", deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(rename = "certificada", deserialize_with = "lenient::flag")]
    pub certified: Option<bool>,
    #[serde(deserialize_with = "lenient::text")]
    pub hash: Option<String>,
    #[serde(rename = "empresa_id", deserialize_with = "lenient::id")]
    pub company_id: Option<String>,
    #[serde(rename = "local_trabalho_id", deserialize_with = "lenient::id")]
    pub work_location_id: Option<String>,
    #[serde(rename = "caixa_id", deserialize_with = "lenient::id")]
    pub cash_register_id: Option<String>,
    #[serde(rename = "operador_id", deserialize_with = "lenient::id")]
    pub operator_id: Option<String>,
}

/// Storage-shape purchase row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PurchaseRecord {
    #[serde(deserialize_with = "lenient::id")]
    pub id: Option<String>,
    #[serde(rename = "tipo", deserialize_with = "lenient::text")]
    pub purchase_type: Option<String>,
    #[serde(rename = "fornecedor_id", deserialize_with = "lenient::id")]
    pub supplier_id: Option<String>,
    #[serde(rename = "numero_documento", deserialize_with = "lenient::text")]
    pub document_number: Option<String>,
    #[serde(rename = "data_documento", deserialize_with = "lenient::text")]
    pub document_date: Option<String>,
    #[serde(rename = "data_vencimento", deserialize_with = "lenient::text")]
    pub due_date: Option<String>,
    #[serde(rename = "itens", deserialize_with = "lenient::items")]
    pub items: Option<Vec<LineItemRecord>>,
    #[serde(deserialize_with = "lenient::number")]
    pub subtotal: Option<f64>,
    #[serde(rename = "valor_imposto", deserialize_with = "lenient::number")]
    pub tax_amount: Option<f64>,
    #[serde(deserialize_with = "lenient::number")]
    pub total: Option<f64>,
    #[serde(rename = "estado", deserialize_with = "lenient::text")]
    pub status: Option<String>,
    #[serde(rename = "armazem_id", deserialize_with = "lenient::id")]
    pub warehouse_id: Option<String>,
    #[serde(rename = "metodo_pagamento_id", deserialize_with = "lenient::id")]
    pub payment_method_id: Option<String>,
}
