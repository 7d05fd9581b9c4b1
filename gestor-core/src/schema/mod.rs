//! Storage-shape records, as the remote backend names and types them.
//!
//! Every field is optional here: the backend may omit anything, and the
//! mapper is responsible for filling defaults on the way to the UI.
//!
//! # Field correspondence (application key → storage key)
//!
//! ```text
//! client     nome→nome  nif→nif  morada→endereco  cidade→cidade
//!            codigoPostal→codigo_postal  pais→pais  tipoCliente→tipo_cliente
//!            contaPartilhada→conta_partilhada  saldoInicial→saldo_inicial
//! supplier   tipoFornecedor→tipo_fornecedor  siglaBanco→sigla_banco
//!            numeroSegurancaSocial→num_seguranca_social
//! invoice    tipo→tipo_documento  serieId→serie_id  serie→serie_codigo
//!            dataEmissao→data_emissao  clienteId→cliente_id  items→itens
//!            retencao→retencao_fonte  valorPago→valor_pago  moeda→moeda
//!            empresaId→empresa_id  caixaId→caixa_id  operadorId→operador_id
//! purchase   fornecedorId→fornecedor_id  numeroDocumento→numero_documento
//!            dataDocumento→data_documento  items→itens  taxAmount→valor_imposto
//!            armazemId→armazem_id  metodoPagamentoId→metodo_pagamento_id
//! product    preco→preco_venda  custo→preco_custo  stock→quantidade_stock
//! ```

mod catalog;
mod document;
pub mod lenient;
mod party;

pub use catalog::{
    CashRegisterRecord, MetricRecord, ProductRecord, SeriesRecord, UserRecord, WarehouseRecord,
};
pub use document::{InvoiceRecord, LineItemRecord, PurchaseRecord};
pub use party::{ClientRecord, SupplierRecord};

use serde::Serialize;

use crate::models::EntityKind;

/// A storage-shape record of any kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StorageRecord {
    Client(ClientRecord),
    Supplier(SupplierRecord),
    Invoice(InvoiceRecord),
    Purchase(PurchaseRecord),
    CashRegister(CashRegisterRecord),
    Series(SeriesRecord),
    User(UserRecord),
    Metric(MetricRecord),
    Warehouse(WarehouseRecord),
    Product(ProductRecord),
}

impl StorageRecord {
    pub fn kind(&self) -> EntityKind {
        match self {
            StorageRecord::Client(_) => EntityKind::Client,
            StorageRecord::Supplier(_) => EntityKind::Supplier,
            StorageRecord::Invoice(_) => EntityKind::Invoice,
            StorageRecord::Purchase(_) => EntityKind::Purchase,
            StorageRecord::CashRegister(_) => EntityKind::CashRegister,
            StorageRecord::Series(_) => EntityKind::Series,
            StorageRecord::User(_) => EntityKind::User,
            StorageRecord::Metric(_) => EntityKind::Metric,
            StorageRecord::Warehouse(_) => EntityKind::Warehouse,
            StorageRecord::Product(_) => EntityKind::Product,
        }
    }

    fn id_slot(&mut self) -> &mut Option<String> {
        match self {
            StorageRecord::Client(r) => &mut r.id,
            StorageRecord::Supplier(r) => &mut r.id,
            StorageRecord::Invoice(r) => &mut r.id,
            StorageRecord::Purchase(r) => &mut r.id,
            StorageRecord::CashRegister(r) => &mut r.id,
            StorageRecord::Series(r) => &mut r.id,
            StorageRecord::User(r) => &mut r.id,
            StorageRecord::Metric(r) => &mut r.id,
            StorageRecord::Warehouse(r) => &mut r.id,
            StorageRecord::Product(r) => &mut r.id,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            StorageRecord::Client(r) => r.id.as_deref(),
            StorageRecord::Supplier(r) => r.id.as_deref(),
            StorageRecord::Invoice(r) => r.id.as_deref(),
            StorageRecord::Purchase(r) => r.id.as_deref(),
            StorageRecord::CashRegister(r) => r.id.as_deref(),
            StorageRecord::Series(r) => r.id.as_deref(),
            StorageRecord::User(r) => r.id.as_deref(),
            StorageRecord::Metric(r) => r.id.as_deref(),
            StorageRecord::Warehouse(r) => r.id.as_deref(),
            StorageRecord::Product(r) => r.id.as_deref(),
        }
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        *self.id_slot() = Some(id.into());
    }

    /// Parses a backend row as a record of `kind`.
    pub fn from_json(kind: EntityKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            EntityKind::Client => StorageRecord::Client(serde_json::from_value(value)?),
            EntityKind::Supplier => StorageRecord::Supplier(serde_json::from_value(value)?),
            EntityKind::Invoice => StorageRecord::Invoice(serde_json::from_value(value)?),
            EntityKind::Purchase => StorageRecord::Purchase(serde_json::from_value(value)?),
            EntityKind::CashRegister => StorageRecord::CashRegister(serde_json::from_value(value)?),
            EntityKind::Series => StorageRecord::Series(serde_json::from_value(value)?),
            EntityKind::User => StorageRecord::User(serde_json::from_value(value)?),
            EntityKind::Metric => StorageRecord::Metric(serde_json::from_value(value)?),
            EntityKind::Warehouse => StorageRecord::Warehouse(serde_json::from_value(value)?),
            EntityKind::Product => StorageRecord::Product(serde_json::from_value(value)?),
        })
    }
}
