//! Per-kind validation of storage-shape records.
//!
//! Every rule for a kind is evaluated, in a fixed order, so callers get the
//! complete list of violations in one pass. Validation never mutates its
//! input and reports failure as a value.

pub mod rules;

use serde::Serialize;

use crate::schema::{
    CashRegisterRecord, ClientRecord, InvoiceRecord, MetricRecord, ProductRecord, PurchaseRecord,
    SeriesRecord, StorageRecord, SupplierRecord, UserRecord, WarehouseRecord,
};

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Validation {
    fn from_checks<const N: usize>(checks: [Option<String>; N]) -> Self {
        let errors: Vec<String> = checks.into_iter().flatten().collect();
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validates `record` against the rules of its kind.
pub fn validate(record: &StorageRecord) -> Validation {
    match record {
        StorageRecord::Client(r) => client(r),
        StorageRecord::Supplier(r) => supplier(r),
        StorageRecord::Invoice(r) => invoice(r),
        StorageRecord::Purchase(r) => purchase(r),
        StorageRecord::CashRegister(r) => cash_register(r),
        StorageRecord::Series(r) => series(r),
        StorageRecord::User(r) => user(r),
        StorageRecord::Metric(r) => metric(r),
        StorageRecord::Warehouse(r) => warehouse(r),
        StorageRecord::Product(r) => product(r),
    }
}

fn client(r: &ClientRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::tax_id(r.tax_id.as_deref()),
        rules::optional_email(r.email.as_deref()),
        rules::phone(r.phone.as_deref()),
        rules::iban(r.iban.as_deref()),
        rules::finite("Saldo inicial", r.initial_balance),
    ])
}

fn supplier(r: &SupplierRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::tax_id(r.tax_id.as_deref()),
        rules::optional_email(r.email.as_deref()),
        rules::phone(r.phone.as_deref()),
        rules::iban(r.iban.as_deref()),
        rules::swift(r.swift.as_deref()),
    ])
}

fn invoice(r: &InvoiceRecord) -> Validation {
    Validation::from_checks([
        rules::required("Cliente", r.client_id.as_deref()),
        rules::has_items(r.items.as_deref()),
        rules::non_negative("Subtotal", r.subtotal),
        rules::non_negative("Desconto", r.discount),
        rules::non_negative("Imposto", r.tax),
        rules::non_negative("Retenção na fonte", r.withholding),
        rules::non_negative("Cativação", r.retention),
        rules::positive_total(r.total),
        rules::non_negative("Valor pago", r.paid_amount),
        rules::exchange_rate(r.exchange_rate),
        rules::due_not_before_issue(r.issue_date.as_deref(), r.due_date.as_deref()),
    ])
}

fn purchase(r: &PurchaseRecord) -> Validation {
    Validation::from_checks([
        rules::required("Fornecedor", r.supplier_id.as_deref()),
        rules::has_items(r.items.as_deref()),
        rules::non_negative("Subtotal", r.subtotal),
        rules::non_negative("Valor do imposto", r.tax_amount),
        rules::positive_total(r.total),
    ])
}

fn cash_register(r: &CashRegisterRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::non_negative("Saldo inicial", r.opening_balance),
    ])
}

fn series(r: &SeriesRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::required("Código", r.code.as_deref()),
        rules::series_year(r.year),
        rules::next_number(r.next_number),
    ])
}

fn user(r: &UserRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::required_email(r.email.as_deref()),
    ])
}

fn product(r: &ProductRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::non_negative("Preço", r.price),
        rules::non_negative("Custo", r.cost),
        rules::percentage("Taxa de IVA", r.tax_rate),
        rules::finite("Stock", r.stock),
    ])
}

fn warehouse(r: &WarehouseRecord) -> Validation {
    Validation::from_checks([rules::name(r.name.as_deref())])
}

fn metric(r: &MetricRecord) -> Validation {
    Validation::from_checks([
        rules::name(r.name.as_deref()),
        rules::finite("Valor", r.value),
    ])
}
