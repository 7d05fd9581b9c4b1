use super::coerce::{date, date_string, number_or, number_or_zero, text_or, variant};
use super::line_item;
use crate::models::{Invoice, DEFAULT_CURRENCY, DEFAULT_EXCHANGE_RATE, UNRESOLVED_PARTY};
use crate::schema::InvoiceRecord;

/// Storage → application. The client name is not stored with the invoice;
/// it is left at the placeholder for the caller to resolve.
pub fn to_application(record: InvoiceRecord) -> Invoice {
    Invoice {
        id: record.id,
        document_type: variant(record.document_type.as_deref()),
        series_id: record.series_id,
        series_code: record.series_code,
        number: record.number,
        issue_date: date(record.issue_date.as_deref()),
        due_date: date(record.due_date.as_deref()),
        accounting_date: date(record.accounting_date.as_deref()),
        client_id: record.client_id,
        client_name: UNRESOLVED_PARTY.to_string(),
        items: line_item::all_to_application(record.items),
        subtotal: number_or_zero(record.subtotal),
        discount: number_or_zero(record.discount),
        tax: number_or_zero(record.tax),
        withholding: number_or_zero(record.withholding),
        retention: number_or_zero(record.retention),
        total: number_or_zero(record.total),
        paid_amount: number_or_zero(record.paid_amount),
        currency: text_or(record.currency, DEFAULT_CURRENCY),
        exchange_rate: number_or(record.exchange_rate, DEFAULT_EXCHANGE_RATE),
        status: variant(record.status.as_deref()),
        certified: record.certified.unwrap_or(false),
        hash: record.hash,
        company_id: record.company_id,
        work_location_id: record.work_location_id,
        cash_register_id: record.cash_register_id,
        operator_id: record.operator_id,
    }
}

pub fn to_storage(invoice: &Invoice) -> InvoiceRecord {
    InvoiceRecord {
        id: invoice.id.clone(),
        document_type: Some(invoice.document_type.to_string()),
        series_id: invoice.series_id.clone(),
        series_code: invoice.series_code.clone(),
        number: invoice.number.clone(),
        issue_date: date_string(invoice.issue_date),
        due_date: date_string(invoice.due_date),
        accounting_date: date_string(invoice.accounting_date),
        client_id: invoice.client_id.clone(),
        items: line_item::all_to_storage(&invoice.items),
        subtotal: Some(invoice.subtotal),
        discount: Some(invoice.discount),
        tax: Some(invoice.tax),
        withholding: Some(invoice.withholding),
        retention: Some(invoice.retention),
        total: Some(invoice.total),
        paid_amount: Some(invoice.paid_amount),
        currency: Some(invoice.currency.clone()),
        exchange_rate: Some(invoice.exchange_rate),
        status: Some(invoice.status.to_string()),
        certified: Some(invoice.certified),
        hash: invoice.hash.clone(),
        company_id: invoice.company_id.clone(),
        work_location_id: invoice.work_location_id.clone(),
        cash_register_id: invoice.cash_register_id.clone(),
        operator_id: invoice.operator_id.clone(),
    }
}
