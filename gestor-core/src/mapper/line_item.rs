use super::coerce::{number_or_zero, text};
use crate::models::LineItem;
use crate::schema::LineItemRecord;

pub fn to_application(record: LineItemRecord) -> LineItem {
    LineItem {
        product_id: record.product_id,
        description: text(record.description),
        quantity: number_or_zero(record.quantity),
        unit_price: number_or_zero(record.unit_price),
        discount: number_or_zero(record.discount),
        tax_rate: number_or_zero(record.tax_rate),
        total: number_or_zero(record.total),
    }
}

pub fn to_storage(item: &LineItem) -> LineItemRecord {
    LineItemRecord {
        product_id: item.product_id.clone(),
        description: Some(item.description.clone()),
        quantity: Some(item.quantity),
        unit_price: Some(item.unit_price),
        discount: Some(item.discount),
        tax_rate: Some(item.tax_rate),
        total: Some(item.total),
    }
}

/// Absent item lists become empty.
pub fn all_to_application(records: Option<Vec<LineItemRecord>>) -> Vec<LineItem> {
    records
        .unwrap_or_default()
        .into_iter()
        .map(to_application)
        .collect()
}

pub fn all_to_storage(items: &[LineItem]) -> Option<Vec<LineItemRecord>> {
    Some(items.iter().map(to_storage).collect())
}
