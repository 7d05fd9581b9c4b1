use super::coerce::{date, date_string, number_or_zero, text_or, variant};
use super::line_item;
use crate::models::{Purchase, DEFAULT_PURCHASE_TYPE, UNRESOLVED_PARTY};
use crate::schema::PurchaseRecord;

pub fn to_application(record: PurchaseRecord) -> Purchase {
    Purchase {
        id: record.id,
        purchase_type: text_or(record.purchase_type, DEFAULT_PURCHASE_TYPE),
        supplier_id: record.supplier_id,
        supplier_name: UNRESOLVED_PARTY.to_string(),
        document_number: record.document_number,
        document_date: date(record.document_date.as_deref()),
        due_date: date(record.due_date.as_deref()),
        items: line_item::all_to_application(record.items),
        subtotal: number_or_zero(record.subtotal),
        tax_amount: number_or_zero(record.tax_amount),
        total: number_or_zero(record.total),
        status: variant(record.status.as_deref()),
        warehouse_id: record.warehouse_id,
        payment_method_id: record.payment_method_id,
    }
}

pub fn to_storage(purchase: &Purchase) -> PurchaseRecord {
    PurchaseRecord {
        id: purchase.id.clone(),
        purchase_type: Some(purchase.purchase_type.clone()),
        supplier_id: purchase.supplier_id.clone(),
        document_number: purchase.document_number.clone(),
        document_date: date_string(purchase.document_date),
        due_date: date_string(purchase.due_date),
        items: line_item::all_to_storage(&purchase.items),
        subtotal: Some(purchase.subtotal),
        tax_amount: Some(purchase.tax_amount),
        total: Some(purchase.total),
        status: Some(purchase.status.to_string()),
        warehouse_id: purchase.warehouse_id.clone(),
        payment_method_id: purchase.payment_method_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineItem, PurchaseStatus};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_preserves_fields() {
        let mut purchase = Purchase::new("f-1", "FT 2025/77").with_items(vec![
            LineItem::new("Cimento 50kg", 10.0, 7000.0).with_tax_rate(14.0),
        ]);
        purchase.id = Some("cp-1".into());
        purchase.purchase_type = "importacao".into();
        purchase.document_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        purchase.status = PurchaseStatus::Recebida;
        purchase.warehouse_id = Some("arm-1".into());
        purchase.payment_method_id = Some("mp-2".into());

        assert_eq!(to_application(to_storage(&purchase)), purchase);
    }

    #[test]
    fn test_amounts_carried_and_items_defaulted() {
        let purchase = to_application(PurchaseRecord {
            subtotal: Some(1000.0),
            tax_amount: Some(140.0),
            total: Some(1140.0),
            ..PurchaseRecord::default()
        });
        assert_eq!(purchase.subtotal, 1000.0);
        assert_eq!(purchase.tax_amount, 140.0);
        assert_eq!(purchase.total, 1140.0);
        assert!(purchase.items.is_empty());
        assert_eq!(purchase.purchase_type, "compra");
    }
}
