use super::coerce::{number_or, number_or_zero, text, text_or};
use crate::models::{Product, DEFAULT_TAX_RATE, DEFAULT_UNIT};
use crate::schema::ProductRecord;

pub fn to_application(record: ProductRecord) -> Product {
    Product {
        id: record.id,
        code: record.code,
        name: text(record.name),
        description: record.description,
        unit: text_or(record.unit, DEFAULT_UNIT),
        price: number_or_zero(record.price),
        cost: number_or_zero(record.cost),
        tax_rate: number_or(record.tax_rate, DEFAULT_TAX_RATE),
        stock: number_or_zero(record.stock),
        category: record.category,
        active: record.active.unwrap_or(true),
    }
}

pub fn to_storage(product: &Product) -> ProductRecord {
    ProductRecord {
        id: product.id.clone(),
        code: product.code.clone(),
        name: Some(product.name.clone()),
        description: product.description.clone(),
        unit: Some(product.unit.clone()),
        price: Some(product.price),
        cost: Some(product.cost),
        tax_rate: Some(product.tax_rate),
        stock: Some(product.stock),
        category: product.category.clone(),
        active: Some(product.active),
    }
}
