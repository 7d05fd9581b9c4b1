use super::coerce::{text, text_or, variant};
use crate::models::{Supplier, DEFAULT_CITY, DEFAULT_COUNTRY};
use crate::schema::SupplierRecord;

pub fn to_application(record: SupplierRecord) -> Supplier {
    Supplier {
        id: record.id,
        name: text(record.name),
        tax_id: text(record.tax_id),
        email: record.email,
        phone: record.phone,
        street: record.street,
        city: text_or(record.city, DEFAULT_CITY),
        province: record.province,
        municipality: record.municipality,
        postal_code: record.postal_code,
        country: text_or(record.country, DEFAULT_COUNTRY),
        supplier_type: variant(record.supplier_type.as_deref()),
        iban: record.iban,
        swift: record.swift,
        bank_initials: record.bank_initials,
        social_security: record.social_security,
        balance: 0.0,
        transactions: Vec::new(),
    }
}

pub fn to_storage(supplier: &Supplier) -> SupplierRecord {
    SupplierRecord {
        id: supplier.id.clone(),
        name: Some(supplier.name.clone()),
        tax_id: Some(supplier.tax_id.clone()),
        email: supplier.email.clone(),
        phone: supplier.phone.clone(),
        street: supplier.street.clone(),
        city: Some(supplier.city.clone()),
        province: supplier.province.clone(),
        municipality: supplier.municipality.clone(),
        postal_code: supplier.postal_code.clone(),
        country: Some(supplier.country.clone()),
        supplier_type: Some(supplier.supplier_type.to_string()),
        iban: supplier.iban.clone(),
        swift: supplier.swift.clone(),
        bank_initials: supplier.bank_initials.clone(),
        social_security: supplier.social_security.clone(),
    }
}
