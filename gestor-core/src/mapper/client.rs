use super::coerce::{number_or_zero, text, text_or, variant};
use crate::models::{Client, DEFAULT_CITY, DEFAULT_COUNTRY};
use crate::schema::ClientRecord;

/// Storage → application. The running balance starts at the stored
/// initial balance; transactions are attached by the caller.
pub fn to_application(record: ClientRecord) -> Client {
    let initial_balance = number_or_zero(record.initial_balance);
    Client {
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
        client_type: variant(record.client_type.as_deref()),
        iban: record.iban,
        shared_account: record.shared_account.unwrap_or(false),
        initial_balance,
        balance: initial_balance,
        transactions: Vec::new(),
    }
}

/// Application → storage. Balance and transactions are display-only and
/// are not written.
pub fn to_storage(client: &Client) -> ClientRecord {
    ClientRecord {
        id: client.id.clone(),
        name: Some(client.name.clone()),
        tax_id: Some(client.tax_id.clone()),
        email: client.email.clone(),
        phone: client.phone.clone(),
        street: client.street.clone(),
        city: Some(client.city.clone()),
        province: client.province.clone(),
        municipality: client.municipality.clone(),
        postal_code: client.postal_code.clone(),
        country: Some(client.country.clone()),
        client_type: Some(client.client_type.to_string()),
        iban: client.iban.clone(),
        shared_account: Some(client.shared_account),
        initial_balance: Some(client.initial_balance),
    }
}
