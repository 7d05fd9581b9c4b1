use super::coerce::{number_or_zero, text};
use crate::models::CashRegister;
use crate::schema::CashRegisterRecord;

pub fn to_application(record: CashRegisterRecord) -> CashRegister {
    CashRegister {
        id: record.id,
        name: text(record.name),
        description: record.description,
        work_location_id: record.work_location_id,
        opening_balance: number_or_zero(record.opening_balance),
        current_balance: number_or_zero(record.current_balance),
        open: record.open.unwrap_or(false),
        operator_id: record.operator_id,
    }
}

pub fn to_storage(register: &CashRegister) -> CashRegisterRecord {
    CashRegisterRecord {
        id: register.id.clone(),
        name: Some(register.name.clone()),
        description: register.description.clone(),
        work_location_id: register.work_location_id.clone(),
        opening_balance: Some(register.opening_balance),
        current_balance: Some(register.current_balance),
        open: Some(register.open),
        operator_id: register.operator_id.clone(),
    }
}
