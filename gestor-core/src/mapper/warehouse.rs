use super::coerce::text;
use crate::models::Warehouse;
use crate::schema::WarehouseRecord;

pub fn to_application(record: WarehouseRecord) -> Warehouse {
    Warehouse {
        id: record.id,
        name: text(record.name),
        code: record.code,
        location: record.location,
        manager: record.manager,
        active: record.active.unwrap_or(true),
    }
}

pub fn to_storage(warehouse: &Warehouse) -> WarehouseRecord {
    WarehouseRecord {
        id: warehouse.id.clone(),
        name: Some(warehouse.name.clone()),
        code: warehouse.code.clone(),
        location: warehouse.location.clone(),
        manager: warehouse.manager.clone(),
        active: Some(warehouse.active),
    }
}
