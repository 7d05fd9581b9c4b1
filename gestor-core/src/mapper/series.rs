use super::coerce::{text, variant};
use crate::models::Series;
use crate::schema::SeriesRecord;

pub fn to_application(record: SeriesRecord) -> Series {
    Series {
        id: record.id,
        name: text(record.name),
        code: text(record.code),
        document_type: variant(record.document_type.as_deref()),
        year: record
            .year
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or(0),
        next_number: record.next_number.unwrap_or(1),
        active: record.active.unwrap_or(true),
    }
}

pub fn to_storage(series: &Series) -> SeriesRecord {
    SeriesRecord {
        id: series.id.clone(),
        name: Some(series.name.clone()),
        code: Some(series.code.clone()),
        document_type: Some(series.document_type.to_string()),
        year: Some(i64::from(series.year)),
        next_number: Some(series.next_number),
        active: Some(series.active),
    }
}
