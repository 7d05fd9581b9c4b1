use super::coerce::{date, date_string, number_or_zero, text};
use crate::models::Metric;
use crate::schema::MetricRecord;

pub fn to_application(record: MetricRecord) -> Metric {
    Metric {
        id: record.id,
        name: text(record.name),
        value: number_or_zero(record.value),
        unit: record.unit,
        period: record.period,
        recorded_at: date(record.recorded_at.as_deref()),
    }
}

pub fn to_storage(metric: &Metric) -> MetricRecord {
    MetricRecord {
        id: metric.id.clone(),
        name: Some(metric.name.clone()),
        value: Some(metric.value),
        unit: metric.unit.clone(),
        period: metric.period.clone(),
        recorded_at: date_string(metric.recorded_at),
    }
}
