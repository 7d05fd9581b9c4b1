use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application-shape HR/business metric ("métrica").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Metric {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "valor")]
    pub value: f64,
    #[serde(rename = "unidade")]
    pub unit: Option<String>,
    #[serde(rename = "periodo")]
    pub period: Option<String>,
    #[serde(rename = "dataRegisto")]
    pub recorded_at: Option<NaiveDate>,
}

impl Metric {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            ..Self::default()
        }
    }
}
