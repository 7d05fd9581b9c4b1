//! Per-session scope: which company, work location, cash register and
//! operator the current user is acting for.

use serde::{Deserialize, Serialize};

use crate::schema::StorageRecord;

/// Explicit session scope, built once from configuration and passed by
/// reference into every gateway call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub company_id: Option<String>,
    pub work_location_id: Option<String>,
    pub cash_register_id: Option<String>,
    pub operator_id: Option<String>,
}

impl SessionContext {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: Some(company_id.into()),
            ..Self::default()
        }
    }

    pub fn with_work_location(mut self, id: impl Into<String>) -> Self {
        self.work_location_id = Some(id.into());
        self
    }

    pub fn with_cash_register(mut self, id: impl Into<String>) -> Self {
        self.cash_register_id = Some(id.into());
        self
    }

    pub fn with_operator(mut self, id: impl Into<String>) -> Self {
        self.operator_id = Some(id.into());
        self
    }

    /// Key used by gateways to partition data; records outside any company
    /// share the empty scope.
    pub fn scope(&self) -> &str {
        self.company_id.as_deref().unwrap_or("")
    }

    /// Fills session references the record does not carry itself. Values
    /// already present on the record are never overwritten.
    pub fn stamp(&self, record: &mut StorageRecord) {
        match record {
            StorageRecord::Invoice(r) => {
                fill(&mut r.company_id, &self.company_id);
                fill(&mut r.work_location_id, &self.work_location_id);
                fill(&mut r.cash_register_id, &self.cash_register_id);
                fill(&mut r.operator_id, &self.operator_id);
            }
            StorageRecord::User(r) => fill(&mut r.company_id, &self.company_id),
            _ => {}
        }
    }
}

fn fill(slot: &mut Option<String>, value: &Option<String>) {
    let blank = slot.as_deref().map_or(true, |s| s.trim().is_empty());
    if blank {
        if let Some(value) = value {
            *slot = Some(value.clone());
        }
    }
}
