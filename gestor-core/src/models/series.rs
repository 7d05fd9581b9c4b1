use serde::{Deserialize, Serialize};

use super::invoice::DocumentType;

/// Application-shape document series ("série").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Series {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "tipoDocumento")]
    pub document_type: DocumentType,
    /// Fiscal year; `0` when the backend did not report one.
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "proximoNumero")]
    pub next_number: i64,
    #[serde(rename = "ativa")]
    pub active: bool,
}

impl Default for Series {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: String::new(),
            document_type: DocumentType::default(),
            year: 0,
            next_number: 1,
            active: true,
        }
    }
}

impl Series {
    pub fn new(name: impl Into<String>, code: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            year,
            ..Self::default()
        }
    }

    /// Full document reference for the next number, e.g. `FT A2025/12`.
    pub fn next_reference(&self) -> String {
        format!("{} {}/{}", self.document_type, self.code, self.next_number)
    }
}
