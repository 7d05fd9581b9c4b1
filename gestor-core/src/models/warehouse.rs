use serde::{Deserialize, Serialize};

/// Application-shape warehouse ("armazém").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Warehouse {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "codigo")]
    pub code: Option<String>,
    #[serde(rename = "localizacao")]
    pub location: Option<String>,
    #[serde(rename = "responsavel")]
    pub manager: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
}

impl Default for Warehouse {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            code: None,
            location: None,
            manager: None,
            active: true,
        }
    }
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
