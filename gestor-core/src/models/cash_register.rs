use serde::{Deserialize, Serialize};

/// Application-shape cash register ("caixa").
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CashRegister {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "localTrabalhoId")]
    pub work_location_id: Option<String>,
    #[serde(rename = "saldoInicial")]
    pub opening_balance: f64,
    #[serde(rename = "saldoAtual")]
    pub current_balance: f64,
    #[serde(rename = "aberto")]
    pub open: bool,
    #[serde(rename = "operadorId")]
    pub operator_id: Option<String>,
}

impl CashRegister {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
