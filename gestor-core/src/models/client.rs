use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::{self, Transaction};
use super::{DEFAULT_CITY, DEFAULT_COUNTRY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    #[default]
    Particular,
    Empresa,
    Publico,
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientType::Particular => write!(f, "particular"),
            ClientType::Empresa => write!(f, "empresa"),
            ClientType::Publico => write!(f, "publico"),
        }
    }
}

impl FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "particular" => Ok(ClientType::Particular),
            "empresa" => Ok(ClientType::Empresa),
            "publico" | "público" => Ok(ClientType::Publico),
            _ => Err(format!(
                "Invalid client type '{}'. Valid options: particular, empresa, publico",
                s
            )),
        }
    }
}

/// Application-shape client, as the UI renders and submits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Client {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "nif")]
    pub tax_id: String,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "morada")]
    pub street: Option<String>,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "provincia")]
    pub province: Option<String>,
    #[serde(rename = "municipio")]
    pub municipality: Option<String>,
    #[serde(rename = "codigoPostal")]
    pub postal_code: Option<String>,
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "tipoCliente")]
    pub client_type: ClientType,
    pub iban: Option<String>,
    #[serde(rename = "contaPartilhada")]
    pub shared_account: bool,
    #[serde(rename = "saldoInicial")]
    pub initial_balance: f64,
    /// Derived: initial balance plus every transaction amount.
    #[serde(rename = "saldo")]
    pub balance: f64,
    #[serde(rename = "movimentos")]
    pub transactions: Vec<Transaction>,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            tax_id: String::new(),
            email: None,
            phone: None,
            street: None,
            city: DEFAULT_CITY.to_string(),
            province: None,
            municipality: None,
            postal_code: None,
            country: DEFAULT_COUNTRY.to_string(),
            client_type: ClientType::default(),
            iban: None,
            shared_account: false,
            initial_balance: 0.0,
            balance: 0.0,
            transactions: Vec::new(),
        }
    }
}

impl Client {
    pub fn new(name: impl Into<String>, tax_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tax_id: tax_id.into(),
            ..Self::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_initial_balance(mut self, amount: f64) -> Self {
        self.initial_balance = amount;
        self.balance = amount + self.transactions.iter().map(|t| t.amount).sum::<f64>();
        self
    }

    /// Appends a display transaction and updates the running balance.
    pub fn push_transaction(&mut self, tx: Transaction) {
        self.balance = transaction::append(&mut self.transactions, self.balance, tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_defaults() {
        let client = Client::new("Kianda Lda", "5417000001");
        assert_eq!(client.city, "Luanda");
        assert_eq!(client.country, "Angola");
        assert_eq!(client.client_type, ClientType::Particular);
        assert!(client.transactions.is_empty());
    }

    #[test]
    fn test_partial_payload_deserializes() {
        let client: Client = serde_json::from_str(r#"{"nome":"AB","nif":"123"}"#).unwrap();
        assert_eq!(client.name, "AB");
        assert_eq!(client.tax_id, "123");
        assert_eq!(client.city, "Luanda");
        assert!(client.id.is_none());
    }

    #[test]
    fn test_running_balance() {
        let mut client = Client::new("Kianda Lda", "5417000001").with_initial_balance(1000.0);
        client.push_transaction(Transaction::new("FT A/1", 500.0));
        client.push_transaction(Transaction::new("RC A/1", -200.0));
        assert_eq!(client.balance, 1300.0);
        assert_eq!(client.transactions[1].balance, 1300.0);
    }

    #[test]
    fn test_client_type_from_str() {
        assert_eq!(ClientType::from_str("EMPRESA").unwrap(), ClientType::Empresa);
        assert_eq!(ClientType::from_str("público").unwrap(), ClientType::Publico);
        assert!(ClientType::from_str("vip").is_err());
    }

    #[test]
    fn test_client_json_uses_application_keys() {
        let client = Client::new("Kianda Lda", "5417000001");
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["nome"], "Kianda Lda");
        assert_eq!(json["tipoCliente"], "particular");
        assert_eq!(json["codigoPostal"], serde_json::Value::Null);
    }
}
