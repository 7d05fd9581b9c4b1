use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A display-only movement on a client or supplier account.
///
/// Transactions are not ledger state; the storage backend owns the real
/// accounting entries. They only feed the running balance the UI shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "data")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "documento")]
    pub document: Option<String>,
    /// Signed amount: positive raises the balance, negative lowers it.
    #[serde(rename = "valor")]
    pub amount: f64,
    /// Balance after this entry was applied.
    #[serde(rename = "saldo")]
    pub balance: f64,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}

/// Appends `tx` to `ledger`, stamping it with the new running balance.
///
/// Returns the balance after the append.
pub(crate) fn append(ledger: &mut Vec<Transaction>, current: f64, mut tx: Transaction) -> f64 {
    let balance = current + tx.amount;
    tx.balance = balance;
    ledger.push(tx);
    balance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_tracks_running_balance() {
        let mut ledger = Vec::new();
        let balance = append(&mut ledger, 100.0, Transaction::new("FT 1", 50.0));
        let balance = append(&mut ledger, balance, Transaction::new("RC 1", -120.0));

        assert_eq!(balance, 30.0);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[0].balance, 150.0);
        assert_eq!(ledger[1].balance, 30.0);
    }

    #[test]
    fn test_builder() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let tx = Transaction::new("Fatura", 10.0)
            .with_date(date)
            .with_document("FT A/12");
        assert_eq!(tx.date, Some(date));
        assert_eq!(tx.document.as_deref(), Some("FT A/12"));
    }
}
