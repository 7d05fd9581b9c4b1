//! Individual validation rules.
//!
//! Every rule returns `None` when satisfied or `Some(message)` when
//! violated, so one violated rule contributes exactly one message.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]{2,}$").expect("static email pattern"))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn digit_count(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

pub fn name(value: Option<&str>) -> Option<String> {
    match present(value) {
        None => Some("Nome é obrigatório".to_string()),
        Some(name) if name.chars().count() < 3 => {
            Some("Nome deve ter pelo menos 3 caracteres".to_string())
        }
        Some(_) => None,
    }
}

pub fn required(label: &str, value: Option<&str>) -> Option<String> {
    match present(value) {
        None => Some(format!("{} é obrigatório", label)),
        Some(_) => None,
    }
}

/// NIF: 9 or 10 digits once separators and letters are stripped.
pub fn tax_id(value: Option<&str>) -> Option<String> {
    match present(value) {
        None => Some("NIF é obrigatório".to_string()),
        Some(nif) if !matches!(digit_count(nif), 9 | 10) => {
            Some("NIF deve ter 9 ou 10 dígitos".to_string())
        }
        Some(_) => None,
    }
}

pub fn optional_email(value: Option<&str>) -> Option<String> {
    match present(value) {
        Some(email) if !email_pattern().is_match(email) => Some("Email inválido".to_string()),
        _ => None,
    }
}

pub fn required_email(value: Option<&str>) -> Option<String> {
    match present(value) {
        None => Some("Email é obrigatório".to_string()),
        Some(_) => optional_email(value),
    }
}

pub fn phone(value: Option<&str>) -> Option<String> {
    match present(value) {
        Some(phone) if !(9..=13).contains(&digit_count(phone)) => {
            Some("Telefone deve ter entre 9 e 13 dígitos".to_string())
        }
        _ => None,
    }
}

/// Two-letter country code, two check digits, then 11 to 30 alphanumerics.
pub fn iban(value: Option<&str>) -> Option<String> {
    let raw = present(value)?;
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = compact.as_bytes();
    let well_formed = (15..=34).contains(&bytes.len())
        && bytes[..2].iter().all(u8::is_ascii_alphabetic)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_alphanumeric);
    if well_formed {
        None
    } else {
        Some("IBAN inválido".to_string())
    }
}

pub fn swift(value: Option<&str>) -> Option<String> {
    let code = present(value)?;
    let well_formed = matches!(code.len(), 8 | 11)
        && code.chars().all(|c| c.is_ascii_alphanumeric())
        && code.chars().take(6).all(|c| c.is_ascii_alphabetic());
    if well_formed {
        None
    } else {
        Some("SWIFT inválido".to_string())
    }
}

/// An absent amount counts as zero.
pub fn non_negative(label: &str, value: Option<f64>) -> Option<String> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => {
            Some(format!("{} deve ser um valor válido e não negativo", label))
        }
        _ => None,
    }
}

pub fn finite(label: &str, value: Option<f64>) -> Option<String> {
    match value {
        Some(v) if !v.is_finite() => Some(format!("{} deve ser um valor numérico válido", label)),
        _ => None,
    }
}

/// Document totals must be present, finite and strictly positive.
pub fn positive_total(value: Option<f64>) -> Option<String> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => None,
        _ => Some("Total deve ser maior que zero".to_string()),
    }
}

pub fn exchange_rate(value: Option<f64>) -> Option<String> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Some("Câmbio deve ser maior que zero".to_string()),
        _ => None,
    }
}

pub fn has_items<T>(items: Option<&[T]>) -> Option<String> {
    match items {
        Some(items) if !items.is_empty() => None,
        _ => Some("Documento deve ter pelo menos um item".to_string()),
    }
}

/// Only checked when both dates are readable.
pub fn due_not_before_issue(issue: Option<&str>, due: Option<&str>) -> Option<String> {
    let parse = |s: Option<&str>| s.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
    match (parse(issue), parse(due)) {
        (Some(issue), Some(due)) if due < issue => Some(
            "Data de vencimento não pode ser anterior à data de emissão".to_string(),
        ),
        _ => None,
    }
}

pub fn percentage(label: &str, value: Option<f64>) -> Option<String> {
    match value {
        Some(v) if !(0.0..=100.0).contains(&v) || v.is_nan() => {
            Some(format!("{} deve estar entre 0 e 100", label))
        }
        _ => None,
    }
}

pub fn series_year(value: Option<i64>) -> Option<String> {
    match value {
        Some(year) if (2000..=2100).contains(&year) => None,
        _ => Some("Ano da série inválido".to_string()),
    }
}

pub fn next_number(value: Option<i64>) -> Option<String> {
    match value {
        Some(n) if n < 1 => Some("Próximo número deve ser pelo menos 1".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert!(name(None).is_some());
        assert!(name(Some("   ")).is_some());
        assert_eq!(
            name(Some(" AB ")).as_deref(),
            Some("Nome deve ter pelo menos 3 caracteres")
        );
        assert!(name(Some("Ana")).is_none());
        assert!(name(Some("Zé ")).is_some());
    }

    #[test]
    fn test_tax_id_strips_non_digits() {
        assert!(tax_id(Some("541-700-0001")).is_none());
        assert!(tax_id(Some("004567891")).is_none());
        assert!(tax_id(Some("12345")).is_some());
        assert!(tax_id(Some("12345678901")).is_some());
        assert_eq!(tax_id(None).as_deref(), Some("NIF é obrigatório"));
    }

    #[test]
    fn test_email_shape() {
        assert!(optional_email(None).is_none());
        assert!(optional_email(Some("")).is_none());
        assert!(optional_email(Some("geral@kianda.ao")).is_none());
        assert!(optional_email(Some("geral@kianda")).is_some());
        assert!(optional_email(Some("geral kianda@x.ao")).is_some());
        assert!(required_email(None).is_some());
    }

    #[test]
    fn test_phone_digit_range() {
        assert!(phone(Some("+244 923 000 111")).is_none());
        assert!(phone(Some("923000")).is_some());
        assert!(phone(Some("12345678901234")).is_some());
        assert!(phone(None).is_none());
    }

    #[test]
    fn test_iban_and_swift() {
        assert!(iban(Some("AO06 0040 0000 0123 4567 8901 2")).is_none());
        assert!(iban(Some("0006004000000123456789012")).is_some());
        assert!(iban(Some("AO06")).is_some());
        assert!(swift(Some("BAIPAOLU")).is_none());
        assert!(swift(Some("BAIPAOLUXXX")).is_none());
        assert!(swift(Some("BAI1AOLU")).is_some());
        assert!(swift(Some("BAIP")).is_some());
    }

    #[test]
    fn test_amounts() {
        assert!(non_negative("Subtotal", Some(0.0)).is_none());
        assert!(non_negative("Subtotal", None).is_none());
        assert!(non_negative("Subtotal", Some(-1.0)).is_some());
        assert!(non_negative("Subtotal", Some(f64::NAN)).is_some());
        assert!(positive_total(Some(0.0)).is_some());
        assert!(positive_total(None).is_some());
        assert!(positive_total(Some(f64::INFINITY)).is_some());
        assert!(positive_total(Some(0.01)).is_none());
        assert!(finite("Valor", Some(-5.0)).is_none());
        assert!(finite("Valor", Some(f64::NEG_INFINITY)).is_some());
    }

    #[test]
    fn test_items() {
        let empty: Vec<u8> = Vec::new();
        assert!(has_items(Some(empty.as_slice())).is_some());
        assert!(has_items::<u8>(None).is_some());
        assert!(has_items(Some([1u8].as_slice())).is_none());
    }

    #[test]
    fn test_due_date_order() {
        assert!(due_not_before_issue(Some("2025-03-10"), Some("2025-03-01")).is_some());
        assert!(due_not_before_issue(Some("2025-03-10"), Some("2025-03-10")).is_none());
        assert!(due_not_before_issue(None, Some("2025-03-01")).is_none());
    }

    #[test]
    fn test_percentage_and_series() {
        assert!(percentage("Taxa de IVA", Some(14.0)).is_none());
        assert!(percentage("Taxa de IVA", Some(140.0)).is_some());
        assert!(percentage("Taxa de IVA", Some(f64::NAN)).is_some());
        assert!(series_year(Some(2025)).is_none());
        assert!(series_year(Some(0)).is_some());
        assert!(next_number(Some(0)).is_some());
        assert!(next_number(Some(1)).is_none());
    }
}
