use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Gestor,
    #[default]
    Operador,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Gestor => write!(f, "gestor"),
            UserRole::Operador => write!(f, "operador"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(UserRole::Admin),
            "gestor" => Ok(UserRole::Gestor),
            "operador" => Ok(UserRole::Operador),
            _ => Err(format!(
                "Invalid role '{}'. Valid options: admin, gestor, operador",
                s
            )),
        }
    }
}

/// Application-shape user ("utilizador").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    pub id: Option<String>,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "perfil")]
    pub role: UserRole,
    #[serde(rename = "ativo")]
    pub active: bool,
    #[serde(rename = "empresaId")]
    pub company_id: Option<String>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            email: String::new(),
            role: UserRole::default(),
            active: true,
            company_id: None,
        }
    }
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            ..Self::default()
        }
    }
}
