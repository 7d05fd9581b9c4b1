use super::coerce::{text, variant};
use crate::models::User;
use crate::schema::UserRecord;

pub fn to_application(record: UserRecord) -> User {
    User {
        id: record.id,
        name: text(record.name),
        email: text(record.email),
        role: variant(record.role.as_deref()),
        active: record.active.unwrap_or(true),
        company_id: record.company_id,
    }
}

pub fn to_storage(user: &User) -> UserRecord {
    UserRecord {
        id: user.id.clone(),
        name: Some(user.name.clone()),
        email: Some(user.email.clone()),
        role: Some(user.role.to_string()),
        active: Some(user.active),
        company_id: user.company_id.clone(),
    }
}
