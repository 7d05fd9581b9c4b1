use chrono::Utc;
use gestor_core::{EntityKind, StorageRecord};
use sqlx::SqlitePool;

/// Persists storage-shape records as JSON bodies keyed by
/// (company, kind, id). Listing follows insertion order.
#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct RecordRow {
    body: String,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(
        &self,
        company: &str,
        kind: EntityKind,
    ) -> Result<Vec<StorageRecord>, sqlx::Error> {
        let rows: Vec<RecordRow> = sqlx::query_as(
            "SELECT body FROM records WHERE company_id = ? AND kind = ? ORDER BY rowid",
        )
        .bind(company)
        .bind(kind.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|row| decode(kind, &row.body)).collect()
    }

    /// Inserts a record that already carries its id.
    pub async fn insert(&self, company: &str, record: &StorageRecord) -> Result<(), sqlx::Error> {
        let id = record.id().ok_or_else(|| {
            sqlx::Error::Protocol(format!("{} record has no id", record.kind()))
        })?;
        let body = encode(record)?;
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO records (company_id, kind, id, body, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(company)
        .bind(record.kind().to_string())
        .bind(id)
        .bind(&body)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Replaces the body of an existing record. Returns false when no row
    /// matched.
    pub async fn update(
        &self,
        company: &str,
        id: &str,
        record: &StorageRecord,
    ) -> Result<bool, sqlx::Error> {
        let body = encode(record)?;
        let result = sqlx::query(
            "UPDATE records SET body = ?, updated_at = ? WHERE company_id = ? AND kind = ? AND id = ?",
        )
        .bind(&body)
        .bind(Utc::now().to_rfc3339())
        .bind(company)
        .bind(record.kind().to_string())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row matched.
    pub async fn delete(
        &self,
        company: &str,
        kind: EntityKind,
        id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM records WHERE company_id = ? AND kind = ? AND id = ?")
            .bind(company)
            .bind(kind.to_string())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn encode(record: &StorageRecord) -> Result<String, sqlx::Error> {
    serde_json::to_string(record).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn decode(kind: EntityKind, body: &str) -> Result<StorageRecord, sqlx::Error> {
    serde_json::from_str(body)
        .and_then(|value| StorageRecord::from_json(kind, value))
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
