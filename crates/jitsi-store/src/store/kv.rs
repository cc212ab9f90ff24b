//! Raw key/value access.

use super::Store;
use jitsi_core::error::JitsiError;

impl Store {
    /// Store a value (upsert by key).
    pub async fn set_value(&self, key: &str, value: &str) -> Result<(), JitsiError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| JitsiError::Store(format!("upsert failed: {e}")))?;

        Ok(())
    }

    /// Get a single value by key.
    pub async fn get_value(&self, key: &str) -> Result<Option<String>, JitsiError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| JitsiError::Store(format!("query failed: {e}")))?;

        Ok(row.map(|(v,)| v))
    }
}
