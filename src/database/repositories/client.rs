use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Client, ClientInput};

#[derive(Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_client(&self, input: ClientInput) -> Result<Client> {
        let now = Utc::now().naive_utc();
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (username, email, created_at)
            VALUES (?, ?, ?)
            RETURNING id, username, email, created_at
            "#,
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, username, email, created_at FROM clients WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Deletes the client together with every address and appointment it owns.
    pub async fn delete_client(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
