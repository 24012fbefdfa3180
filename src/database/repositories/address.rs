use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{Address, AddressInput};

#[derive(Clone)]
pub struct AddressRepository {
    pool: SqlitePool,
}

impl AddressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_address(&self, input: AddressInput) -> Result<Address> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (client_id, street, number, neighborhood, city, state, zip_code)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING id, client_id, street, number, neighborhood, city, state, zip_code
            "#,
        )
        .bind(input.client_id)
        .bind(&input.street)
        .bind(&input.number)
        .bind(&input.neighborhood)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip_code)
        .fetch_one(&self.pool)
        .await?;

        Ok(address)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, client_id, street, number, neighborhood, city, state, zip_code
            FROM addresses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    pub async fn get_client_addresses(&self, client_id: i64) -> Result<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT id, client_id, street, number, neighborhood, city, state, zip_code
            FROM addresses
            WHERE client_id = ?
            ORDER BY id
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(addresses)
    }

    pub async fn update_address(&self, id: i64, input: AddressInput) -> Result<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses
            SET client_id = ?, street = ?, number = ?, neighborhood = ?, city = ?, state = ?, zip_code = ?
            WHERE id = ?
            RETURNING id, client_id, street, number, neighborhood, city, state, zip_code
            "#,
        )
        .bind(input.client_id)
        .bind(&input.street)
        .bind(&input.number)
        .bind(&input.neighborhood)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip_code)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(address)
    }

    /// Deletes the address. Appointments pointing at it keep existing with no address.
    pub async fn delete_address(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
