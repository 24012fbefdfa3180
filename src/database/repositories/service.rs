use anyhow::{Result, anyhow};
use sqlx::SqlitePool;

use crate::database::{
    models::{
        PRICE_DECIMAL_PLACES, PRICE_MAX_DIGITS, Service, ServiceInput, check_precision,
        format_price,
    },
    types::ServiceRow,
};

// Stored prices must already fit NUMERIC(7, 2); format_price only pads.
fn stored_price(input: &ServiceInput) -> Result<String> {
    check_precision(&input.price, PRICE_MAX_DIGITS, PRICE_DECIMAL_PLACES)
        .map_err(|message| anyhow!("Invalid price {}: {}", input.price, message))?;

    Ok(format_price(&input.price))
}

#[derive(Clone)]
pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create_service(&self, input: ServiceInput) -> Result<Service> {
        let price = stored_price(&input)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            INSERT INTO services (name, description, price, duration_minutes, image)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, name, description, price, duration_minutes, image
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(price)
        .bind(input.duration_minutes)
        .bind(&input.image)
        .fetch_one(&self.pool)
        .await?;

        log::info!("Created service {} ({})", row.id, row.name);

        row.try_into()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Service>> {
        let row = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, price, duration_minutes, image FROM services WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Service::try_from).transpose()
    }

    /// All services, alphabetical by name.
    pub async fn get_all_services(&self) -> Result<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            "SELECT id, name, description, price, duration_minutes, image FROM services ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Service::try_from).collect()
    }

    pub async fn update_service(&self, id: i64, input: ServiceInput) -> Result<Option<Service>> {
        let price = stored_price(&input)?;
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
            UPDATE services
            SET name = ?, description = ?, price = ?, duration_minutes = ?, image = ?
            WHERE id = ?
            RETURNING id, name, description, price, duration_minutes, image
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(price)
        .bind(input.duration_minutes)
        .bind(&input.image)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Service::try_from).transpose()
    }

    /// Deletes the service; appointments booked for it go with it.
    pub async fn delete_service(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
