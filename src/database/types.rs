use std::str::FromStr;

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;

// Database row types that match the exact SQLite schema
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ServiceRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub duration_minutes: i32,
    pub image: Option<String>,
}

// Conversion functions
impl TryFrom<ServiceRow> for super::models::Service {
    type Error = anyhow::Error;

    fn try_from(row: ServiceRow) -> Result<Self> {
        let price = BigDecimal::from_str(&row.price)
            .with_context(|| format!("Invalid stored price for service {}: {}", row.id, row.price))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            duration_minutes: row.duration_minutes,
            image: row.image,
        })
    }
}
