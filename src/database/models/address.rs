use serde::{Deserialize, Serialize};

use super::Client;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Address {
    pub id: i64,
    pub client_id: i64,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String, // two-letter code
    pub zip_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressInput {
    pub client_id: i64,
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Human-readable label, e.g. `Rua das Flores, 12 (maria)`.
    pub fn label(&self, owner: &Client) -> String {
        format!("{}, {} ({})", self.street, self.number, owner.username)
    }
}
