use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::macros::string_enum;
use super::{Client, Service};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub client_id: i64,
    pub service_id: i64,
    pub address_id: Option<i64>, // nulled when the address is deleted
    pub appointment_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub appointment_type: AppointmentType,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentInput {
    pub client_id: i64,
    pub service_id: i64,
    pub address_id: Option<i64>,
    pub appointment_time: NaiveDateTime,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub appointment_type: Option<AppointmentType>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum AppointmentStatus {
        #[default]
        Pending => "PENDING",
        Confirmed => "CONFIRMED",
        Done => "DONE",
        Canceled => "CANCELED",
    }
}

string_enum! {
    #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum AppointmentType {
        #[default]
        Studio => "STUDIO",
        Home => "HOME",
    }
}

impl Appointment {
    /// Human-readable label, e.g. `Manicure for maria - 05/03/2025 at 14:30`.
    pub fn label(&self, service: &Service, client: &Client) -> String {
        format!(
            "{} for {} - {}",
            service.name,
            client.username,
            self.appointment_time.format("%d/%m/%Y at %H:%M")
        )
    }
}
