use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{Appointment, AppointmentInput, AppointmentStatus};

const APPOINTMENT_COLUMNS: &str = "id, client_id, service_id, address_id, appointment_time, status, appointment_type, created_at";

#[derive(Clone)]
pub struct AppointmentRepository {
    pool: SqlitePool,
}

impl AppointmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Books an appointment. Status and type fall back to PENDING and STUDIO.
    pub async fn create_appointment(&self, input: AppointmentInput) -> Result<Appointment> {
        let now = Utc::now().naive_utc();
        let query = format!(
            r#"
            INSERT INTO appointments (client_id, service_id, address_id, appointment_time, status, appointment_type, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING {}
            "#,
            APPOINTMENT_COLUMNS
        );

        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(input.client_id)
            .bind(input.service_id)
            .bind(input.address_id)
            .bind(input.appointment_time)
            .bind(input.status.unwrap_or_default())
            .bind(input.appointment_type.unwrap_or_default())
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        log::info!(
            "Created appointment {} for client {} (service {})",
            appointment.id,
            appointment.client_id,
            appointment.service_id
        );

        Ok(appointment)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>> {
        let query = format!("SELECT {} FROM appointments WHERE id = ?", APPOINTMENT_COLUMNS);
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(appointment)
    }

    /// All appointments, most recent appointment time first.
    pub async fn get_all_appointments(&self) -> Result<Vec<Appointment>> {
        let query = format!(
            "SELECT {} FROM appointments ORDER BY appointment_time DESC, id DESC",
            APPOINTMENT_COLUMNS
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(appointments)
    }

    pub async fn get_client_appointments(&self, client_id: i64) -> Result<Vec<Appointment>> {
        let query = format!(
            "SELECT {} FROM appointments WHERE client_id = ? ORDER BY appointment_time DESC, id DESC",
            APPOINTMENT_COLUMNS
        );
        let appointments = sqlx::query_as::<_, Appointment>(&query)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(appointments)
    }

    /// Writes a new status. Any transition is accepted.
    pub async fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>> {
        let query = format!(
            "UPDATE appointments SET status = ? WHERE id = ? RETURNING {}",
            APPOINTMENT_COLUMNS
        );
        let appointment = sqlx::query_as::<_, Appointment>(&query)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        if let Some(appointment) = &appointment {
            log::info!("Appointment {} is now {}", appointment.id, appointment.status);
        }

        Ok(appointment)
    }

    pub async fn delete_appointment(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
