#![allow(dead_code)]

use actix_web::{App, web};
use anyhow::Result;
use chrono::{Duration, NaiveDateTime, Timelike, Utc};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName};
use fake::faker::internet::en::{SafeEmail, Username};
use sqlx::SqlitePool;
use std::env;
use tempfile::TempDir;
use uuid::Uuid;

use studio_be::config::Config;
use studio_be::database::init_database;
use studio_be::database::models::*;
use studio_be::middleware::RequestIdMiddleware;
use studio_be::routes;
use studio_be::{AddressRepository, AppointmentRepository, ClientRepository, ServiceRepository};

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite://{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

/// A fresh database plus every repository bound to it.
pub struct TestContext {
    pub db: TestDb,
    pub config: Config,
    pub services: ServiceRepository,
    pub clients: ClientRepository,
    pub addresses: AddressRepository,
    pub appointments: AppointmentRepository,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let db = TestDb::new().await?;
        let config = Config::test_config()?;

        Ok(TestContext {
            services: ServiceRepository::new(db.pool.clone()),
            clients: ClientRepository::new(db.pool.clone()),
            addresses: AddressRepository::new(db.pool.clone()),
            appointments: AppointmentRepository::new(db.pool.clone()),
            db,
            config,
        })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }

    /// Actix app wired the same way as the server binary. The app owns clones of
    /// the repositories, so it does not borrow the context.
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.services.clone()))
            .app_data(web::Data::new(self.config.clone()))
            .wrap(RequestIdMiddleware)
            .configure(routes::configure)
    }

    pub async fn create_client(&self) -> Client {
        self.clients
            .create_client(MockData::client())
            .await
            .expect("Failed to create test client")
    }

    pub async fn create_address(&self, client_id: i64) -> Address {
        self.addresses
            .create_address(MockData::address(client_id))
            .await
            .expect("Failed to create test address")
    }

    pub async fn create_service(&self, name: &str) -> Service {
        self.services
            .create_service(MockData::service(name))
            .await
            .expect("Failed to create test service")
    }

    pub async fn create_appointment(
        &self,
        client_id: i64,
        service_id: i64,
        address_id: Option<i64>,
    ) -> Appointment {
        self.appointments
            .create_appointment(MockData::appointment(client_id, service_id, address_id))
            .await
            .expect("Failed to create test appointment")
    }
}

// Mock data generators
pub struct MockData;

impl MockData {
    pub fn client() -> ClientInput {
        let username: String = Username().fake();
        ClientInput {
            username: format!("{}_{}", username, Uuid::new_v4().simple()),
            email: Some(SafeEmail().fake()),
        }
    }

    pub fn address(client_id: i64) -> AddressInput {
        let zip_prefix: u32 = (10000..99999).fake();
        let zip_suffix: u32 = (100..999).fake();
        AddressInput {
            client_id,
            street: StreetName().fake(),
            number: BuildingNumber().fake(),
            neighborhood: "Centro".to_string(),
            city: CityName().fake(),
            state: StateAbbr().fake(),
            zip_code: format!("{}-{}", zip_prefix, zip_suffix),
        }
    }

    pub fn service(name: &str) -> ServiceInput {
        ServiceInput {
            name: name.to_string(),
            description: Some(format!("{} at the studio", name)),
            price: bigdecimal::BigDecimal::from(50),
            duration_minutes: 45,
            image: None,
        }
    }

    pub fn appointment(client_id: i64, service_id: i64, address_id: Option<i64>) -> AppointmentInput {
        AppointmentInput {
            client_id,
            service_id,
            address_id,
            appointment_time: Self::future_time(1),
            status: None,
            appointment_type: None,
        }
    }

    /// A whole-second timestamp `days` from now.
    pub fn future_time(days: i64) -> NaiveDateTime {
        let time = Utc::now().naive_utc() + Duration::days(days);
        time.with_nanosecond(0).unwrap_or(time)
    }
}

// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    pub async fn record_count(pool: &SqlitePool, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(pool)
            .await
            .expect("Failed to count records")
    }

    pub async fn assert_record_count(pool: &SqlitePool, table: &str, expected_count: i64) {
        let result = Self::record_count(pool, table).await;

        assert_eq!(
            result, expected_count,
            "Expected {} records in {} table, but found {}",
            expected_count, table, result
        );
    }
}

pub fn setup_test_env() {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
