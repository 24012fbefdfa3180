pub mod address;
pub mod appointment;
pub mod client;
pub mod service;

// Re-export all repositories for easy importing
pub use address::AddressRepository;
pub use appointment::AppointmentRepository;
pub use client::ClientRepository;
pub use service::ServiceRepository;
