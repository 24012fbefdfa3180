pub mod address;
pub mod appointment;
pub mod client;
pub(crate) mod macros;
pub mod service;

// Re-export all models for easy importing
pub use address::*;
pub use appointment::*;
pub use client::*;
pub use service::*;
