pub mod services;
pub mod shared;
pub mod validation;

#[cfg(test)]
mod validation_tests;
