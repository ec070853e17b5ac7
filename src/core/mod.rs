//! Core estimation logic
//!
//! Value objects, boundary validation and the closed-form estimates behind
//! the HTTP endpoints.

pub mod estimation;
pub mod geo;
pub mod models;
pub mod validation;

pub use estimation::Estimator;
pub use validation::RequestValidator;
