//! `ledgerlab-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the error taxonomy,
//! construction-time validation rules, identifiers and a generic repository.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{PatientId, TransactionId};
pub use repository::Repository;
pub use validation::{Rule, non_blank};
pub use value_object::ValueObject;
