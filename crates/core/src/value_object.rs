//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a transaction record
/// or a prescription is fully described by its fields. To "modify" one, build a new
/// one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Prescription { medicine: String, quantity: u32, dosage: String }
///
/// impl ValueObject for Prescription {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
