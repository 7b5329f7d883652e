//! Patients and their prescriptions.

pub mod patient;

pub use patient::{Patient, Prescription, PrescriptionBook};
