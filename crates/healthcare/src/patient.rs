use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use ledgerlab_core::{
    DomainError, DomainResult, Entity, PatientId, Rule, ValueObject, non_blank,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    id: PatientId,
    name: String,
    age: u32,
}

impl Patient {
    pub fn new(id: PatientId, name: impl Into<String>, age: u32) -> DomainResult<Self> {
        Ok(Self {
            id,
            name: non_blank("name", name)?,
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl Entity for Patient {
    type Id = PatientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Patient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Patient {}: {}, {} years old", self.id, self.name, self.age)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    medicine: String,
    quantity: u32,
    dosage: String,
}

impl Prescription {
    pub fn new(
        medicine: impl Into<String>,
        quantity: i64,
        dosage: impl Into<String>,
    ) -> DomainResult<Self> {
        let medicine = non_blank("medicine", medicine)?;
        let quantity = Rule::NonNegative.check("quantity", quantity)?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| DomainError::validation("quantity", format!("{quantity} is too large")))?;
        Ok(Self {
            medicine,
            quantity,
            dosage: dosage.into(),
        })
    }

    pub fn medicine(&self) -> &str {
        &self.medicine
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn dosage(&self) -> &str {
        &self.dosage
    }
}

impl ValueObject for Prescription {}

impl core::fmt::Display for Prescription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} units ({})", self.medicine, self.quantity, self.dosage)
    }
}

/// Prescriptions grouped by patient.
#[derive(Debug, Clone, Default)]
pub struct PrescriptionBook {
    by_patient: HashMap<PatientId, Vec<Prescription>>,
}

impl PrescriptionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prescribe(&mut self, patient: PatientId, prescription: Prescription) {
        tracing::debug!(%patient, medicine = prescription.medicine(), "prescription added");
        self.by_patient.entry(patient).or_default().push(prescription);
    }

    /// Prescriptions for `patient`, oldest first; empty when none were written.
    pub fn for_patient(&self, patient: &PatientId) -> &[Prescription] {
        self.by_patient
            .get(patient)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
