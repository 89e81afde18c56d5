//! Hospital registry holding every patient and doctor record.
//!
//! The registry owns two ordered collections plus the ailment set and the
//! specialization index, which are kept current as records are added.

use crate::models::{Details, Doctor, Patient};
use std::collections::BTreeSet;
use tracing::info;

/// In-memory registry of patients and doctors.
#[derive(Debug, Clone, Default)]
pub struct Hospital {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    ailments: BTreeSet<String>,
    specializations: Vec<(String, Vec<String>)>,
}

impl Hospital {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a patient and record its ailment.
    pub fn add_patient(&mut self, patient: Patient) {
        info!(
            patient_id = %patient.patient_id,
            registered_at = %patient.registered_at.format("%Y-%m-%d %H:%M:%S"),
            "patient added"
        );
        self.ailments.insert(patient.ailment.clone());
        self.patients.push(patient);
    }

    /// Add a doctor and file its name under its specialization.
    pub fn add_doctor(&mut self, doctor: Doctor) {
        info!(
            doctor_id = %doctor.doctor_id,
            registered_at = %doctor.registered_at.format("%Y-%m-%d %H:%M:%S"),
            "doctor added"
        );
        let name = doctor.person.name.clone();
        match self
            .specializations
            .iter()
            .position(|(spec, _)| *spec == doctor.specialization)
        {
            Some(index) => self.specializations[index].1.push(name),
            None => self
                .specializations
                .push((doctor.specialization.clone(), vec![name])),
        }
        self.doctors.push(doctor);
    }

    /// Patients in insertion order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Doctors in insertion order.
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Detail mappings of every patient, in insertion order.
    pub fn patient_details(&self) -> Vec<Details> {
        self.patients.iter().map(Patient::details).collect()
    }

    /// Detail mappings of every doctor, in insertion order.
    pub fn doctor_details(&self) -> Vec<Details> {
        self.doctors.iter().map(Doctor::details).collect()
    }

    /// Distinct ailments seen so far.
    pub fn ailments(&self) -> &BTreeSet<String> {
        &self.ailments
    }

    /// Specializations in first-seen order, each with its doctors' names.
    pub fn specializations(&self) -> &[(String, Vec<String>)] {
        &self.specializations
    }
}
