//! Search and aggregate queries over the hospital registry.
//!
//! Every query is a linear scan over the registry's collections; the
//! age-sorted view is a stable sort.

use crate::hospital::Hospital;
use crate::models::{quote_text, Details, Identified, RecordKind};
use std::collections::BTreeSet;
use std::fmt;

/// Result of searching a collection by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Details),
    NotFound(RecordKind),
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn details(&self) -> Option<&Details> {
        match self {
            SearchOutcome::Found(details) => Some(details),
            SearchOutcome::NotFound(_) => None,
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Found(details) => write!(f, "{}", details),
            SearchOutcome::NotFound(kind) => write!(f, "{} not found!", kind.name()),
        }
    }
}

/// Find the first record whose identifier equals `id`.
///
/// Duplicate identifiers are allowed in the registry, so the earliest
/// insertion wins.
pub fn find_by_id<'a, T: Identified>(collection: &'a [T], id: &str) -> Option<&'a T> {
    collection.iter().find(|record| record.id() == id)
}

fn search<T: Identified>(collection: &[T], id: &str) -> SearchOutcome {
    match find_by_id(collection, id.trim()) {
        Some(record) => SearchOutcome::Found(record.details()),
        None => SearchOutcome::NotFound(T::KIND),
    }
}

/// Look up a patient by ID, trimming the target first.
pub fn search_patient_by_id(hospital: &Hospital, patient_id: &str) -> SearchOutcome {
    search(hospital.patients(), patient_id)
}

/// Look up a doctor by ID, trimming the target first.
pub fn search_doctor_by_id(hospital: &Hospital, doctor_id: &str) -> SearchOutcome {
    search(hospital.doctors(), doctor_id)
}

/// Mean, maximum and minimum age over a set of people.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeStats {
    pub mean: f64,
    pub max: u32,
    pub min: u32,
}

impl AgeStats {
    /// Compute statistics, or `None` when there are no ages.
    pub fn from_ages(ages: &[u32]) -> Option<Self> {
        let max = *ages.iter().max()?;
        let min = *ages.iter().min()?;
        let total: f64 = ages.iter().map(|&age| f64::from(age)).sum();

        Some(AgeStats {
            mean: total / ages.len() as f64,
            max,
            min,
        })
    }
}

/// Age statistics over all patients and doctors combined.
pub fn age_statistics(hospital: &Hospital) -> Option<AgeStats> {
    let ages: Vec<u32> = hospital
        .patients()
        .iter()
        .map(|p| p.person.age)
        .chain(hospital.doctors().iter().map(|d| d.person.age))
        .collect();

    AgeStats::from_ages(&ages)
}

/// Distinct ailments recorded so far.
pub fn unique_ailments(hospital: &Hospital) -> &BTreeSet<String> {
    hospital.ailments()
}

/// Render an ailment set the way the console shows it: `{'Cold', 'Flu'}`.
pub fn format_ailments(ailments: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = ailments.iter().map(|a| quote_text(a)).collect();
    format!("{{{}}}", quoted.join(", "))
}

/// One line per specialization: `"Cardiology: Alice Smith, Bob Jones"`.
pub fn doctors_by_specialization(hospital: &Hospital) -> Vec<String> {
    hospital
        .specializations()
        .iter()
        .map(|(spec, names)| format!("{}: {}", spec, names.join(", ")))
        .collect()
}

/// Patient detail mappings sorted by age, ties kept in insertion order.
pub fn patients_sorted_by_age(hospital: &Hospital) -> Vec<Details> {
    let mut details = hospital.patient_details();
    // sort_by_key is stable
    details.sort_by_key(|d| d.age().unwrap_or_default());
    details
}
