//! Data models for the hospital record system.
//!
//! This module defines the core data structures used throughout the system:
//! - Person: shared name/age/gender attributes
//! - Patient: Person plus patient ID and ailment
//! - Doctor: Person plus doctor ID and specialization
//! - Details: the key/value view of a record used for display and search

use chrono::{DateTime, Local};
use std::fmt;

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts at any alphabetic character that does not follow another
/// alphabetic character, so "o'neil" becomes "O'Neil".
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_alpha = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// Upper-case the first character and lower-case everything after it.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Patient,
    Doctor,
}

impl RecordKind {
    pub fn name(&self) -> &str {
        match self {
            RecordKind::Patient => "Patient",
            RecordKind::Doctor => "Doctor",
        }
    }
}

/// A single value in a detail mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Number(u32),
}

/// Quote text the way a dictionary dump shows it: single quotes, switching
/// to double quotes when the text holds an apostrophe but no double quote.
pub fn quote_text(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(&quote_text(s)),
        }
    }
}

/// Ordered key/value view of a record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Details {
    fields: Vec<(&'static str, FieldValue)>,
}

impl Details {
    fn push_text(&mut self, key: &'static str, value: &str) {
        self.fields.push((key, FieldValue::Text(value.to_string())));
    }

    fn push_number(&mut self, key: &'static str, value: u32) {
        self.fields.push((key, FieldValue::Number(value)));
    }

    /// Look up a field by its label.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(label, _)| *label == key)
            .map(|(_, value)| value)
    }

    /// Look up a text field by its label.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn age(&self) -> Option<u32> {
        match self.get("Age") {
            Some(FieldValue::Number(n)) => Some(*n),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(label, _)| *label)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}': {}", label, value)?;
        }
        write!(f, "}}")
    }
}

/// Attributes shared by patients and doctors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

impl Person {
    /// Create a person, normalizing name and gender.
    pub fn new(name: &str, age: u32, gender: &str) -> Self {
        Person {
            name: title_case(name.trim()),
            age,
            gender: capitalize(gender.trim()),
        }
    }

    pub fn details(&self) -> Details {
        let mut details = Details::default();
        details.push_text("Name", &self.name);
        details.push_number("Age", self.age);
        details.push_text("Gender", &self.gender);
        details
    }
}

/// Represents a patient admitted to the hospital.
#[derive(Debug, Clone)]
pub struct Patient {
    pub person: Person,
    pub patient_id: String,
    pub ailment: String,
    pub registered_at: DateTime<Local>,
}

impl Patient {
    pub fn new(name: &str, age: u32, gender: &str, patient_id: &str, ailment: &str) -> Self {
        Patient {
            person: Person::new(name, age, gender),
            patient_id: patient_id.trim().to_string(),
            ailment: capitalize(ailment.trim()),
            registered_at: Local::now(),
        }
    }

    /// Name, Age, Gender, Patient ID, Ailment.
    pub fn details(&self) -> Details {
        let mut details = self.person.details();
        details.push_text("Patient ID", &self.patient_id);
        details.push_text("Ailment", &self.ailment);
        details
    }
}

/// Represents a doctor on staff.
#[derive(Debug, Clone)]
pub struct Doctor {
    pub person: Person,
    pub doctor_id: String,
    pub specialization: String,
    pub registered_at: DateTime<Local>,
}

impl Doctor {
    pub fn new(name: &str, age: u32, gender: &str, doctor_id: &str, specialization: &str) -> Self {
        Doctor {
            person: Person::new(name, age, gender),
            doctor_id: doctor_id.trim().to_string(),
            specialization: capitalize(specialization.trim()),
            registered_at: Local::now(),
        }
    }

    /// Name, Age, Gender, Doctor ID, Specialization.
    pub fn details(&self) -> Details {
        let mut details = self.person.details();
        details.push_text("Doctor ID", &self.doctor_id);
        details.push_text("Specialization", &self.specialization);
        details
    }
}

/// A record that can be looked up by identifier.
pub trait Identified {
    const KIND: RecordKind;

    fn id(&self) -> &str;
    fn details(&self) -> Details;
}

impl Identified for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn id(&self) -> &str {
        &self.patient_id
    }

    fn details(&self) -> Details {
        Patient::details(self)
    }
}

impl Identified for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> &str {
        &self.doctor_id
    }

    fn details(&self) -> Details {
        Doctor::details(self)
    }
}
