//! Interactive menu for the hospital record system.
//!
//! The CLI reads one menu choice at a time, runs it to completion and
//! prints the result. It is generic over its input and output so a whole
//! session can be scripted in tests.

use crate::error::{HospitalError, Result};
use crate::hospital::Hospital;
use crate::models::{Doctor, Patient, RecordKind};
use crate::queries::{
    age_statistics, doctors_by_specialization, format_ailments, patients_sorted_by_age,
    search_doctor_by_id, search_patient_by_id, unique_ailments,
};
use std::io::{BufRead, Write};
use std::num::IntErrorKind;
use tracing::{debug, warn};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddPatient,
    AddDoctor,
    ViewPatients,
    ViewDoctors,
    SearchPatient,
    SearchDoctor,
    AgeStatistics,
    UniqueAilments,
    DoctorsBySpecialization,
    SortPatientsByAge,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::AddPatient,
        MenuChoice::AddDoctor,
        MenuChoice::ViewPatients,
        MenuChoice::ViewDoctors,
        MenuChoice::SearchPatient,
        MenuChoice::SearchDoctor,
        MenuChoice::AgeStatistics,
        MenuChoice::UniqueAilments,
        MenuChoice::DoctorsBySpecialization,
        MenuChoice::SortPatientsByAge,
        MenuChoice::Exit,
    ];

    /// Map a menu number (1-based) to its entry.
    pub fn from_number(number: i64) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(&self) -> &str {
        match self {
            MenuChoice::AddPatient => "Add a Patient",
            MenuChoice::AddDoctor => "Add a Doctor",
            MenuChoice::ViewPatients => "View All Patients",
            MenuChoice::ViewDoctors => "View All Doctors",
            MenuChoice::SearchPatient => "Search Patient by ID",
            MenuChoice::SearchDoctor => "Search Doctor by ID",
            MenuChoice::AgeStatistics => "View Age Statistics",
            MenuChoice::UniqueAilments => "List Unique Ailments",
            MenuChoice::DoctorsBySpecialization => "List Doctors by Specialization",
            MenuChoice::SortPatientsByAge => "Sort Patients by Age",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Parse the raw menu input into a number.
///
/// Numbers too large for `i64` saturate, so they still land out of range
/// instead of being reported as non-numeric.
pub fn parse_choice(input: &str) -> Result<i64> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(number) => Ok(number),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(HospitalError::InvalidChoice(input.to_string())),
        },
    }
}

/// Parse a non-negative age.
pub fn parse_age(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| HospitalError::InvalidAge(input.trim().to_string()))
}

/// Text fields collected by an add flow before the record is built.
struct PersonInput {
    name: String,
    age: u32,
    gender: String,
    id: String,
    extra: String,
}

pub struct HospitalCli<R, W> {
    hospital: Hospital,
    input: R,
    output: W,
    running: bool,
}

impl<R: BufRead, W: Write> HospitalCli<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HospitalCli {
            hospital: Hospital::new(),
            input,
            output,
            running: true,
        }
    }

    /// Consume the CLI, returning the registry and the output sink.
    pub fn into_parts(self) -> (Hospital, W) {
        (self.hospital, self.output)
    }

    fn print_heading(&mut self, heading: &str) -> Result<()> {
        writeln!(self.output, "{}", heading)?;
        writeln!(self.output, "{}", "=".repeat(heading.chars().count()))?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Welcome to the Enhanced Hospital Management System")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Prompt and read one line. Returns `None` once input is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line is handled like any other bad input.
    fn get_input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(self.output)?;
            self.running = false;
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Collect name, age, gender, ID and the kind-specific field.
    ///
    /// An invalid age ends the flow before the remaining prompts.
    fn read_person(
        &mut self,
        kind: RecordKind,
        extra_prompt: &str,
    ) -> Result<Option<PersonInput>> {
        let who = kind.name();

        let Some(name) = self.get_input(&format!("Enter {}'s Name: ", who))? else {
            return Ok(None);
        };
        let Some(raw_age) = self.get_input(&format!("Enter {}'s Age: ", who))? else {
            return Ok(None);
        };
        let age = match parse_age(&raw_age) {
            Ok(age) => age,
            Err(e) => {
                warn!(kind = who, error = %e, "add aborted");
                writeln!(self.output, "Error: Invalid input for age. Please try again.")?;
                return Ok(None);
            }
        };
        let gender_prompt = format!("Enter {}'s Gender (Male/Female): ", who);
        let Some(gender) = self.get_input(&gender_prompt)? else {
            return Ok(None);
        };
        let Some(id) = self.get_input(&format!("Enter {} ID: ", who))? else {
            return Ok(None);
        };
        let Some(extra) = self.get_input(extra_prompt)? else {
            return Ok(None);
        };

        Ok(Some(PersonInput {
            name,
            age,
            gender,
            id,
            extra,
        }))
    }

    fn add_patient(&mut self) -> Result<()> {
        let Some(input) =
            self.read_person(RecordKind::Patient, "Enter Patient's Ailment: ")?
        else {
            return Ok(());
        };

        self.hospital.add_patient(Patient::new(
            &input.name,
            input.age,
            &input.gender,
            &input.id,
            &input.extra,
        ));
        writeln!(self.output, "Patient added successfully!")?;
        Ok(())
    }

    fn add_doctor(&mut self) -> Result<()> {
        let Some(input) =
            self.read_person(RecordKind::Doctor, "Enter Doctor's Specialization: ")?
        else {
            return Ok(());
        };

        self.hospital.add_doctor(Doctor::new(
            &input.name,
            input.age,
            &input.gender,
            &input.id,
            &input.extra,
        ));
        writeln!(self.output, "Doctor added successfully!")?;
        Ok(())
    }

    fn view_patients(&mut self) -> Result<()> {
        self.print_heading("All Patients:")?;
        for details in self.hospital.patient_details() {
            writeln!(self.output, "{}", details)?;
        }
        Ok(())
    }

    fn view_doctors(&mut self) -> Result<()> {
        self.print_heading("All Doctors:")?;
        for details in self.hospital.doctor_details() {
            writeln!(self.output, "{}", details)?;
        }
        Ok(())
    }

    fn search_patient(&mut self) -> Result<()> {
        let Some(id) = self.get_input("Enter Patient ID to search: ")? else {
            return Ok(());
        };
        let outcome = search_patient_by_id(&self.hospital, &id);
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    fn search_doctor(&mut self) -> Result<()> {
        let Some(id) = self.get_input("Enter Doctor ID to search: ")? else {
            return Ok(());
        };
        let outcome = search_doctor_by_id(&self.hospital, &id);
        writeln!(self.output, "{}", outcome)?;
        Ok(())
    }

    fn view_age_statistics(&mut self) -> Result<()> {
        match age_statistics(&self.hospital) {
            Some(stats) => {
                self.print_heading("Age Statistics:")?;
                writeln!(self.output, "Average Age: {:?}", stats.mean)?;
                writeln!(self.output, "Maximum Age: {}", stats.max)?;
                writeln!(self.output, "Minimum Age: {}", stats.min)?;
            }
            None => writeln!(self.output, "No data available for statistics.")?,
        }
        Ok(())
    }

    fn list_ailments(&mut self) -> Result<()> {
        self.print_heading("Unique Ailments:")?;
        let rendered = format_ailments(unique_ailments(&self.hospital));
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }

    fn list_specializations(&mut self) -> Result<()> {
        self.print_heading("Doctors by Specialization:")?;
        for line in doctors_by_specialization(&self.hospital) {
            writeln!(self.output, "{}", line)?;
        }
        Ok(())
    }

    fn sort_patients_by_age(&mut self) -> Result<()> {
        let sorted = patients_sorted_by_age(&self.hospital);
        self.print_heading("Sorted Patients by Age:")?;
        for details in sorted {
            writeln!(self.output, "{}", details)?;
        }
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        debug!(?choice, "menu choice");
        match choice {
            MenuChoice::AddPatient => self.add_patient(),
            MenuChoice::AddDoctor => self.add_doctor(),
            MenuChoice::ViewPatients => self.view_patients(),
            MenuChoice::ViewDoctors => self.view_doctors(),
            MenuChoice::SearchPatient => self.search_patient(),
            MenuChoice::SearchDoctor => self.search_doctor(),
            MenuChoice::AgeStatistics => self.view_age_statistics(),
            MenuChoice::UniqueAilments => self.list_ailments(),
            MenuChoice::DoctorsBySpecialization => self.list_specializations(),
            MenuChoice::SortPatientsByAge => self.sort_patients_by_age(),
            MenuChoice::Exit => {
                self.running = false;
                writeln!(self.output, "Exiting the system. Goodbye!")?;
                Ok(())
            }
        }
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.print_menu()?;

            let Some(raw) = self.get_input("Enter your choice: ")? else {
                break;
            };

            let number = match parse_choice(&raw) {
                Ok(number) => number,
                Err(e) => {
                    warn!(error = %e, "rejected menu input");
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            match MenuChoice::from_number(number) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    warn!(number, "menu choice out of range");
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }
}
