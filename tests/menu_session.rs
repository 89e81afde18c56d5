use carebook::HospitalCli;
use std::io::Cursor;

fn run_session(script: &str) -> (carebook::Hospital, String) {
    let mut cli = HospitalCli::new(Cursor::new(script.to_string()), Vec::new());
    cli.run().expect("session should not fail");
    let (hospital, output) = cli.into_parts();
    (hospital, String::from_utf8(output).expect("output is utf-8"))
}

fn add_patient(name: &str, age: &str, gender: &str, id: &str, ailment: &str) -> String {
    format!("1\n{name}\n{age}\n{gender}\n{id}\n{ailment}\n")
}

fn add_doctor(name: &str, age: &str, gender: &str, id: &str, spec: &str) -> String {
    format!("2\n{name}\n{age}\n{gender}\n{id}\n{spec}\n")
}

#[test]
fn add_then_search_patient_returns_normalized_details() {
    let script = add_patient("  jane doe ", "34", " female ", " p1 ", " flu ") + "5\n p1 \n11\n";
    let (hospital, output) = run_session(&script);

    assert_eq!(hospital.patients().len(), 1);
    assert!(output.contains("Patient added successfully!"));
    assert!(output.contains(
        "{'Name': 'Jane Doe', 'Age': 34, 'Gender': 'Female', 'Patient ID': 'p1', 'Ailment': 'Flu'}"
    ));
    assert!(output.ends_with("Exiting the system. Goodbye!\n"));
}

#[test]
fn search_misses_report_not_found() {
    let (_, output) = run_session("5\nnobody\n6\nnobody\n11\n");

    assert!(output.contains("Patient not found!"));
    assert!(output.contains("Doctor not found!"));
}

#[test]
fn invalid_age_abandons_only_that_add() {
    let script = "1\nbob\nabc\n".to_string()
        + &add_doctor("gregory house", "50", "male", "d1", "diagnostics")
        + "11\n";
    let (hospital, output) = run_session(&script);

    assert!(output.contains("Error: Invalid input for age. Please try again."));
    assert!(!output.contains("Enter Patient's Gender"));
    assert!(hospital.patients().is_empty());
    assert_eq!(hospital.doctors().len(), 1);
    assert!(output.contains("Doctor added successfully!"));
}

#[test]
fn bad_menu_input_keeps_the_loop_running() {
    let (_, output) = run_session("hello\n42\n0\n11\n");

    assert_eq!(output.matches("Invalid input. Please enter a number.").count(), 1);
    assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
    assert_eq!(
        output
            .matches("Welcome to the Enhanced Hospital Management System")
            .count(),
        4
    );
    assert!(output.contains("Exiting the system. Goodbye!"));
}

#[test]
fn end_of_input_stops_without_goodbye() {
    let (_, output) = run_session("3\n");

    assert!(output.contains("All Patients:\n============="));
    assert!(!output.contains("Goodbye"));
}

#[test]
fn menu_lists_all_entries() {
    let (_, output) = run_session("11\n");

    assert!(output.contains("1. Add a Patient\n"));
    assert!(output.contains("9. List Doctors by Specialization\n"));
    assert!(output.contains("10. Sort Patients by Age\n"));
    assert!(output.contains("11. Exit\n"));
    assert!(output.contains("Enter your choice: "));
}

#[test]
fn age_statistics_cover_patients_and_doctors() {
    let (_, empty) = run_session("7\n11\n");
    assert!(empty.contains("No data available for statistics."));
    assert!(!empty.contains("Age Statistics:"));

    let script = add_patient("a", "30", "f", "p1", "flu")
        + &add_patient("b", "50", "m", "p2", "cold")
        + &add_doctor("c", "40", "f", "d1", "cardiology")
        + "7\n11\n";
    let (_, output) = run_session(&script);

    assert!(output.contains("Age Statistics:\n===============\n"));
    assert!(output.contains("Average Age: 40.0\n"));
    assert!(output.contains("Maximum Age: 50\n"));
    assert!(output.contains("Minimum Age: 30\n"));
}

#[test]
fn sorted_view_is_stable_and_registry_order_is_kept() {
    let script = add_patient("old one", "60", "m", "p1", "gout")
        + &add_patient("young one", "20", "f", "p2", "acne")
        + &add_patient("old two", "60", "f", "p3", "gout")
        + "10\n3\n11\n";
    let (_, output) = run_session(&script);

    let sorted = output
        .split("Sorted Patients by Age:")
        .nth(1)
        .expect("sorted heading printed");
    let young = sorted.find("Young One").expect("young listed");
    let first_old = sorted.find("Old One").expect("first old listed");
    let second_old = sorted.find("Old Two").expect("second old listed");
    assert!(young < first_old);
    assert!(first_old < second_old);

    let listing = output.split("All Patients:").nth(1).expect("listing printed");
    assert!(listing.find("Old One").unwrap() < listing.find("Young One").unwrap());
}

#[test]
fn ailments_and_specializations_accumulate() {
    let script = add_patient("a", "1", "f", "p1", "flu")
        + &add_patient("b", "2", "m", "p2", "FLU")
        + &add_patient("c", "3", "f", "p3", "cold")
        + &add_doctor("gregory house", "50", "male", "d1", "diagnostics")
        + &add_doctor("james wilson", "45", "male", "d2", "oncology")
        + &add_doctor("eric foreman", "35", "male", "d3", "Diagnostics")
        + "8\n9\n11\n";
    let (hospital, output) = run_session(&script);

    assert_eq!(hospital.ailments().len(), 2);
    assert!(output.contains("Unique Ailments:\n================\n{'Cold', 'Flu'}\n"));
    assert!(output.contains("Diagnostics: Gregory House, Eric Foreman\n"));
    assert!(output.contains("Oncology: James Wilson\n"));
}

#[test]
fn duplicate_ids_are_accepted_and_first_wins() {
    let script = add_patient("first", "10", "f", "dup", "a")
        + &add_patient("second", "20", "m", "dup", "b")
        + "5\ndup\n11\n";
    let (hospital, output) = run_session(&script);

    assert_eq!(hospital.patients().len(), 2);
    let found = output.split("Enter Patient ID to search: ").nth(1).unwrap();
    assert!(found.starts_with("{'Name': 'First'"));
}

#[test]
fn non_utf8_line_is_rejected_like_other_bad_input() {
    let mut script = vec![0xff, 0xfe, b'\n'];
    script.extend_from_slice(b"1\nbob\n\xff\n11\n");

    let mut cli = HospitalCli::new(Cursor::new(script), Vec::new());
    cli.run().expect("garbled input should not end the session");
    let (hospital, output) = cli.into_parts();
    let output = String::from_utf8(output).expect("output is utf-8");

    assert!(output.contains("Invalid input. Please enter a number."));
    assert!(output.contains("Error: Invalid input for age. Please try again."));
    assert!(hospital.patients().is_empty());
    assert!(output.contains("Exiting the system. Goodbye!"));
}

#[test]
fn huge_menu_number_is_out_of_range_not_non_numeric() {
    let (_, output) = run_session("99999999999999999999\n11\n");

    assert!(output.contains("Invalid choice. Please try again."));
    assert!(!output.contains("Invalid input. Please enter a number."));
}
