//! In-memory patient and doctor records for a hospital, driven from an
//! interactive console menu.

pub mod cli;
pub mod error;
pub mod hospital;
pub mod logging;
pub mod models;
pub mod queries;

pub use cli::HospitalCli;
pub use error::{HospitalError, Result};
pub use hospital::Hospital;
pub use models::{Details, Doctor, Patient, Person};
