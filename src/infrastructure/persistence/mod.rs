//! Flat-file repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of CSV
//! files, plus the admissions dataset loader.
//!
//! # Contents
//!
//! - [`CsvCredentialRepository`] - `number,password` credential file
//! - [`CsvFeedbackRepository`] - `SEAT,FEEDBACK` feedback file
//! - [`load_admissions`] - one-shot dataset load at startup

pub mod csv_credential_repository;
pub mod csv_dataset;
pub mod csv_feedback_repository;
mod csv_file;

pub use csv_credential_repository::CsvCredentialRepository;
pub use csv_dataset::{DatasetError, load_admissions};
pub use csv_feedback_repository::CsvFeedbackRepository;
