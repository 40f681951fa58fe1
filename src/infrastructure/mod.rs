//! Infrastructure layer for external integrations.
//!
//! Implements interfaces defined by the domain layer on top of the local
//! filesystem.
//!
//! # Modules
//!
//! - [`persistence`] - CSV-backed repositories and the dataset loader

pub mod persistence;
