//! Domain layer containing business entities and logic.
//!
//! Independent of HTTP, file formats and rendering.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait definitions for credentials and feedback
//! - [`query`] - Filtering, prediction and plot-series extraction over the admissions table
//! - [`chart`] - Chart descriptions consumed by [`crate::rendering`]
//!
//! # Design Principles
//!
//! - The admissions table is built once and shared read-only
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod chart;
pub mod entities;
pub mod query;
pub mod repositories;
