//! Browser-facing pages.
//!
//! Server-side rendered with Askama templates from `templates/`. Pages are
//! not gated on login; the login form only verifies credentials.
//!
//! # Modules
//!
//! - [`forms`] - Form bodies posted by the pages
//! - [`handlers`] - Template rendering and form handlers
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod routes;
