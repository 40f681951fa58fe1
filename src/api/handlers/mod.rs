//! HTTP request handlers for JSON endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod options;
pub mod prediction;

pub use health::health_handler;
pub use options::get_options_handler;
pub use prediction::make_prediction_handler;
