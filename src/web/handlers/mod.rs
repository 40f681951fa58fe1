//! HTML page handlers.

mod auth;
mod feedback;
mod graph;
mod pages;

pub use auth::{
    login_page_handler, login_submit_handler, register_page_handler, register_submit_handler,
};
pub use feedback::submit_feedback_handler;
pub use graph::display_graph_handler;
pub use pages::{analysis_handler, feedback_page_handler, home_handler, prediction_handler};
