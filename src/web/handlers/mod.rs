//! HTML template rendering handlers for the web page.

mod home;

pub use home::{HomeTemplate, home_handler};
