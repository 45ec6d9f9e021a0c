//! Web server for the dashboard UI and its JSON API.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
