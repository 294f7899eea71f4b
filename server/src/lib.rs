//! Serves credential schema fixtures to integration tests over HTTP.

pub mod catalog;
pub mod config;
pub mod messages;
pub mod router;
