// Presentation layer - HTTP surface and templates
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod templates;
