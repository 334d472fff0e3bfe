//! Publishes a YAML résumé as a web page and a downloadable PDF, either from a
//! small HTTP server or as a static site.

pub mod config;
pub mod errors;
pub mod layout;
pub mod loader;
pub mod models;
pub mod render;
pub mod routes;
pub mod site;
pub mod state;
pub mod telemetry;
