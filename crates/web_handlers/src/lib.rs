//! # Web Handlers for the Camp Activities API
//!
//! This crate provides the web handlers and the route table for the camp activities application.

/// Home and health check handlers
mod service_handlers;
pub use service_handlers::*;

/// Camper handlers (list/create, get/update)
mod camper_handlers;
pub use camper_handlers::*;

/// Activity handlers (list, delete)
mod activity_handlers;
pub use activity_handlers::*;

/// Signup handlers (list/create)
mod signup_handlers;
pub use signup_handlers::*;

/// Route table and extractor configuration
mod routes;
pub use routes::*;
