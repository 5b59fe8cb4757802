//! # Camp Services
//!
//! This crate provides the data model and database services for campers, activities and signups.
//! Each service wraps a database connection pool handed to it by the caller, so every request
//! works against an explicitly injected store handle.

/// Records, request payloads and their validation rules
mod types;
pub use types::*;

/// Error type shared by every camp operation
mod error;
pub use error::*;

/// Service for camper queries and mutations
mod camper_service;
pub use camper_service::*;

/// Service for activity queries and deletion
mod activity_service;
pub use activity_service::*;

/// Service for signup queries and creation
mod signup_service;
pub use signup_service::*;
