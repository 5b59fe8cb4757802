//! # Camp DB
//!
//! This crate provides the PostgreSQL connection pool and schema migrations for the camp activities API.

/// Database client for the camp activities application.
pub mod database;
