//! askdb Core - Shared types library.
//!
//! This crate provides common types used across all askdb components:
//! - `engine` - Question-to-SQL pipeline and sample dataset
//! - `cli` - Command-line entry point
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, status/category enums, and the seed-data
//!   entity structs for the sample store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
