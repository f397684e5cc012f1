//! Core types for askdb.
//!
//! This module provides type-safe wrappers for the sample store's domain
//! concepts.

pub mod category;
pub mod entities;
pub mod id;
pub mod status;

pub use category::{CategoryParseError, ProductCategory};
pub use entities::{Customer, Order, OrderItem, Product};
pub use id::*;
pub use status::{OrderStatus, StatusParseError};
