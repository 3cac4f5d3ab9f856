//! Magnolia Core - Shared types library.
//!
//! This crate provides common types used across all Magnolia components:
//! - `admin` - Catalog management engine for the admin product manager
//! - `cli` - Command-line tools for catalog inspection and management
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, size tags, dual-form entity references,
//!   and the catalog entity types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
