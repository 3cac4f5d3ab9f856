//! Core types for Magnolia.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod catalog;
pub mod id;
pub mod price;
pub mod reference;
pub mod size;

pub use catalog::{Category, Color, Product};
pub use id::*;
pub use price::{Price, PriceError};
pub use reference::{Entity, Reference};
pub use size::{ParseSizeError, Size};
