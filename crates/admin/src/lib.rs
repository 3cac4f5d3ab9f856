//! Magnolia Admin - catalog management engine.
//!
//! This crate provides the state engine behind the admin product manager:
//! a local catalog cache kept consistent with the remote store across
//! create/update/delete, a fixed-size paginated projection over that cache,
//! and the create/edit form state with its pending-image bookkeeping.
//!
//! Rendering, routing, and authentication are the embedding application's
//! concern; this crate only exposes the state and the operations on it.
//!
//! # Architecture
//!
//! - [`remote`] - the `ProductStore` trait plus the reqwest-backed HTTP client
//! - [`catalog`] - the locally cached product set, fully replaced on refresh
//! - [`pagination`] - pure projection math (4-slot grid, 5-link page window)
//! - [`form`] - the editable draft and its image preview tracks
//! - [`manager`] - the mutation orchestrator tying the pieces together
//!
//! # Example
//!
//! ```rust,ignore
//! use magnolia_admin::config::AdminConfig;
//! use magnolia_admin::manager::ProductManager;
//! use magnolia_admin::remote::HttpProductStore;
//!
//! let config = AdminConfig::from_env()?;
//! let store = HttpProductStore::new(&config);
//! let mut manager = ProductManager::new(store);
//!
//! manager.load().await?;
//! for slot in manager.visible() {
//!     // 4 slots per page; `None` slots are grid placeholders
//! }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod manager;
pub mod pagination;
pub mod remote;

pub use error::AdminError;
pub use manager::ProductManager;
