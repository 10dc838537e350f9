//! Mercantia Core - Shared types library.
//!
//! This crate provides common types used across the Mercantia components:
//! - `storefront` - Multi-tenant storefront backend-for-frontend
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the channel token

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
