//! Core types for Mercantia.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod token;

pub use id::*;
pub use token::ChannelToken;
