//! Core types and trait definitions for the Roost social-network record
//! manager.
//!
//! This crate knows nothing about SQLite or the shell; it defines the two
//! record types, the [`store::SocialStore`] repository trait, and the error
//! taxonomy everything above translates into success/failure signals.

pub mod error;
pub mod record;
pub mod store;

pub use error::{Error, Result};
