//! Foundation types for openspeleo.
//!
//! - [`NameRegistry`] - Scoped registry of issued entity names
//! - [`Name`] - A name that went through a registry
//! - [`NameError`] - Registry failures
//!
//! This module has NO dependencies on the interchange or model layers.

mod error;
mod names;

pub use error::NameError;
pub use names::{Name, NameRegistry};
