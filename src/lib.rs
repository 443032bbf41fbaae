//! # openspeleo
//!
//! Typed cave-survey model with a lossless codec for Ariane files.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! model        → Survey, shots, layers; strict decoding and canonical text
//!   ↓
//! interchange  → .tml / .tmlu containers, XML ⇄ Tree codec
//!   ↓
//! base         → NameRegistry, Name, NameError
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use openspeleo::{ArianeOptions, read_survey, write_survey};
//!
//! let options = ArianeOptions::default();
//! let survey = read_survey(Path::new("cave.tml"), &options)?;
//! println!("{} shots", survey.data.len());
//! write_survey(&survey, Path::new("copy.tml"), &options)?;
//! # Ok::<(), openspeleo::InterchangeError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → interchange → model)
// ============================================================================

/// Foundation types: scoped name registry
pub mod base;

/// Ariane containers and the XML tree codec
pub mod interchange;

/// Typed survey entities
pub mod model;

// Re-export the file-level API
pub use base::{Name, NameError, NameRegistry};
pub use interchange::{ArianeFileType, ArianeOptions, InterchangeError, Node, Tree};
pub use model::{ModelError, Survey, SurveyShot, read_survey, write_survey};
