//! Shared test helpers.

pub mod archive_helpers;
pub mod survey_fixtures;
