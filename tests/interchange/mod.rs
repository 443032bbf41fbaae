//! Interchange tests
//!
//! Tests for:
//! - Format detection from file extensions
//! - TML / TMLU container reading and writing
//! - The XML tree codec over real files

mod tests_containers;
mod tests_tree_codec;
