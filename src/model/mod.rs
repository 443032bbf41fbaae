//! Typed survey model.
//!
//! Binds the string-valued [`Tree`](crate::interchange::Tree) produced by the
//! XML codec to validated entities, and renders them back to their canonical
//! text form.
//!
//! ## Layers
//!
//! - [`scalar`] - parse/render pair for every field type
//! - [`fields`] - strict record decoding ([`Record`], [`FieldReader`], [`TreeBuilder`])
//! - [`unique`] - collection-wide uniqueness checks
//! - entities: [`Survey`], [`ShotCollection`], [`SurveyShot`], [`Shape`],
//!   [`RadiusCollection`], [`RadiusVector`], [`LayerCollection`], [`Layer`],
//!   [`LayerStyle`]

mod enums;
mod error;
pub mod fields;
mod json;
mod layer;
pub mod scalar;
mod shape;
mod shot;
mod survey;
pub mod unique;

pub use enums::{ProfileType, ShotType, UnitType};
pub use error::ModelError;
pub use fields::{FieldReader, Record, TreeBuilder};
pub use json::to_sorted_json;
pub use layer::{Layer, LayerCollection, LayerStyle};
pub use shape::{RadiusCollection, RadiusVector, Shape};
pub use shot::{ShotCollection, SurveyShot};
pub use survey::{DEFAULT_UNIT, Survey, read_survey, write_survey};
pub use unique::validate_unique;
