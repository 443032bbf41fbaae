//! Cross-section of a shot.
//!
//! ```text
//! Shape
//! ├── RadiusCollection
//! │   └── RadiusVector*   (TensionCorridor, TensionProfile, angle, length)
//! ├── hasProfileAzimut / hasProfileTilt
//! └── profileAzimut / profileTilt
//! ```

use serde::Serialize;

use crate::base::NameRegistry;
use crate::interchange::Tree;

use super::ModelError;
use super::fields::{FieldReader, Record, TreeBuilder};

/// One radius of the cross-section polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadiusVector {
    pub tension_corridor: f64,
    pub tension_profile: f64,
    pub angle: f64,
    /// Euclidean norm of the radius
    pub norm: f64,
}

impl Record for RadiusVector {
    const RECORD: &'static str = "RadiusVector";

    fn decode(tree: Tree, _names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let vector = Self {
            tension_corridor: fields.required("TensionCorridor")?,
            tension_profile: fields.required("TensionProfile")?,
            angle: fields.required("angle")?,
            norm: fields.required("length")?,
        };
        fields.finish()?;
        Ok(vector)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .scalar("TensionCorridor", &self.tension_corridor)
            .scalar("TensionProfile", &self.tension_profile)
            .scalar("angle", &self.angle)
            .scalar("length", &self.norm)
            .build()
    }
}

/// Ordered radii of a cross-section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RadiusCollection {
    radius_vector: Vec<RadiusVector>,
}

impl RadiusCollection {
    pub fn new(radius_vector: Vec<RadiusVector>) -> Self {
        Self { radius_vector }
    }

    pub fn len(&self) -> usize {
        self.radius_vector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius_vector.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RadiusVector> {
        self.radius_vector.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RadiusVector> {
        self.radius_vector.get(index)
    }

    pub fn as_slice(&self) -> &[RadiusVector] {
        &self.radius_vector
    }
}

impl<'a> IntoIterator for &'a RadiusCollection {
    type Item = &'a RadiusVector;
    type IntoIter = std::slice::Iter<'a, RadiusVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.radius_vector.iter()
    }
}

impl Record for RadiusCollection {
    const RECORD: &'static str = "RadiusCollection";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let radius_vector = fields.records("RadiusVector", names)?;
        fields.finish()?;
        Ok(Self { radius_vector })
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .records("RadiusVector", &self.radius_vector)
            .build()
    }
}

/// Cross-section descriptor attached to every shot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub radius_collection: RadiusCollection,
    pub has_profile_azimuth: bool,
    pub has_profile_tilt: bool,
    pub profile_azimuth: f64,
    pub profile_tilt: f64,
}

impl Record for Shape {
    const RECORD: &'static str = "Shape";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let shape = Self {
            radius_collection: fields.record_or_default("RadiusCollection", names)?,
            has_profile_azimuth: fields.required("hasProfileAzimut")?,
            has_profile_tilt: fields.required("hasProfileTilt")?,
            profile_azimuth: fields.required("profileAzimut")?,
            profile_tilt: fields.required("profileTilt")?,
        };
        fields.finish()?;
        Ok(shape)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .record("RadiusCollection", &self.radius_collection)
            .scalar("hasProfileAzimut", &self.has_profile_azimuth)
            .scalar("hasProfileTilt", &self.has_profile_tilt)
            .scalar("profileAzimut", &self.profile_azimuth)
            .scalar("profileTilt", &self.profile_tilt)
            .build()
    }
}
