//! Survey shots and the `Data` collection holding them.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::base::{Name, NameRegistry};
use crate::interchange::Tree;

use super::ModelError;
use super::enums::{ProfileType, ShotType};
use super::fields::{FieldReader, Record, TreeBuilder};
use super::json::to_sorted_json;
use super::shape::Shape;
use super::unique::validate_unique;

/// One survey leg, measured from station `from_id` to station `id`.
///
/// Measurements are plain public values. Textual classifications (`color`,
/// `profiletype`, `shot_type`, ...) keep the exact spelling of the source file;
/// [`SurveyShot::shot_type`] and [`SurveyShot::profile_type`] give typed views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyShot {
    pub name: Name,
    pub azimuth: f64,
    pub closure_to_id: i64,
    pub color: String,
    pub comment: Option<String>,
    pub date: NaiveDate,
    pub depth: f64,
    pub depth_in: f64,
    pub excluded: bool,
    pub explorer: String,
    pub from_id: i64,
    pub id: i64,
    pub inclination: f64,
    pub latitude: f64,
    pub length: f64,
    pub locked: bool,
    pub longitude: f64,
    pub profiletype: String,
    pub section: String,
    #[serde(rename = "type")]
    pub shot_type: String,
    pub shape: Shape,

    // LRUD
    pub left: f64,
    pub right: f64,
    pub up: f64,
    pub down: f64,
}

impl SurveyShot {
    /// Parse the `Type` field.
    pub fn shot_type(&self) -> Result<ShotType, ModelError> {
        ShotType::from_str(&self.shot_type)
    }

    /// Parse the `Profiletype` field.
    pub fn profile_type(&self) -> Result<ProfileType, ModelError> {
        ProfileType::from_str(&self.profiletype)
    }

    /// Pretty JSON with sorted keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        to_sorted_json(self)
    }
}

impl Record for SurveyShot {
    const RECORD: &'static str = "SurveyShot";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);

        let name: Option<String> = fields.optional("Name")?;
        let shot = Self {
            name: Name::new(name.as_deref().unwrap_or_default(), names)?,
            azimuth: fields.required("Azimut")?,
            closure_to_id: fields.required("ClosureToID")?,
            color: fields.required("Color")?,
            comment: fields.optional("Comment")?,
            date: fields.required("Date")?,
            depth: fields.required("Depth")?,
            depth_in: fields.required("DepthIn")?,
            excluded: fields.required("Excluded")?,
            explorer: fields.required("Explorer")?,
            from_id: fields.required("FromID")?,
            id: fields.required("ID")?,
            inclination: fields.required("Inclination")?,
            latitude: fields.required("Latitude")?,
            length: fields.required("Length")?,
            locked: fields.required("Locked")?,
            longitude: fields.required("Longitude")?,
            profiletype: fields.required("Profiletype")?,
            section: fields.required("Section")?,
            shot_type: fields.required("Type")?,
            shape: fields.record("Shape", names)?,
            left: fields.required("Left")?,
            right: fields.required("Right")?,
            up: fields.required("Up")?,
            down: fields.required("Down")?,
        };
        fields.finish()?;
        Ok(shot)
    }

    fn encode(&self) -> Tree {
        // Ariane lists shot fields alphabetically
        TreeBuilder::new()
            .scalar("Azimut", &self.azimuth)
            .scalar("ClosureToID", &self.closure_to_id)
            .scalar("Color", &self.color)
            .optional("Comment", self.comment.as_ref())
            .scalar("Date", &self.date)
            .scalar("Depth", &self.depth)
            .scalar("DepthIn", &self.depth_in)
            .scalar("Down", &self.down)
            .scalar("Excluded", &self.excluded)
            .scalar("Explorer", &self.explorer)
            .scalar("FromID", &self.from_id)
            .scalar("ID", &self.id)
            .scalar("Inclination", &self.inclination)
            .scalar("Latitude", &self.latitude)
            .scalar("Left", &self.left)
            .scalar("Length", &self.length)
            .scalar("Locked", &self.locked)
            .scalar("Longitude", &self.longitude)
            .scalar("Name", &self.name.to_string())
            .scalar("Profiletype", &self.profiletype)
            .scalar("Right", &self.right)
            .scalar("Section", &self.section)
            .record("Shape", &self.shape)
            .scalar("Type", &self.shot_type)
            .scalar("Up", &self.up)
            .build()
    }
}

/// Ordered shots of a survey. No two shots share an `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShotCollection {
    shots: Vec<SurveyShot>,
}

impl ShotCollection {
    /// Element name of one shot inside `Data`.
    pub const ELEMENT: &'static str = "SRVD";

    /// Build a collection, rejecting repeated shot ids.
    pub fn new(shots: Vec<SurveyShot>) -> Result<Self, ModelError> {
        validate_unique("ShotCollection", "id", &shots, |shot| shot.id)?;
        Ok(Self { shots })
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SurveyShot> {
        self.shots.iter()
    }

    pub fn get(&self, index: usize) -> Option<&SurveyShot> {
        self.shots.get(index)
    }

    pub fn as_slice(&self) -> &[SurveyShot] {
        &self.shots
    }
}

impl<'a> IntoIterator for &'a ShotCollection {
    type Item = &'a SurveyShot;
    type IntoIter = std::slice::Iter<'a, SurveyShot>;

    fn into_iter(self) -> Self::IntoIter {
        self.shots.iter()
    }
}

impl Record for ShotCollection {
    const RECORD: &'static str = "ShotCollection";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let shots = fields.records(Self::ELEMENT, names)?;
        fields.finish()?;
        Self::new(shots)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .records(Self::ELEMENT, &self.shots)
            .build()
    }
}
