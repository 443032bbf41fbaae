//! The survey root and its file-level entry points.
//!
//! A [`Survey`] is the typed view of one `CaveFile` document:
//!
//! ```text
//! Survey
//! ├── ShotCollection   (Data/SRVD*)
//! │   └── SurveyShot ── Shape ── RadiusCollection ── RadiusVector*
//! ├── LayerCollection  (Layers/layerList*)
//! │   └── Layer ── LayerStyle
//! └── Carto* / Constraints / ListAnnotation   (kept verbatim)
//! ```
//!
//! Every decode runs inside one [`NameRegistry`] scope. [`Survey::from_tree`]
//! opens a fresh scope per document; [`Survey::from_tree_in`] lets the caller
//! share one across documents.

use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::base::{Name, NameRegistry};
use crate::interchange::{ArianeOptions, InterchangeError, Node, Tree, read_tree, write_tree};

use super::ModelError;
use super::enums::UnitType;
use super::fields::{FieldReader, Record, TreeBuilder};
use super::json::to_sorted_json;
use super::layer::LayerCollection;
use super::shot::{ShotCollection, SurveyShot};

/// Unit used when a document does not name one.
pub const DEFAULT_UNIT: &str = "m";

/// A complete cave survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Survey {
    pub name: Name,
    pub speleodb_id: Uuid,
    pub cave_name: String,
    pub unit: String,
    pub data: ShotCollection,
    pub layers: LayerCollection,
    pub first_start_absolute_elevation: f64,
    pub use_magnetic_azimuth: bool,

    pub carto_ellipse: Option<Node>,
    pub carto_line: Option<Node>,
    pub carto_linked_surface: Option<Node>,
    pub carto_overlay: Option<Node>,
    pub carto_page: Option<Node>,
    pub carto_rectangle: Option<Node>,
    pub carto_selection: Option<Node>,
    pub carto_spline: Option<Node>,
    pub constraints: Option<Node>,
    pub list_annotation: Option<Node>,
}

impl Survey {
    /// An empty survey with default settings and a fresh identity.
    pub fn new(cave_name: impl Into<String>, names: &mut NameRegistry) -> Result<Self, ModelError> {
        Ok(Self {
            name: Name::generate(names)?,
            speleodb_id: Uuid::new_v4(),
            cave_name: cave_name.into(),
            unit: DEFAULT_UNIT.to_string(),
            data: ShotCollection::default(),
            layers: LayerCollection::default(),
            first_start_absolute_elevation: 0.0,
            use_magnetic_azimuth: true,
            carto_ellipse: None,
            carto_line: None,
            carto_linked_surface: None,
            carto_overlay: None,
            carto_page: None,
            carto_rectangle: None,
            carto_selection: None,
            carto_spline: None,
            constraints: None,
            list_annotation: None,
        })
    }

    /// Decode a `CaveFile` body in a fresh name scope.
    pub fn from_tree(tree: Tree) -> Result<Self, ModelError> {
        Self::from_tree_in(tree, &mut NameRegistry::new_scope())
    }

    /// Decode a `CaveFile` body, registering names in `names`.
    pub fn from_tree_in(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let survey = Self::decode(tree, names)?;
        tracing::debug!(
            cave = %survey.cave_name,
            shots = survey.data.len(),
            layers = survey.layers.len(),
            "decoded survey"
        );
        Ok(survey)
    }

    /// Encode as a `CaveFile` body.
    pub fn to_tree(&self) -> Tree {
        self.encode()
    }

    pub fn from_ariane_file(path: &Path, options: &ArianeOptions) -> Result<Self, InterchangeError> {
        let tree = read_tree(path, options)?;
        Ok(Self::from_tree(tree)?)
    }

    pub fn to_ariane_file(&self, path: &Path, options: &ArianeOptions) -> Result<(), InterchangeError> {
        write_tree(&self.to_tree(), path, options)
    }

    /// Parse the `unit` field.
    pub fn unit_type(&self) -> Result<UnitType, ModelError> {
        UnitType::from_str(&self.unit)
    }

    pub fn shot_by_name(&self, name: &str) -> Option<&SurveyShot> {
        self.data.iter().find(|shot| shot.name.as_str() == name)
    }

    pub fn shot_by_id(&self, id: i64) -> Option<&SurveyShot> {
        self.data.iter().find(|shot| shot.id == id)
    }

    /// Pretty JSON with sorted keys.
    pub fn to_json(&self) -> serde_json::Result<String> {
        to_sorted_json(self)
    }
}

impl Record for Survey {
    const RECORD: &'static str = "Survey";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let speleodb_id: Option<Uuid> = fields.optional("speleodbID")?;

        let survey = Self {
            name: Name::generate(names)?,
            speleodb_id: speleodb_id.unwrap_or_else(Uuid::new_v4),
            data: fields.record_or_default("Data", names)?,
            cave_name: fields.required("caveName")?,
            unit: fields.or_default("unit", DEFAULT_UNIT.to_string())?,
            first_start_absolute_elevation: fields.or_default("firstStartAbsoluteElevation", 0.0)?,
            use_magnetic_azimuth: fields.or_default("useMagneticAzimuth", true)?,
            layers: fields.record_or_default("Layers", names)?,
            carto_ellipse: fields.opaque("CartoEllipse"),
            carto_line: fields.opaque("CartoLine"),
            carto_linked_surface: fields.opaque("CartoLinkedSurface"),
            carto_overlay: fields.opaque("CartoOverlay"),
            carto_page: fields.opaque("CartoPage"),
            carto_rectangle: fields.opaque("CartoRectangle"),
            carto_selection: fields.opaque("CartoSelection"),
            carto_spline: fields.opaque("CartoSpline"),
            constraints: fields.opaque("Constraints"),
            list_annotation: fields.opaque("ListAnnotation"),
        };
        fields.finish()?;
        Ok(survey)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .record("Data", &self.data)
            .scalar("caveName", &self.cave_name)
            .scalar("unit", &self.unit)
            .scalar("firstStartAbsoluteElevation", &self.first_start_absolute_elevation)
            .scalar("useMagneticAzimuth", &self.use_magnetic_azimuth)
            .record("Layers", &self.layers)
            .opaque("CartoEllipse", self.carto_ellipse.as_ref())
            .opaque("CartoLine", self.carto_line.as_ref())
            .opaque("CartoLinkedSurface", self.carto_linked_surface.as_ref())
            .opaque("CartoOverlay", self.carto_overlay.as_ref())
            .opaque("CartoPage", self.carto_page.as_ref())
            .opaque("CartoRectangle", self.carto_rectangle.as_ref())
            .opaque("CartoSelection", self.carto_selection.as_ref())
            .opaque("CartoSpline", self.carto_spline.as_ref())
            .opaque("Constraints", self.constraints.as_ref())
            .opaque("ListAnnotation", self.list_annotation.as_ref())
            .scalar("speleodbID", &self.speleodb_id)
            .build()
    }
}

/// Load a survey from a `.tml` or `.tmlu` file.
pub fn read_survey(path: &Path, options: &ArianeOptions) -> Result<Survey, InterchangeError> {
    Survey::from_ariane_file(path, options)
}

/// Save a survey as a `.tml` file.
pub fn write_survey(survey: &Survey, path: &Path, options: &ArianeOptions) -> Result<(), InterchangeError> {
    survey.to_ariane_file(path, options)
}
