//! Drawing layers of a survey.

use serde::Serialize;

use crate::base::NameRegistry;
use crate::interchange::Tree;

use super::ModelError;
use super::fields::{FieldReader, Record, TreeBuilder};

/// Stroke and fill settings of a layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerStyle {
    pub dash_scale: f64,
    pub fill_color_string: String,
    pub line_type: String,
    pub line_type_scale: f64,
    pub opacity: f64,
    pub size_mode: String,
    pub stroke_color_string: String,
    pub stroke_thickness: f64,
}

impl Record for LayerStyle {
    const RECORD: &'static str = "LayerStyle";

    fn decode(tree: Tree, _names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let style = Self {
            dash_scale: fields.required("dashScale")?,
            fill_color_string: fields.required("fillColorString")?,
            line_type: fields.required("lineType")?,
            line_type_scale: fields.required("lineTypeScale")?,
            opacity: fields.required("opacity")?,
            size_mode: fields.required("sizeMode")?,
            stroke_color_string: fields.required("strokeColorString")?,
            stroke_thickness: fields.required("strokeThickness")?,
        };
        fields.finish()?;
        Ok(style)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .scalar("dashScale", &self.dash_scale)
            .scalar("fillColorString", &self.fill_color_string)
            .scalar("lineType", &self.line_type)
            .scalar("lineTypeScale", &self.line_type_scale)
            .scalar("opacity", &self.opacity)
            .scalar("sizeMode", &self.size_mode)
            .scalar("strokeColorString", &self.stroke_color_string)
            .scalar("strokeThickness", &self.stroke_thickness)
            .build()
    }
}

/// A named drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    pub constant: bool,
    pub locked_layer: bool,
    pub layer_name: String,
    pub style: LayerStyle,
    pub visible: bool,
}

impl Record for Layer {
    const RECORD: &'static str = "Layer";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let layer = Self {
            constant: fields.or_default("constant", true)?,
            locked_layer: fields.or_default("locked", false)?,
            layer_name: fields.required("name")?,
            style: fields.record("style", names)?,
            visible: fields.or_default("visible", true)?,
        };
        fields.finish()?;
        Ok(layer)
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .scalar("constant", &self.constant)
            .scalar("locked", &self.locked_layer)
            .scalar("name", &self.layer_name)
            .record("style", &self.style)
            .scalar("visible", &self.visible)
            .build()
    }
}

/// Ordered layers of a survey.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LayerCollection {
    layer_list: Vec<Layer>,
}

impl LayerCollection {
    /// Element name of one layer inside `Layers`.
    pub const ELEMENT: &'static str = "layerList";

    pub fn new(layer_list: Vec<Layer>) -> Self {
        Self { layer_list }
    }

    pub fn len(&self) -> usize {
        self.layer_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layer_list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layer_list.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layer_list.get(index)
    }

    pub fn as_slice(&self) -> &[Layer] {
        &self.layer_list
    }
}

impl<'a> IntoIterator for &'a LayerCollection {
    type Item = &'a Layer;
    type IntoIter = std::slice::Iter<'a, Layer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layer_list.iter()
    }
}

impl Record for LayerCollection {
    const RECORD: &'static str = "LayerCollection";

    fn decode(tree: Tree, names: &mut NameRegistry) -> Result<Self, ModelError> {
        let mut fields = FieldReader::new(Self::RECORD, tree);
        let layer_list = fields.records(Self::ELEMENT, names)?;
        fields.finish()?;
        Ok(Self { layer_list })
    }

    fn encode(&self) -> Tree {
        TreeBuilder::new()
            .records(Self::ELEMENT, &self.layer_list)
            .build()
    }
}
