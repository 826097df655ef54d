//! The output feature emitted into a layer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::feature::GeometryKind;

use super::value::{AttrInput, AttrValue};

/// A classified feature bound for an output layer.
///
/// Built through the starter methods on
/// [`FeatureCollector`](super::FeatureCollector); the setters chain so a
/// handler rule reads as one expression. Attributes that derive to nothing
/// are never inserted, so downstream encoders see no null placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputFeature {
    /// Target layer name.
    pub layer: String,
    /// Output geometry chosen by the handler.
    pub geometry: GeometryKind,
    /// Attributes present on the feature, in key order.
    pub attrs: BTreeMap<String, AttrValue>,
    /// Minimum zoom at which the feature appears. `None` defers to the
    /// engine default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<u8>,
    /// Draw order hint. Higher values draw later, on top.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<i32>,
}

impl OutputFeature {
    pub(crate) fn new(layer: impl Into<String>, geometry: GeometryKind) -> Self {
        Self {
            layer: layer.into(),
            geometry,
            attrs: BTreeMap::new(),
            min_zoom: None,
            sort_key: None,
        }
    }

    /// Set an attribute. A `None` input leaves the attribute absent.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrInput>) -> &mut Self {
        if let Some(value) = value.into().into_value() {
            self.attrs.insert(key.into(), value);
        }
        self
    }

    /// Set the minimum zoom level.
    pub fn set_min_zoom(&mut self, zoom: u8) -> &mut Self {
        self.min_zoom = Some(zoom);
        self
    }

    /// Set the draw order hint. Higher values draw on top.
    pub fn set_sort_key(&mut self, key: i32) -> &mut Self {
        self.sort_key = Some(key);
        self
    }

    /// Attribute lookup.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// Attribute as text, when present and textual.
    pub fn attr_text(&self, key: &str) -> Option<&str> {
        match self.attrs.get(key) {
            Some(AttrValue::Text(v)) => Some(v),
            _ => None,
        }
    }
}
