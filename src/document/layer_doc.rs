use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    animation::timeline::Timeline,
    bounds::rule_set::BoundsRuleSet,
    composite::layer::CompositeLayer,
    foundation::core::Rect,
    foundation::error::{BoundsError, BoundsResult},
};

/// JSON-facing description of a composite layer.
///
/// A document names each child, carries its bounds rules and an optional timeline of
/// property tracks. Build a live layer with [`LayerDocument::build_layer`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerDocument {
    /// Parent rectangle used when the caller does not supply one.
    #[serde(default)]
    pub bounds: Rect,
    /// Children in drawing order.
    pub children: Vec<ChildSpec>,
    /// Property animation applied by [`Timeline::apply`].
    #[serde(default, skip_serializing_if = "Timeline::is_empty")]
    pub timeline: Timeline,
}

/// One child entry of a [`LayerDocument`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChildSpec {
    /// Unique, non-empty child name.
    pub name: String,
    /// Bounds rules; missing edges are unset.
    #[serde(default)]
    pub rules: BoundsRuleSet,
}

impl LayerDocument {
    /// Parse a document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BoundsResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BoundsError::serde(format!("parse layer document JSON: {e}")))
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> BoundsResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BoundsError::serde(format!("parse layer document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> BoundsResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BoundsError::validation(format!("open layer document '{}': {e}", path.display()))
        })?;
        let doc: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            BoundsError::serde(format!("parse layer document '{}': {e}", path.display()))
        })?;
        tracing::debug!(children = doc.children.len(), "loaded layer document");
        Ok(doc)
    }

    /// Encode the document as pretty-printed JSON.
    pub fn to_json_string(&self) -> BoundsResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| BoundsError::serde(format!("encode layer document JSON: {e}")))
    }

    /// Checks child names (non-empty, unique) and the timeline (sorted keys, children in range).
    pub fn validate(&self) -> BoundsResult<()> {
        let mut seen = BTreeSet::new();
        for (idx, child) in self.children.iter().enumerate() {
            if child.name.trim().is_empty() {
                return Err(BoundsError::validation(format!(
                    "child {idx} has an empty name"
                )));
            }
            if !seen.insert(child.name.as_str()) {
                return Err(BoundsError::validation(format!(
                    "duplicate child name '{}'",
                    child.name
                )));
            }
        }

        self.timeline.validate()?;
        if let Some(track) = self
            .timeline
            .tracks
            .iter()
            .find(|t| t.child >= self.children.len())
        {
            return Err(BoundsError::validation(format!(
                "timeline track '{}' targets child {} but document has {} children",
                track.property,
                track.child,
                self.children.len()
            )));
        }
        Ok(())
    }

    /// Builds a layer keyed by child name, resolved against `parent`.
    pub fn build_layer(&self, parent: Rect) -> CompositeLayer<String> {
        let mut layer = CompositeLayer::with_bounds(parent);
        for child in &self.children {
            layer.add_child_with_rules(child.name.clone(), child.rules);
        }
        layer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/layer_doc.rs"]
mod tests;
