use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize as _;

use crate::{
    animation::curve::{ControlPoint, validate_points},
    eval::curves::CurveConfig,
    eval::resolver::Resolver,
    foundation::error::{ReelError, ReelResult},
    gallery::model::{Gallery, GalleryItem},
    layout::phase::PhaseLayout,
};

/// JSON-facing description of a complete reel.
///
/// Layout and curves validate while deserializing; [`ReelConfig::validate`] adds the checks
/// that span sections (gallery contents, item count agreement, text windows).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReelConfig {
    /// Phase extents.
    pub layout: PhaseLayout,
    /// Rotation, text and overlay curves.
    #[serde(default)]
    pub curves: CurveConfig,
    /// Ordered items.
    pub gallery: Vec<GalleryItem>,
}

impl ReelConfig {
    /// Parse from a JSON reader.
    ///
    /// Malformed control points are reported as [`ReelError::InvalidCurve`]; every other
    /// parse failure is a [`ReelError::Configuration`].
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let doc: serde_json::Value = serde_json::from_reader(r).map_err(parse_error)?;
        Self::from_value(doc)
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> ReelResult<Self> {
        let doc: serde_json::Value = serde_json::from_str(s).map_err(parse_error)?;
        Self::from_value(doc)
    }

    fn from_value(doc: serde_json::Value) -> ReelResult<Self> {
        check_curve_points(&doc)?;
        serde_json::from_value(doc).map_err(parse_error)
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::configuration(format!("open reel config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReelError::serde(e.to_string()))
    }

    /// Run every startup check.
    pub fn validate(&self) -> ReelResult<()> {
        self.build().map(|_| ())
    }

    /// Validate and split into the runtime resolver and gallery.
    pub fn build(&self) -> ReelResult<(Resolver, Gallery)> {
        let gallery = Gallery::new(self.gallery.clone())?;
        if gallery.len() != self.layout.item_count() {
            return Err(ReelError::configuration(format!(
                "layout.item_count is {} but the gallery has {} items",
                self.layout.item_count(),
                gallery.len()
            )));
        }
        let resolver = Resolver::new(self.layout, self.curves.clone())?;
        Ok((resolver, gallery))
    }
}

fn parse_error(e: serde_json::Error) -> ReelError {
    ReelError::configuration(format!("parse reel config JSON: {e}"))
}

#[derive(serde::Deserialize)]
struct CurvePoints {
    points: Vec<ControlPoint>,
}

/// Validate every curve's control points ahead of typed deserialization.
///
/// Curves whose shape does not even parse are left for the typed pass to report.
fn check_curve_points(doc: &serde_json::Value) -> ReelResult<()> {
    let Some(curves) = doc.get("curves") else {
        return Ok(());
    };
    let named = ["rotation", "intro_background", "outro_background", "normal_background"]
        .into_iter()
        .filter_map(|key| curves.get(key).map(|v| (key.to_string(), v)));
    let sections = curves
        .get("text_sections")
        .and_then(serde_json::Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
        .filter_map(|(i, s)| {
            s.get("opacity")
                .map(|v| (format!("text_sections[{i}].opacity"), v))
        });

    for (name, value) in named.chain(sections) {
        let Ok(curve) = CurvePoints::deserialize(value) else {
            continue;
        };
        validate_points(&curve.points).map_err(|e| match e {
            ReelError::InvalidCurve(msg) => {
                ReelError::invalid_curve(format!("curves.{name}: {msg}"))
            }
            other => other,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
