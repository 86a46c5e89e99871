use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::{
    eval::snapshot::AnimationSnapshot,
    foundation::error::{ReelError, ReelResult},
};

/// Distance of an item's box from one viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EdgeOffset {
    /// Absolute distance in host pixels.
    Px(f64),
    /// Percentage of the viewport dimension along that axis.
    Percent(f64),
}

impl EdgeOffset {
    /// Resolve against the viewport dimension the edge runs across.
    pub fn resolve(self, axis_extent: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => axis_extent * p / 100.0,
        }
    }
}

impl FromStr for EdgeOffset {
    type Err = ReelError;

    fn from_str(s: &str) -> ReelResult<Self> {
        let t = s.trim();
        let (num, make): (&str, fn(f64) -> Self) = if let Some(n) = t.strip_suffix('%') {
            (n, Self::Percent)
        } else if let Some(n) = t.strip_suffix("px") {
            (n, Self::Px)
        } else {
            (t, Self::Px)
        };
        let v: f64 = num
            .trim()
            .parse()
            .map_err(|_| ReelError::configuration(format!("invalid edge offset '{s}'")))?;
        if !v.is_finite() {
            return Err(ReelError::configuration(format!(
                "edge offset '{s}' is not finite"
            )));
        }
        Ok(make(v))
    }
}

impl TryFrom<String> for EdgeOffset {
    type Error = ReelError;

    fn try_from(s: String) -> ReelResult<Self> {
        s.parse()
    }
}

impl fmt::Display for EdgeOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

impl From<EdgeOffset> for String {
    fn from(o: EdgeOffset) -> Self {
        o.to_string()
    }
}

/// Optional anchoring distances; an unset edge leaves that axis centered.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchors {
    /// Distance from the top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<EdgeOffset>,
    /// Distance from the right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<EdgeOffset>,
    /// Distance from the bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<EdgeOffset>,
    /// Distance from the left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<EdgeOffset>,
}

impl Anchors {
    /// Anchor all four edges at zero, filling the viewport.
    pub fn fill() -> Self {
        let zero = Some(EdgeOffset::Px(0.0));
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

/// Static placement of one item.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ItemTransform {
    /// Uniform scale factor, `> 0`.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Edge anchors.
    #[serde(default)]
    pub anchors: Anchors,
}

fn default_scale() -> f64 {
    1.0
}

impl Default for ItemTransform {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            anchors: Anchors::fill(),
        }
    }
}

/// How the image fits its anchored box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    /// Fit inside, keeping aspect ratio.
    #[default]
    Contain,
    /// Fill, keeping aspect ratio, cropping overflow.
    Cover,
    /// Stretch to the box.
    Fill,
    /// Natural size.
    None,
    /// Like `Contain` but never upscaled.
    ScaleDown,
}

/// One entry of the reel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GalleryItem {
    /// Stable unique identifier.
    pub id: String,
    /// 0-based position in the reel.
    pub order_index: usize,
    /// Image source handed to the presentation layer.
    #[serde(default)]
    pub src: String,
    /// Accessible description.
    #[serde(default)]
    pub alt: String,
    /// Fit mode inside the anchored box.
    #[serde(default)]
    pub object_fit: ObjectFit,
    /// Scale and anchoring.
    #[serde(default)]
    pub transform: ItemTransform,
}

impl GalleryItem {
    /// Item filling the viewport at scale 1.
    pub fn new(id: impl Into<String>, order_index: usize) -> Self {
        Self {
            id: id.into(),
            order_index,
            src: String::new(),
            alt: String::new(),
            object_fit: ObjectFit::default(),
            transform: ItemTransform::default(),
        }
    }
}

/// What the presentation layer should apply to one item for a snapshot.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ItemPresentation<'a> {
    /// Item id.
    pub id: &'a str,
    /// Whether this is the active item.
    pub visible: bool,
    /// 1 for the active item, 0 otherwise.
    pub opacity: f64,
    /// Static scale from the item transform.
    pub scale: f64,
    /// Rotation to apply, non-zero only on the rotating active item.
    pub rotation_degrees: f64,
}

/// Ordered, validated, read-only list of reel items.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Gallery {
    items: Vec<GalleryItem>,
}

impl Gallery {
    /// Validate and freeze `items`.
    pub fn new(items: Vec<GalleryItem>) -> ReelResult<Self> {
        if items.len() < 2 {
            return Err(ReelError::configuration(format!(
                "gallery needs at least 2 items, got {}",
                items.len()
            )));
        }

        validate_items(&items)?;
        Ok(Self { items })
    }

    /// Items in reel order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed gallery.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    /// Per-item visibility, scale and rotation for `snapshot`.
    pub fn present<'a>(&'a self, snapshot: &AnimationSnapshot) -> Vec<ItemPresentation<'a>> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let visible = i == snapshot.active_index;
                ItemPresentation {
                    id: &item.id,
                    visible,
                    opacity: if visible { 1.0 } else { 0.0 },
                    scale: item.transform.scale,
                    rotation_degrees: if visible {
                        snapshot.rotation_degrees
                    } else {
                        0.0
                    },
                }
            })
            .collect()
    }
}

fn validate_items(items: &[GalleryItem]) -> ReelResult<()> {
    let mut ids = BTreeSet::new();
    for (i, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(ReelError::configuration(format!(
                "gallery item {i} has an empty id"
            )));
        }
        if !ids.insert(item.id.as_str()) {
            return Err(ReelError::configuration(format!(
                "duplicate gallery item id '{}'",
                item.id
            )));
        }
        if item.order_index != i {
            return Err(ReelError::configuration(format!(
                "gallery item '{}' has order_index {} at position {i}",
                item.id, item.order_index
            )));
        }
        let scale = item.transform.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ReelError::configuration(format!(
                "gallery item '{}' scale must be finite and > 0, got {scale}",
                item.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/model.rs"]
mod tests;
