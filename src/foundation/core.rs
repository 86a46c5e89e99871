use crate::foundation::error::{ReelError, ReelResult};

/// One of the three contiguous regions of the total scroll extent.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Opening region; the first item rotates.
    Intro,
    /// Middle region; items are stepped through one per `per_item_extent`.
    Normal,
    /// Closing region; the last item rotates.
    Outro,
}

impl Phase {
    /// Phases in scroll order.
    pub const ALL: [Phase; 3] = [Phase::Intro, Phase::Normal, Phase::Outro];

    /// True for the phases that spin their endpoint item.
    pub fn is_rotating(self) -> bool {
        matches!(self, Self::Intro | Self::Outro)
    }
}

/// One scroll notification from the host.
///
/// Fields are private so a constructed sample always satisfies `offset >= 0` and
/// `viewport_extent > 0`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollSample {
    offset: f64,
    viewport_extent: f64,
}

impl ScrollSample {
    /// Build a sample from raw host values.
    ///
    /// Negative offsets (elastic overscroll above the top) are clamped to 0. Non-finite values
    /// and a non-positive viewport are rejected.
    pub fn new(offset: f64, viewport_extent: f64) -> ReelResult<Self> {
        if !offset.is_finite() {
            return Err(ReelError::sample("scroll offset must be finite"));
        }
        if !viewport_extent.is_finite() || viewport_extent <= 0.0 {
            return Err(ReelError::sample("viewport extent must be finite and > 0"));
        }
        Ok(Self {
            offset: offset.max(0.0),
            viewport_extent,
        })
    }

    /// Cumulative scroll distance in host units.
    pub fn offset(self) -> f64 {
        self.offset
    }

    /// Viewport height in host units.
    pub fn viewport_extent(self) -> f64 {
        self.viewport_extent
    }

    /// Offset expressed in viewport-relative units.
    pub fn viewport_units(self) -> f64 {
        self.offset / self.viewport_extent
    }
}

pub(crate) fn clamp01(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}
