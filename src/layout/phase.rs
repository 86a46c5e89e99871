use crate::{
    foundation::core::{Phase, ScrollSample, clamp01},
    foundation::error::{ReelError, ReelResult},
};

/// Tolerance, in viewport units, within which an offset snaps onto a phase boundary.
pub const DEFAULT_BOUNDARY_EPSILON: f64 = 0.01;

/// Extents of the three scroll phases, in viewport-relative units.
///
/// The first and last gallery items belong to the intro and outro; each middle item gets
/// `per_item_extent` of the normal phase.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawPhaseLayout", into = "RawPhaseLayout")]
pub struct PhaseLayout {
    intro_extent: f64,
    outro_extent: f64,
    per_item_extent: f64,
    item_count: usize,
    boundary_epsilon: f64,
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
struct RawPhaseLayout {
    intro_extent: f64,
    outro_extent: f64,
    per_item_extent: f64,
    item_count: usize,
    #[serde(default = "default_boundary_epsilon")]
    boundary_epsilon: f64,
}

fn default_boundary_epsilon() -> f64 {
    DEFAULT_BOUNDARY_EPSILON
}

impl TryFrom<RawPhaseLayout> for PhaseLayout {
    type Error = ReelError;

    fn try_from(raw: RawPhaseLayout) -> ReelResult<Self> {
        Self::new(
            raw.intro_extent,
            raw.outro_extent,
            raw.per_item_extent,
            raw.item_count,
        )?
        .with_boundary_epsilon(raw.boundary_epsilon)
    }
}

impl From<PhaseLayout> for RawPhaseLayout {
    fn from(l: PhaseLayout) -> Self {
        Self {
            intro_extent: l.intro_extent,
            outro_extent: l.outro_extent,
            per_item_extent: l.per_item_extent,
            item_count: l.item_count,
            boundary_epsilon: l.boundary_epsilon,
        }
    }
}

/// Which phase contains an offset, and how far into it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PhaseSegment {
    /// Containing phase.
    pub phase: Phase,
    /// Normalized position within `phase`, in `[0, 1]`.
    pub local_progress: f64,
}

impl PhaseSegment {
    /// Progress of `phase` as seen from this segment: the local progress when `phase` is the
    /// current one, `1` once it has been scrolled past, `0` before it starts.
    pub fn progress_in(self, phase: Phase) -> f64 {
        match phase.cmp(&self.phase) {
            std::cmp::Ordering::Equal => self.local_progress,
            std::cmp::Ordering::Less => 1.0,
            std::cmp::Ordering::Greater => 0.0,
        }
    }
}

impl PhaseLayout {
    /// Validated layout with [`DEFAULT_BOUNDARY_EPSILON`].
    pub fn new(
        intro_extent: f64,
        outro_extent: f64,
        per_item_extent: f64,
        item_count: usize,
    ) -> ReelResult<Self> {
        let layout = Self {
            intro_extent,
            outro_extent,
            per_item_extent,
            item_count,
            boundary_epsilon: DEFAULT_BOUNDARY_EPSILON,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Same layout with a different boundary tolerance.
    pub fn with_boundary_epsilon(mut self, epsilon: f64) -> ReelResult<Self> {
        self.boundary_epsilon = epsilon;
        self.validate()?;
        Ok(self)
    }

    /// Re-check every layout invariant.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("intro_extent", self.intro_extent),
            ("outro_extent", self.outro_extent),
            ("per_item_extent", self.per_item_extent),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ReelError::configuration(format!(
                    "{name} must be finite and > 0, got {v}"
                )));
            }
        }
        if self.item_count < 2 {
            return Err(ReelError::configuration(format!(
                "item_count must be >= 2, got {}",
                self.item_count
            )));
        }

        let eps = self.boundary_epsilon;
        let narrowest = self
            .intro_extent
            .min(self.outro_extent)
            .min(self.per_item_extent);
        if !eps.is_finite() || eps < 0.0 || 2.0 * eps >= narrowest {
            return Err(ReelError::configuration(format!(
                "boundary_epsilon must be >= 0 and less than half the narrowest extent ({narrowest}), got {eps}"
            )));
        }
        Ok(())
    }

    /// Intro extent in viewport units.
    pub fn intro_extent(&self) -> f64 {
        self.intro_extent
    }

    /// Outro extent in viewport units.
    pub fn outro_extent(&self) -> f64 {
        self.outro_extent
    }

    /// Extent given to each middle item.
    pub fn per_item_extent(&self) -> f64 {
        self.per_item_extent
    }

    /// Number of gallery items, endpoints included.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Boundary snapping tolerance.
    pub fn boundary_epsilon(&self) -> f64 {
        self.boundary_epsilon
    }

    /// Middle items, which are the ones stepped through during [`Phase::Normal`].
    pub fn middle_count(&self) -> usize {
        self.item_count.saturating_sub(2)
    }

    /// Extent of the normal phase; zero when there are no middle items.
    pub fn normal_extent(&self) -> f64 {
        self.per_item_extent * self.middle_count() as f64
    }

    /// Sum of all phase extents.
    pub fn total_extent(&self) -> f64 {
        self.intro_extent + self.normal_extent() + self.outro_extent
    }

    /// `[start, end)` of `phase` in viewport units.
    pub fn phase_bounds(&self, phase: Phase) -> (f64, f64) {
        let intro_end = self.intro_extent;
        let normal_end = intro_end + self.normal_extent();
        match phase {
            Phase::Intro => (0.0, intro_end),
            Phase::Normal => (intro_end, normal_end),
            Phase::Outro => (normal_end, normal_end + self.outro_extent),
        }
    }

    /// Locate `offset` (host units) given the host's `viewport_extent`.
    pub fn segment(&self, offset: f64, viewport_extent: f64) -> PhaseSegment {
        self.segment_units(offset / viewport_extent)
    }

    /// Locate an already-validated sample.
    pub fn segment_sample(&self, sample: ScrollSample) -> PhaseSegment {
        self.segment_units(sample.viewport_units())
    }

    fn segment_units(&self, u: f64) -> PhaseSegment {
        let u = if u.is_nan() { 0.0 } else { u };
        let intro_end = self.intro_extent;
        let normal = self.normal_extent();
        let normal_end = intro_end + normal;

        // Jitter around a boundary always resolves to the phase that starts there.
        let u = [intro_end, normal_end]
            .into_iter()
            .find(|b| (u - b).abs() <= self.boundary_epsilon)
            .unwrap_or(u);

        if u < intro_end {
            PhaseSegment {
                phase: Phase::Intro,
                local_progress: clamp01(u / self.intro_extent),
            }
        } else if u < normal_end {
            PhaseSegment {
                phase: Phase::Normal,
                local_progress: if normal == 0.0 {
                    0.0
                } else {
                    clamp01((u - intro_end) / normal)
                },
            }
        } else {
            PhaseSegment {
                phase: Phase::Outro,
                local_progress: clamp01((u - normal_end) / self.outro_extent),
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/phase.rs"]
mod tests;
