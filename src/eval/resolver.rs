use crate::{
    eval::curves::CurveConfig,
    eval::snapshot::AnimationSnapshot,
    foundation::core::{Phase, ScrollSample, clamp01},
    foundation::error::ReelResult,
    gallery::select::select_index,
    layout::phase::{PhaseLayout, PhaseSegment},
};

const FULL_TURN: f64 = 360.0;

/// Turns scroll samples into [`AnimationSnapshot`]s.
///
/// All validation happens in [`Resolver::new`]; [`Resolver::resolve`] has no error path.
#[derive(Clone, Debug)]
pub struct Resolver {
    layout: PhaseLayout,
    curves: CurveConfig,
}

impl Resolver {
    /// Validate `layout` and `curves` once, up front.
    pub fn new(layout: PhaseLayout, curves: CurveConfig) -> ReelResult<Self> {
        layout.validate()?;
        curves.validate()?;
        Ok(Self { layout, curves })
    }

    /// Phase extents in use.
    pub fn layout(&self) -> &PhaseLayout {
        &self.layout
    }

    /// Curves in use.
    pub fn curves(&self) -> &CurveConfig {
        &self.curves
    }

    /// Resolve one sample.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, sample: ScrollSample) -> AnimationSnapshot {
        let segment = self.layout.segment_sample(sample);
        let item_count = self.layout.item_count();
        let active_index = select_index(segment.phase, segment.local_progress, item_count);

        AnimationSnapshot {
            phase: segment.phase,
            local_progress: segment.local_progress,
            active_index,
            rotation_degrees: self.rotation(segment, active_index),
            text_opacities: self
                .curves
                .text_sections
                .iter()
                .map(|s| clamp01(s.opacity.sample(segment.progress_in(s.phase))))
                .collect(),
            background_opacity: self.background(segment),
        }
    }

    fn rotation(&self, segment: PhaseSegment, active_index: usize) -> f64 {
        let last = self.layout.item_count() - 1;
        let rotating = match segment.phase {
            Phase::Intro => active_index == 0,
            Phase::Outro => active_index == last,
            Phase::Normal => false,
        };
        if !rotating {
            return 0.0;
        }
        let deg = self
            .curves
            .rotation
            .sample(segment.local_progress)
            .rem_euclid(FULL_TURN);
        // rem_euclid can round up to exactly FULL_TURN for tiny negative inputs.
        if deg >= FULL_TURN { 0.0 } else { deg }
    }

    fn background(&self, segment: PhaseSegment) -> f64 {
        let intro = self
            .curves
            .intro_background
            .sample(segment.progress_in(Phase::Intro));
        let outro = self
            .curves
            .outro_background
            .sample(segment.progress_in(Phase::Outro));
        let normal = match (&self.curves.normal_background, segment.phase) {
            (Some(curve), Phase::Normal) => curve.sample(segment.local_progress),
            _ => 0.0,
        };
        clamp01(intro.max(outro).max(normal))
    }
}

/// One-shot resolve that validates its configuration on every call.
///
/// Hosts resolving a stream of samples should build a [`Resolver`] once instead.
pub fn resolve(
    sample: ScrollSample,
    layout: &PhaseLayout,
    curves: &CurveConfig,
) -> ReelResult<AnimationSnapshot> {
    Ok(Resolver::new(*layout, curves.clone())?.resolve(sample))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/resolver.rs"]
mod tests;
