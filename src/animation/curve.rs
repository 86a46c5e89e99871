use crate::foundation::error::{ReelError, ReelResult};

/// A single `(position, value)` control point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPoint {
    /// Normalized progress at which `value` is reached.
    pub position: f64,
    /// Output value at `position`.
    pub value: f64,
}

impl ControlPoint {
    /// Build a control point.
    pub const fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((position, value): (f64, f64)) -> Self {
        Self { position, value }
    }
}

/// Check that `points` can drive [`evaluate`].
pub fn validate_points(points: &[ControlPoint]) -> ReelResult<()> {
    if points.len() < 2 {
        return Err(ReelError::invalid_curve(format!(
            "a curve needs at least 2 control points, got {}",
            points.len()
        )));
    }
    if let Some(p) = points
        .iter()
        .find(|p| !p.position.is_finite() || !p.value.is_finite())
    {
        return Err(ReelError::invalid_curve(format!(
            "control point ({}, {}) is not finite",
            p.position, p.value
        )));
    }
    if let Some(w) = points.windows(2).find(|w| w[0].position >= w[1].position) {
        return Err(ReelError::invalid_curve(format!(
            "control point positions must be strictly increasing ({} then {})",
            w[0].position, w[1].position
        )));
    }
    Ok(())
}

/// Piecewise-linear interpolation over `points` at `progress`.
///
/// Outside the first/last control point the result is the nearest endpoint value when `clamp`
/// is set, otherwise a linear extrapolation of the nearest segment.
pub fn evaluate(progress: f64, points: &[ControlPoint], clamp: bool) -> ReelResult<f64> {
    validate_points(points)?;
    Ok(evaluate_unchecked(progress, points, clamp))
}

fn evaluate_unchecked(progress: f64, points: &[ControlPoint], clamp: bool) -> f64 {
    let first = points[0];
    let last = points[points.len() - 1];

    if progress.is_nan() {
        return first.value;
    }
    if progress <= first.position {
        return if clamp {
            first.value
        } else {
            segment_value(first, points[1], progress)
        };
    }
    if progress >= last.position {
        return if clamp {
            last.value
        } else {
            segment_value(points[points.len() - 2], last, progress)
        };
    }

    // first.position < progress < last.position, so 1 <= idx <= len - 1.
    let idx = points.partition_point(|p| p.position <= progress);
    segment_value(points[idx - 1], points[idx], progress)
}

fn segment_value(a: ControlPoint, b: ControlPoint, progress: f64) -> f64 {
    let t = (progress - a.position) / (b.position - a.position);
    a.value + (b.value - a.value) * t
}

/// A validated keyframe curve: ordered control points plus an out-of-range policy.
///
/// Construction is the only fallible step; [`KeyframeCurve::sample`] is total.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawCurve", into = "RawCurve")]
pub struct KeyframeCurve {
    points: Vec<ControlPoint>,
    clamp: bool,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
struct RawCurve {
    points: Vec<ControlPoint>,
    #[serde(default = "default_clamp")]
    clamp: bool,
}

fn default_clamp() -> bool {
    true
}

impl TryFrom<RawCurve> for KeyframeCurve {
    type Error = ReelError;

    fn try_from(raw: RawCurve) -> ReelResult<Self> {
        Self::with_clamp(raw.points, raw.clamp)
    }
}

impl From<KeyframeCurve> for RawCurve {
    fn from(curve: KeyframeCurve) -> Self {
        Self {
            points: curve.points,
            clamp: curve.clamp,
        }
    }
}

impl KeyframeCurve {
    /// Clamped curve over `points`.
    pub fn new(points: impl IntoIterator<Item = impl Into<ControlPoint>>) -> ReelResult<Self> {
        Self::with_clamp(points, true)
    }

    /// Curve over `points` with an explicit out-of-range policy.
    pub fn with_clamp(
        points: impl IntoIterator<Item = impl Into<ControlPoint>>,
        clamp: bool,
    ) -> ReelResult<Self> {
        let points: Vec<ControlPoint> = points.into_iter().map(Into::into).collect();
        validate_points(&points)?;
        Ok(Self { points, clamp })
    }

    /// Clamped ramp from `from` at 0 to `to` at 1.
    pub fn linear(from: f64, to: f64) -> ReelResult<Self> {
        Self::new([(0.0, from), (1.0, to)])
    }

    /// 0 -> 1 -> 1 -> 0 window over `[start, end]`; `fade` is the fraction of the window spent
    /// on each ramp and must lie in `(0, 0.5)`.
    pub fn fade_window(start: f64, end: f64, fade: f64) -> ReelResult<Self> {
        if !(fade > 0.0 && fade < 0.5) {
            return Err(ReelError::invalid_curve(format!(
                "fade fraction must be in (0, 0.5), got {fade}"
            )));
        }
        let ramp = (end - start) * fade;
        Self::new([
            (start, 0.0),
            (start + ramp, 1.0),
            (end - ramp, 1.0),
            (end, 0.0),
        ])
    }

    // Built-in defaults; covered by `presets_are_valid`.
    pub(crate) fn preset(points: &[(f64, f64)]) -> Self {
        Self {
            points: points.iter().copied().map(ControlPoint::from).collect(),
            clamp: true,
        }
    }

    /// Control points in position order.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Whether out-of-range progress holds the endpoint value.
    pub fn clamps(&self) -> bool {
        self.clamp
    }

    /// Value at `progress`.
    pub fn sample(&self, progress: f64) -> f64 {
        evaluate_unchecked(progress, &self.points, self.clamp)
    }

    /// Closed interval outside of which this curve is identically zero.
    ///
    /// `None` means the curve is zero everywhere. Unbounded sides are reported as infinities,
    /// which always happens for non-clamping curves with a non-zero segment.
    pub fn support(&self) -> Option<(f64, f64)> {
        let first_nz = self.points.iter().position(|p| p.value != 0.0)?;
        let last_nz = self.points.iter().rposition(|p| p.value != 0.0)?;
        let last = self.points.len() - 1;

        let start = if first_nz == 0 || !self.clamp {
            f64::NEG_INFINITY
        } else {
            self.points[first_nz - 1].position
        };
        let end = if last_nz == last || !self.clamp {
            f64::INFINITY
        } else {
            self.points[last_nz + 1].position
        };
        Some((start, end))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;
