use std::collections::BTreeSet;

use crate::{
    animation::curve::KeyframeCurve,
    foundation::core::Phase,
    foundation::error::{ReelError, ReelResult},
};

/// Fraction of each default text window spent fading in and again fading out.
pub const DEFAULT_TEXT_FADE: f64 = 0.2;

/// A text block whose opacity follows one window of a phase's progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextSection {
    /// Stable identifier used by the presentation layer.
    pub id: String,
    /// Phase whose progress drives `opacity`.
    pub phase: Phase,
    /// Opacity over that phase's progress; sampled values are clamped to `[0, 1]`.
    pub opacity: KeyframeCurve,
}

/// Every curve the resolver samples.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    /// Rotation in degrees over the rotating phase's local progress.
    pub rotation: KeyframeCurve,
    /// Overlay opacity over intro progress.
    pub intro_background: KeyframeCurve,
    /// Overlay opacity over outro progress.
    pub outro_background: KeyframeCurve,
    /// Overlay opacity over normal progress; no overlay in the normal phase when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_background: Option<KeyframeCurve>,
    /// Text blocks, in presentation order.
    pub text_sections: Vec<TextSection>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        let overlay = [(0.0, 0.0), (0.2, 0.5), (0.8, 0.5), (1.0, 0.0)];
        Self {
            rotation: KeyframeCurve::preset(&[(0.0, 0.0), (1.0, 360.0)]),
            intro_background: KeyframeCurve::preset(&overlay),
            outro_background: KeyframeCurve::preset(&overlay),
            normal_background: None,
            text_sections: default_text_sections(),
        }
    }
}

fn default_text_sections() -> Vec<TextSection> {
    let ids = ["record", "launch", "dedication"];
    let n = ids.len() as f64;
    ids.iter()
        .enumerate()
        .map(|(i, id)| {
            let start = i as f64 / n;
            let end = (i + 1) as f64 / n;
            let ramp = (end - start) * DEFAULT_TEXT_FADE;
            TextSection {
                id: (*id).to_string(),
                phase: Phase::Intro,
                opacity: KeyframeCurve::preset(&[
                    (start, 0.0),
                    (start + ramp, 1.0),
                    (end - ramp, 1.0),
                    (end, 0.0),
                ]),
            }
        })
        .collect()
}

impl CurveConfig {
    /// Check every curve plus the text-window layout.
    pub fn validate(&self) -> ReelResult<()> {
        for curve in [&self.rotation, &self.intro_background, &self.outro_background]
            .into_iter()
            .chain(self.normal_background.as_ref())
            .chain(self.text_sections.iter().map(|s| &s.opacity))
        {
            crate::animation::curve::validate_points(curve.points())?;
        }

        // Progress outside a phase reads as 0 before it and 1 after it, so each overlay must
        // be dark on the side facing the normal phase.
        let intro_tail = self.intro_background.sample(1.0);
        if intro_tail != 0.0 {
            return Err(ReelError::configuration(format!(
                "intro_background must end at 0, got {intro_tail}"
            )));
        }
        let outro_head = self.outro_background.sample(0.0);
        if outro_head != 0.0 {
            return Err(ReelError::configuration(format!(
                "outro_background must start at 0, got {outro_head}"
            )));
        }

        let mut ids = BTreeSet::new();
        for s in &self.text_sections {
            if !ids.insert(s.id.as_str()) {
                return Err(ReelError::configuration(format!(
                    "duplicate text section id '{}'",
                    s.id
                )));
            }
            // A section lit at either end of its phase would stay lit outside it.
            if let Some((start, end)) = s.opacity.support()
                && !(start >= 0.0 && end <= 1.0)
            {
                return Err(ReelError::configuration(format!(
                    "text section '{}' must be dark outside 0..1 of its phase, lit over {start}..{end}",
                    s.id
                )));
            }
        }

        for phase in Phase::ALL {
            let mut windows: Vec<(f64, f64, &str)> = self
                .text_sections
                .iter()
                .filter(|s| s.phase == phase)
                .filter_map(|s| s.opacity.support().map(|(a, b)| (a, b, s.id.as_str())))
                .collect();
            windows.sort_by(|a, b| a.0.total_cmp(&b.0));
            // Adjacent windows may touch but never overlap.
            if let Some(w) = windows.windows(2).find(|w| w[0].1 > w[1].0) {
                return Err(ReelError::configuration(format!(
                    "text sections '{}' and '{}' overlap in {phase:?} ({}..{} vs {}..{})",
                    w[0].2, w[1].2, w[0].0, w[0].1, w[1].0, w[1].1
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/curves.rs"]
mod tests;
