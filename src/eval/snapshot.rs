use crate::foundation::core::Phase;

/// Fully resolved animation state for one scroll sample.
///
/// A new snapshot is built for every sample and replaces the previous one wholesale.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationSnapshot {
    /// Phase containing the sample.
    pub phase: Phase,
    /// Normalized position within `phase`.
    pub local_progress: f64,
    /// The single visible item, in `[0, item_count)`.
    pub active_index: usize,
    /// Rotation of the active item in `[0, 360)`; zero unless an endpoint item is rotating.
    pub rotation_degrees: f64,
    /// Opacity per configured text section, in configuration order.
    pub text_opacities: Vec<f64>,
    /// Full-bleed overlay opacity.
    pub background_opacity: f64,
}

impl AnimationSnapshot {
    /// True when the active item should carry a rotation transform.
    pub fn is_rotating(&self) -> bool {
        self.rotation_degrees != 0.0
    }

    /// Index of the most visible text section, if any is visible at all.
    pub fn dominant_text(&self) -> Option<usize> {
        self.text_opacities
            .iter()
            .enumerate()
            .filter(|(_, o)| **o > 0.0)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}
