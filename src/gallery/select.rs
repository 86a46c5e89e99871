use crate::foundation::core::{Phase, clamp01};

// Absorbs rounding in `local_progress * middle` so an exact window end stays on its item.
const SLOT_TOLERANCE: f64 = 1e-9;

/// Index of the single active item for a phase position.
///
/// Intro shows the first item and outro the last. During the normal phase the middle items
/// `1..=item_count-2` each own an equal slice of progress, upper bound inclusive, so the item
/// reached at the exact end of its slice is still the one shown. The result depends only on
/// the arguments, which is what makes scrolling back up retrace scrolling down exactly.
pub fn select_index(phase: Phase, local_progress: f64, item_count: usize) -> usize {
    let last = item_count.saturating_sub(1);
    match phase {
        Phase::Intro => 0,
        Phase::Outro => last,
        Phase::Normal => {
            let middle = item_count.saturating_sub(2);
            if middle == 0 {
                // The segmenter never reports Normal without middle items.
                return 0;
            }
            let slot = (clamp01(local_progress) * middle as f64 - SLOT_TOLERANCE).ceil();
            (slot.max(0.0) as usize).clamp(1, middle)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/select.rs"]
mod tests;
