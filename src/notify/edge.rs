use crate::{eval::snapshot::AnimationSnapshot, foundation::error::ReelResult};

/// The active item changed between two consecutive samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct IndexChanged {
    /// Previously active index.
    pub from: usize,
    /// Newly active index.
    pub to: usize,
}

/// Emits one [`IndexChanged`] per transition of `active_index`.
///
/// The very first sample of a session never emits, so loading the page mid-reel does not
/// fire a cue.
#[derive(Clone, Debug, Default)]
pub struct EdgeTrigger {
    last_index: Option<usize>,
}

impl EdgeTrigger {
    /// Trigger for a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `current` with `previous` (or, when `previous` is absent, with the last index
    /// this trigger observed) and report a transition.
    pub fn on_sample(
        &mut self,
        previous: Option<&AnimationSnapshot>,
        current: &AnimationSnapshot,
    ) -> Option<IndexChanged> {
        let from = previous.map(|p| p.active_index).or(self.last_index);
        self.last_index = Some(current.active_index);
        let from = from?;
        (from != current.active_index).then_some(IndexChanged {
            from,
            to: current.active_index,
        })
    }

    /// Last index observed, if any sample has been seen.
    pub fn last_index(&self) -> Option<usize> {
        self.last_index
    }

    /// Forget history; the next sample counts as the first of a new session.
    pub fn reset(&mut self) {
        self.last_index = None;
    }
}

/// Consumer of index-change events, typically an audio player.
///
/// Errors are advisory: callers log and drop them.
pub trait CueSink {
    /// Play the cue for `event`.
    fn play(&mut self, event: IndexChanged) -> ReelResult<()>;
}

/// Cue sink that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCue;

impl CueSink for NullCue {
    fn play(&mut self, _event: IndexChanged) -> ReelResult<()> {
        Ok(())
    }
}

/// Cue sink that keeps every event it was asked to play.
#[derive(Clone, Debug, Default)]
pub struct RecordingCue {
    events: Vec<IndexChanged>,
}

impl RecordingCue {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events in arrival order.
    pub fn events(&self) -> &[IndexChanged] {
        &self.events
    }
}

impl CueSink for RecordingCue {
    fn play(&mut self, event: IndexChanged) -> ReelResult<()> {
        self.events.push(event);
        Ok(())
    }
}

impl<F> CueSink for F
where
    F: FnMut(IndexChanged) -> ReelResult<()>,
{
    fn play(&mut self, event: IndexChanged) -> ReelResult<()> {
        self(event)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notify/edge.rs"]
mod tests;
