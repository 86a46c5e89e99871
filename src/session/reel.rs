use std::fmt;

use crate::{
    config::ReelConfig,
    eval::resolver::Resolver,
    eval::snapshot::AnimationSnapshot,
    foundation::core::ScrollSample,
    foundation::error::{ReelError, ReelResult},
    gallery::model::{Gallery, ItemPresentation},
    notify::edge::{CueSink, EdgeTrigger, IndexChanged, NullCue},
};

/// Raw scroll distance after which the "scroll" hint is hidden for good.
pub const SCROLL_INDICATOR_HIDE_PX: f64 = 50.0;

/// Result of handling one scroll sample.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ReelUpdate {
    /// Snapshot now current.
    pub snapshot: AnimationSnapshot,
    /// Transition fired by this sample, if any.
    pub index_changed: Option<IndexChanged>,
}

/// Owns everything that persists between scroll samples.
///
/// The session starts behind the landing gate: samples are ignored until
/// [`ReelSession::dismiss_landing`] is called.
pub struct ReelSession {
    resolver: Resolver,
    gallery: Gallery,
    trigger: EdgeTrigger,
    current: Option<AnimationSnapshot>,
    cue: Box<dyn CueSink>,
    attached: bool,
    indicator_visible: bool,
}

impl fmt::Debug for ReelSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReelSession")
            .field("resolver", &self.resolver)
            .field("items", &self.gallery.len())
            .field("current", &self.current)
            .field("attached", &self.attached)
            .field("indicator_visible", &self.indicator_visible)
            .finish_non_exhaustive()
    }
}

impl ReelSession {
    /// Validate `config` and build a gated session with a silent cue sink.
    pub fn new(config: &ReelConfig) -> ReelResult<Self> {
        let (resolver, gallery) = config.build()?;
        Self::from_parts(resolver, gallery)
    }

    /// Build from an already validated resolver and gallery.
    pub fn from_parts(resolver: Resolver, gallery: Gallery) -> ReelResult<Self> {
        if resolver.layout().item_count() != gallery.len() {
            return Err(ReelError::configuration(format!(
                "resolver expects {} items but the gallery has {}",
                resolver.layout().item_count(),
                gallery.len()
            )));
        }
        Ok(Self {
            resolver,
            gallery,
            trigger: EdgeTrigger::new(),
            current: None,
            cue: Box::new(NullCue),
            attached: false,
            indicator_visible: true,
        })
    }

    /// Route index changes to `cue`.
    pub fn with_cue(mut self, cue: impl CueSink + 'static) -> Self {
        self.cue = Box::new(cue);
        self
    }

    /// Whether the landing gate has been dismissed.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Leave the landing splash and start accepting scroll samples.
    pub fn dismiss_landing(&mut self) {
        if !self.attached {
            tracing::info!(items = self.gallery.len(), "landing dismissed, reel attached");
            self.attached = true;
        }
    }

    /// Handle one scroll notification; `None` while the landing gate is up.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> Option<ReelUpdate> {
        if !self.attached {
            tracing::trace!(offset = sample.offset(), "sample ignored behind landing gate");
            return None;
        }

        if self.indicator_visible && sample.offset() > SCROLL_INDICATOR_HIDE_PX {
            tracing::debug!(offset = sample.offset(), "scroll indicator hidden");
            self.indicator_visible = false;
        }

        let snapshot = self.resolver.resolve(sample);
        if let Some(prev) = &self.current {
            if prev.phase != snapshot.phase {
                tracing::debug!(from = ?prev.phase, to = ?snapshot.phase, "phase changed");
            }
        }

        let index_changed = self.trigger.on_sample(self.current.as_ref(), &snapshot);
        if let Some(event) = index_changed {
            tracing::info!(from = event.from, to = event.to, "active item changed");
            if let Err(err) = self.cue.play(event) {
                tracing::warn!(%err, from = event.from, to = event.to, "audio cue failed");
            }
        }

        self.current = Some(snapshot.clone());
        Some(ReelUpdate {
            snapshot,
            index_changed,
        })
    }

    /// Most recent snapshot.
    pub fn current(&self) -> Option<&AnimationSnapshot> {
        self.current.as_ref()
    }

    /// Per-item presentation for the current snapshot.
    pub fn presentation(&self) -> Option<Vec<ItemPresentation<'_>>> {
        self.current.as_ref().map(|s| self.gallery.present(s))
    }

    /// Whether the "scroll" hint should still be shown.
    pub fn scroll_indicator_visible(&self) -> bool {
        self.indicator_visible
    }

    /// Height the host must make scrollable, in the same units as `viewport_extent`.
    pub fn scroll_height(&self, viewport_extent: f64) -> f64 {
        self.resolver.layout().total_extent() * viewport_extent
    }

    /// Items of this reel.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Resolver in use.
    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/reel.rs"]
mod tests;
