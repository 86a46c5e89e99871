//! scrollreel turns a vertical scroll offset into the animation state of a scroll-driven
//! image reel.
//!
//! A reel is a fixed stack of overlaid images. As the user scrolls, exactly one image is
//! visible; the first one spins through the intro, the middle ones step past one per slice of
//! scroll, and the last one spins through the outro. Text blocks and a dimming overlay fade in
//! and out along the way.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: `ScrollSample -> PhaseSegment` (which phase, how far into it)
//! 2. **Select**: `PhaseSegment -> active index` (which single image is visible)
//! 3. **Resolve**: sample every [`KeyframeCurve`] into an [`AnimationSnapshot`]
//! 4. **Notify**: [`EdgeTrigger`] compares consecutive snapshots and emits [`IndexChanged`]
//!
//! [`ReelSession`] strings these together behind the landing gate and routes index changes
//! to a [`CueSink`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Fail at startup**: every configuration check runs when a [`Resolver`] is built; resolving
//!   a sample has no error path.
//! - **Deterministic**: a snapshot depends only on the sample and the configuration, so
//!   scrolling back up retraces scrolling down exactly.
//! - **No IO in the core**: only [`ReelConfig::from_path`] touches the filesystem.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod eval;
mod foundation;
mod gallery;
mod layout;
mod notify;
mod session;

pub use animation::curve::{ControlPoint, KeyframeCurve, evaluate, validate_points};
pub use config::ReelConfig;
pub use eval::curves::{CurveConfig, DEFAULT_TEXT_FADE, TextSection};
pub use eval::resolver::{Resolver, resolve};
pub use eval::snapshot::AnimationSnapshot;
pub use foundation::core::{Phase, ScrollSample};
pub use foundation::error::{ReelError, ReelResult};
pub use gallery::model::{
    Anchors, EdgeOffset, Gallery, GalleryItem, ItemPresentation, ItemTransform, ObjectFit,
};
pub use gallery::select::select_index;
pub use layout::phase::{DEFAULT_BOUNDARY_EPSILON, PhaseLayout, PhaseSegment};
pub use notify::edge::{CueSink, EdgeTrigger, IndexChanged, NullCue, RecordingCue};
pub use session::reel::{ReelSession, ReelUpdate, SCROLL_INDICATOR_HIDE_PX};
