//! Keyframe curves shared by rotation, text and overlay animation.

pub(crate) mod curve;
