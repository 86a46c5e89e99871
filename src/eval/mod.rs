//! Scroll sample to snapshot resolution.

pub(crate) mod curves;
pub(crate) mod resolver;
pub(crate) mod snapshot;
