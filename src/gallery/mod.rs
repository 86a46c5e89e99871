//! Static item list and active-item selection.

pub(crate) mod model;
pub(crate) mod select;
