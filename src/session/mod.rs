pub(crate) mod reel;
