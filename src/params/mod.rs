pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod envelope;
pub(crate) mod orientation;
pub(crate) mod patch;
