pub(crate) mod builtin;
pub(crate) mod palette;
pub(crate) mod params;
pub(crate) mod preset;
