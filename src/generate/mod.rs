pub(crate) mod batch;
pub(crate) mod diversify;
pub(crate) mod mutator;
pub(crate) mod sampler;
