pub(crate) mod fraction;
pub(crate) mod legacy;
pub(crate) mod model;
pub(crate) mod sampler;
pub(crate) mod subimage;
