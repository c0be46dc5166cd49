pub(crate) mod arc_length;
pub(crate) mod boundary;
pub(crate) mod flatten;
pub(crate) mod resample;
pub(crate) mod strip;
