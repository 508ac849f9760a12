pub(crate) mod exposure;
pub(crate) mod interleave;
pub(crate) mod tone;
