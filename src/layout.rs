pub(crate) mod fit;
