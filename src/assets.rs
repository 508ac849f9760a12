pub(crate) mod decode;
pub(crate) mod file_size;
