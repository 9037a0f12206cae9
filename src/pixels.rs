pub(crate) mod adapt;
pub(crate) mod buffer;
