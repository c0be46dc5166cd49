pub(crate) mod config;
pub(crate) mod stream_border;
pub(crate) mod style;
