pub(crate) mod cpu;
pub(crate) mod style;
pub(crate) mod surface;
