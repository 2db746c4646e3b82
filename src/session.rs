pub(crate) mod host;
pub(crate) mod scene;
pub(crate) mod store;
