pub(crate) mod layer;
pub(crate) mod property;
