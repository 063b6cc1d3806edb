pub(crate) mod budget;
pub(crate) mod orders;
pub(crate) mod summary;
