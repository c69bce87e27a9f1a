pub(crate) mod edge;
pub(crate) mod resolver;
pub(crate) mod rule_set;
