pub(crate) mod edge_map;
pub(crate) mod fade;
pub(crate) mod snake;
