pub(crate) mod lbvh;
pub(crate) mod median;
