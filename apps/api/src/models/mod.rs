pub mod generation;
pub mod product;
