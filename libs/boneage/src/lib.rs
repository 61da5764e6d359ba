pub mod common;
pub mod inference;
pub mod predict;
pub mod preprocess;
