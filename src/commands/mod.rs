pub mod segment;
pub mod validate;
