pub mod sort;
pub mod text;
pub mod validate;
