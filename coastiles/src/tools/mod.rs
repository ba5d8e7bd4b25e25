pub mod build;
pub mod probe;
