pub mod distance;
pub mod loop_extension;
pub mod simple_paths;
