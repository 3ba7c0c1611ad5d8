pub mod section;
pub mod task;
