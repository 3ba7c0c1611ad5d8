pub mod group;
pub mod state;
