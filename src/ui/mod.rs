pub mod messages;
pub mod theme;
