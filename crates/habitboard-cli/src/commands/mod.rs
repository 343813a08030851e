pub mod config;
pub mod grid;
pub mod status;
pub mod streak;
pub mod today;

mod context;
