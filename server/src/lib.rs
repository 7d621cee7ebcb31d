pub mod api;
pub mod forms;
pub mod schedule;
pub mod seed;
pub mod store;
pub mod views;
