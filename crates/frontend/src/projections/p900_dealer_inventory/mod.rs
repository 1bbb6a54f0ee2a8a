pub mod feeds;
pub mod ui;
