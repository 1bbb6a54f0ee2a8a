pub mod config;
pub mod lenient;
pub mod realtime;
pub mod slug;
pub mod xlsx;
