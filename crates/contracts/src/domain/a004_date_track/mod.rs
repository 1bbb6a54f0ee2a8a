pub mod aggregate;

pub use aggregate::{DateTrackEntry, DateTracks};
