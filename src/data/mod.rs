//! Segment input handling

pub mod segments;

pub use segments::{load_segments, parse_segments, Segment};
