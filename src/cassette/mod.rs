//! Cassette format for recording and replaying tool launches.

pub mod format;
pub mod recorder;
pub mod replayer;
