//! Port implementations: live network clients plus cassette recording and replay.

pub mod live;
pub mod recording;
pub mod replaying;
