//! Frame sinks.
//!
//! Sinks consume composited frames in increasing frame order and are driven by
//! `ScrollSession::render_to_sink`.

/// PNG-sequence sink.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
