//! Drivers that feed crops of a map through the filter and overlay.

/// Scrolling-map session.
pub mod scroll;

pub use self::scroll::{ScrollOpts, ScrollSession, ScrollStats};
