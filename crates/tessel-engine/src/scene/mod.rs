//! Recorded draw streams.
//!
//! Responsibilities:
//! - capture geometry submitted through `graphics::RenderTarget`
//! - keep submission order and per-submission render states
//! - hand the recording to a GPU renderer without borrowing the original drawables

mod list;

pub use list::{DrawItem, DrawList};
