//! Foundation building blocks for listkit.
//!
//! The [`lazy`] module holds the layout cache that keeps per-item frames and
//! the total content height of a vertical list coherent across mutations.

pub mod lazy;

pub use listkit_core::ItemKey;
pub use listkit_ui_graphics::{Rect, Size};
