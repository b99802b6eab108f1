//! Layout containers and main-axis space negotiation.
//!
//! The module has two halves: [`allocate`](self::allocate), the deterministic
//! multi-pass allocator that splits an available extent among children
//! according to their hints and [`SizePolicy`](crate::widget::SizePolicy),
//! and [`BoxLayout`], the container widget that drives it and recurses into
//! its children for resize, paint, and event broadcast.

mod allocate;
mod box_layout;

pub use box_layout::{BoxLayout, Orientation};
