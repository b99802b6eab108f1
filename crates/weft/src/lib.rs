//! weft — a composable terminal widget toolkit.
//!
//! weft is the layout-and-composition core for text-mode dashboards and
//! interactive console UIs: a [`Widget`](widget::Widget) contract, a nesting
//! [`BoxLayout`](layout::BoxLayout) container with Qt-style size-policy
//! negotiation, a [`FocusChain`](focus::FocusChain) for keyboard focus, and a
//! broadcast [`Event`](event::Event) model. Terminal backends (raw input
//! decoding, screen buffers) and concrete leaf widgets plug in at the
//! [`Painter`](painter::Painter) and [`Widget`](widget::Widget) boundaries.
//!
//! # Wiring a UI
//!
//! An application builds a tree of boxes and leaves, threads the focusable
//! leaves into a focus chain, and pumps events from its own loop:
//!
//! ```
//! use weft::event::Event;
//! use weft::geometry::Size;
//! use weft::layout::BoxLayout;
//! use weft::widget::{widget_ref, Spacer, Widget};
//!
//! let sidebar = widget_ref(BoxLayout::vertical().with_child(widget_ref(Spacer::new())));
//! let mut root = BoxLayout::horizontal().with_child(sidebar);
//! root.set_border(true);
//! root.set_title("dashboard");
//!
//! // Driven by the embedding event loop:
//! root.resize(Size::new(80, 24));          // on terminal resize
//! root.handle_event(&Event::Resize);       // broadcast to the tree
//! // root.draw(&mut painter);              // on each redraw tick
//! ```
//!
//! # Logging
//!
//! weft is instrumented with the `tracing` crate under the `weft::layout` and
//! `weft::focus` targets. Install a subscriber in the application to see
//! layout and focus activity:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! # Concurrency
//!
//! The whole toolkit is single-threaded and synchronous: layout, paint, and
//! event broadcast are plain tree traversals driven from one control thread.
//! Widgets are shared between the tree and the focus chain through
//! [`WidgetRef`](widget::WidgetRef) (`Rc<RefCell<..>>`).

pub mod event;
pub mod focus;
pub mod geometry;
pub mod layout;
pub mod painter;
pub mod widget;

#[cfg(test)]
mod tests;
