//! The widget capability contract.
//!
//! Every UI element — leaf or container — implements [`Widget`]: it reports
//! size hints and growth policies for layout negotiation, accepts its
//! allocated size via `resize`, paints itself through a [`Painter`], and
//! observes broadcast [`Event`]s. Containers ([`crate::layout::BoxLayout`])
//! are just widgets whose `resize`/`draw`/`handle_event` recurse.
//!
//! # Implementing a widget
//!
//! Embed a [`WidgetBase`] for the common state (current size, focus flag) and
//! route the base accessors to it; the trait's provided methods do the rest:
//!
//! ```
//! use weft::geometry::Size;
//! use weft::painter::Painter;
//! use weft::widget::{Widget, WidgetBase};
//!
//! struct Label {
//!     base: WidgetBase,
//!     text: String,
//! }
//!
//! impl Widget for Label {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> Size {
//!         Size::new(self.text.chars().count() as i32, 1)
//!     }
//!
//!     fn draw(&self, painter: &mut dyn Painter) {
//!         painter.draw_text(0, 0, &self.text);
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::Event;
use crate::geometry::Size;
use crate::painter::Painter;

/// How a widget's allocation may grow past its hints on one axis.
///
/// Policies govern the allocator passes in [`crate::layout`]. `Maximum` is
/// kept distinct from `Preferred` on purpose: both grow to the preferred hint,
/// but only `Preferred` (and `Minimum`) widgets participate in fair leftover
/// distribution, so a `Maximum` widget is hard-capped at its preferred size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// Never grows past its minimum size hint in the hint-driven passes.
    Minimum,
    /// Grows to its preferred size hint and shares in leftover space.
    #[default]
    Preferred,
    /// Grows to its preferred size hint and no further.
    Maximum,
    /// Absorbs all remaining space before any fairness pass runs.
    Expanding,
}

/// Per-axis size policies for one widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    /// Policy along the horizontal axis.
    pub horizontal: SizePolicy,
    /// Policy along the vertical axis.
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a policy pair.
    pub const fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Common widget state: the current size (mutated only by `resize`) and the
/// focus flag (toggled by the focus chain).
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetBase {
    size: Size,
    focused: bool,
}

impl WidgetBase {
    /// Create a zero-sized, unfocused base.
    pub fn new() -> Self {
        Self::default()
    }

    /// The size most recently assigned by `resize`.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Store a new size.
    #[inline]
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

/// A participant in layout, painting, and event broadcast.
///
/// Object-safe so trees hold heterogeneous children behind [`WidgetRef`].
/// Coordinates passed to `draw` are always widget-local: the parent has
/// already translated the painter to the widget's origin.
pub trait Widget {
    /// Shared state accessor; provided methods route through it.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable shared state accessor.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The smallest size at which the widget remains usable.
    ///
    /// Defaults to zero: the widget tolerates any allocation.
    fn min_size_hint(&self) -> Size {
        Size::ZERO
    }

    /// The size the widget wants.
    fn size_hint(&self) -> Size;

    /// Growth policies per axis. Defaults to `Preferred` on both.
    fn size_policy(&self) -> SizePolicyPair {
        SizePolicyPair::default()
    }

    /// The size most recently assigned by [`resize`](Widget::resize).
    fn size(&self) -> Size {
        self.widget_base().size()
    }

    /// Accept an allocated size. Containers recurse into their children here.
    fn resize(&mut self, size: Size) {
        self.widget_base_mut().set_size(size);
    }

    /// Paint into a painter anchored at the widget's top-left cell.
    fn draw(&self, painter: &mut dyn Painter);

    /// Observe a broadcast event. Defaults to ignoring it.
    fn handle_event(&mut self, event: &Event) {
        let _ = event;
    }

    /// Whether the widget currently receives keyboard input.
    fn is_focused(&self) -> bool {
        self.widget_base().is_focused()
    }

    /// Grant or revoke keyboard focus.
    fn set_focused(&mut self, focused: bool) {
        self.widget_base_mut().set_focused(focused);
    }
}

/// Shared handle to a widget.
///
/// The tree and the focus chain both reference the same leaf widgets, and the
/// whole toolkit is single-threaded (synchronous tree traversals from one
/// control thread), so `Rc<RefCell<..>>` is the ownership model. A widget is
/// still placed in at most one container at a time.
pub type WidgetRef = Rc<RefCell<dyn Widget>>;

/// Wrap a widget into a shared [`WidgetRef`] handle.
pub fn widget_ref<W: Widget + 'static>(widget: W) -> WidgetRef {
    Rc::new(RefCell::new(widget))
}

/// An invisible filler widget.
///
/// Reports zero hints with an `Expanding` policy on both axes, so it soaks up
/// whatever space its siblings leave behind — the usual way to push widgets
/// to one end of a box.
#[derive(Debug, Default)]
pub struct Spacer {
    base: WidgetBase,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget for Spacer {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> Size {
        Size::ZERO
    }

    fn size_policy(&self) -> SizePolicyPair {
        SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Expanding)
    }

    fn draw(&self, _painter: &mut dyn Painter) {}
}
