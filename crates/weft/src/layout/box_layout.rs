//! The box container: one-axis arrangement of child widgets.
//!
//! [`BoxLayout`] owns an ordered sequence of children and arranges them along
//! a single [`Orientation`]. It is itself a [`Widget`], so boxes nest to
//! arbitrary depth without special-casing: a dashboard is typically a
//! vertical box of horizontal boxes of leaves.
//!
//! On `resize` the container negotiates its interior main-axis extent among
//! the children (see [`super::allocate`]); the cross axis is always assigned
//! in full. On `draw` it paints an optional border and title, then each child
//! under a translated, clipped painter view. Events are broadcast to every
//! child unconditionally.

use tracing::debug;

use super::allocate::{allocate, AllocItem};
use crate::event::Event;
use crate::geometry::{Rect, Size};
use crate::painter::{Painter, PainterExt};
use crate::widget::{SizePolicy, Widget, WidgetBase, WidgetRef};

/// The axis along which a box distributes space.
///
/// The other axis (the cross axis) is assigned in full to every child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Children are arranged left to right.
    #[default]
    Horizontal,
    /// Children are arranged top to bottom.
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation.
    #[inline]
    pub fn cross(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A widget that lays out its children along one axis.
///
/// Child order is significant everywhere: main-axis placement, paint order,
/// and event broadcast order all follow insertion order. A bordered box
/// reserves one cell on every side and draws its title on the top edge.
pub struct BoxLayout {
    base: WidgetBase,
    children: Vec<WidgetRef>,
    orientation: Orientation,
    border: bool,
    title: String,
}

impl BoxLayout {
    /// Create an empty box with the given orientation.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            base: WidgetBase::new(),
            children: Vec::new(),
            orientation,
            border: false,
            title: String::new(),
        }
    }

    /// Create an empty horizontal box.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Create an empty vertical box.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Append a child (builder pattern).
    pub fn with_child(mut self, child: WidgetRef) -> Self {
        self.append(child);
        self
    }

    /// Append a child at the end of the box.
    pub fn append(&mut self, child: WidgetRef) {
        self.children.push(child);
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The box's main axis.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Enable or disable the 1-cell border.
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    #[inline]
    pub fn has_border(&self) -> bool {
        self.border
    }

    /// Set the title drawn on the top border edge.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    // =========================================================================
    // Axis helpers
    // =========================================================================

    /// Main-axis component of a size.
    #[inline]
    fn main(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Cross-axis component of a size.
    #[inline]
    fn cross(&self, size: Size) -> i32 {
        match self.orientation {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Build a size from main- and cross-axis extents.
    #[inline]
    fn make_size(&self, main: i32, cross: i32) -> Size {
        match self.orientation {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }

    /// A child's growth policy along this box's main axis.
    fn main_policy(&self, child: &dyn Widget) -> SizePolicy {
        let policy = child.size_policy();
        match self.orientation {
            Orientation::Horizontal => policy.horizontal,
            Orientation::Vertical => policy.vertical,
        }
    }

    /// Aggregate child hints: sum of mains, max of crosses, plus the border.
    fn aggregate_hint(&self, hint_of: impl Fn(&dyn Widget) -> Size) -> Size {
        let mut main = 0;
        let mut cross = 0;
        for child in &self.children {
            let hint = hint_of(&*child.borrow());
            main += self.main(hint);
            cross = cross.max(self.cross(hint));
        }
        let mut size = self.make_size(main, cross);
        if self.border {
            size = size.expanded(2, 2);
        }
        size
    }

    /// The interior available to children: the full size minus the border.
    fn interior(&self) -> Size {
        let size = self.base.size();
        if self.border {
            size.expanded(-2, -2).clamped()
        } else {
            size.clamped()
        }
    }

    /// Negotiate the interior main-axis extent and resize every child.
    fn layout_children(&mut self) {
        let interior = self.interior();
        let items: Vec<AllocItem> = self
            .children
            .iter()
            .map(|child| {
                let child = child.borrow();
                AllocItem {
                    minimum: self.main(child.min_size_hint()),
                    preferred: self.main(child.size_hint()),
                    policy: self.main_policy(&*child),
                }
            })
            .collect();

        let extents = allocate(self.main(interior), &items);
        debug!(
            target: "weft::layout",
            orientation = ?self.orientation,
            available = self.main(interior),
            extents = ?extents,
            "box layout recomputed"
        );

        let cross = self.cross(interior);
        for (child, extent) in self.children.iter().zip(extents) {
            child.borrow_mut().resize(self.make_size(extent, cross));
        }
    }

    /// Paint all children under per-child translation and clip scopes.
    fn draw_children(&self, painter: &mut dyn Painter) {
        let mut offset = 0;
        for child in &self.children {
            let child = child.borrow();
            let child_size = child.size();

            let (dx, dy) = match self.orientation {
                Orientation::Horizontal => (offset, 0),
                Orientation::Vertical => (0, offset),
            };
            let mut moved = painter.translated(dx, dy);

            // Historical inclusive-bound clipping: the view is one cell short
            // of the child's full size on each axis. Downstream rendering
            // depends on the inset, so it is reproduced rather than fixed.
            let clip = Rect::from_size(child_size.expanded(-1, -1).clamped());
            let mut clipped = moved.masked(clip);
            child.draw(&mut *clipped);

            offset += self.main(child_size);
        }
    }
}

impl Widget for BoxLayout {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    /// Sum of child minimums on the main axis, max on the cross axis.
    fn min_size_hint(&self) -> Size {
        self.aggregate_hint(|child| child.min_size_hint())
    }

    /// Sum of child preferred sizes on the main axis, max on the cross axis.
    fn size_hint(&self) -> Size {
        self.aggregate_hint(|child| child.size_hint())
    }

    fn resize(&mut self, size: Size) {
        self.base.set_size(size);
        self.layout_children();
    }

    fn draw(&self, painter: &mut dyn Painter) {
        let size = self.base.size();
        if self.border {
            painter.draw_rect(0, 0, size.width, size.height);

            // Title on the top edge, clipped to the band inset 2 cells from
            // each side.
            let band = Rect::new(2, 0, (size.width - 4).max(0), 1);
            painter.masked(band).draw_text(2, 0, &self.title);

            let mut inner = painter.translated(1, 1);
            self.draw_children(&mut *inner);
        } else {
            self.draw_children(painter);
        }
    }

    /// Broadcast to every child in order; the container consumes nothing.
    fn handle_event(&mut self, event: &Event) {
        for child in &self.children {
            child.borrow_mut().handle_event(event);
        }
    }
}
