//! The drawing surface contract and its stack discipline.
//!
//! Widgets never touch the terminal directly; they draw through a [`Painter`],
//! a stack-based 2D surface owned by the backend. Containers compose child
//! coordinate systems by pushing translations and clip masks, painting, and
//! popping — every push made during a `draw` call must be popped before that
//! call returns, or sibling and parent draws observe a corrupted transform.
//!
//! [`PainterExt::translated`] and [`PainterExt::masked`] wrap each push in a
//! [`PainterScope`] guard that pops on drop, so the discipline holds on every
//! exit path:
//!
//! ```ignore
//! let mut moved = painter.translated(0, 3);
//! child.draw(&mut *moved);
//! // scope dropped here: the translation is popped even if draw panicked
//! ```

use crate::geometry::Rect;

/// A stack-based 2D cell-drawing surface.
///
/// Coordinates are relative to the current origin, which starts at the
/// surface's top-left and moves with [`translate`](Painter::translate).
/// Drawing outside the current clip mask is silently dropped.
///
/// Implemented by terminal backends; this crate only consumes it (and ships
/// [`GridPainter`] for headless tests).
pub trait Painter {
    /// Draw a rectangle border with its top-left corner at `(x, y)`.
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32);

    /// Draw `text` starting at `(x, y)`, advancing one cell per column.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);

    /// Push a state, then move the origin by `(dx, dy)`.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Push a state, then clip drawing to `mask` (relative to the current
    /// origin), composed with any mask already in effect.
    fn push_mask(&mut self, mask: Rect);

    /// Pop the most recent [`translate`](Painter::translate) or
    /// [`push_mask`](Painter::push_mask).
    fn restore(&mut self);
}

/// Guard that pops one painter state when dropped.
///
/// Returned by [`PainterExt::translated`] and [`PainterExt::masked`]. Derefs
/// to the underlying painter, so scopes nest naturally.
pub struct PainterScope<'a, P: Painter + ?Sized> {
    painter: &'a mut P,
}

impl<P: Painter + ?Sized> Drop for PainterScope<'_, P> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

impl<P: Painter + ?Sized> std::ops::Deref for PainterScope<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter + ?Sized> std::ops::DerefMut for PainterScope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

/// Scoped push/pop helpers for any [`Painter`].
pub trait PainterExt: Painter {
    /// Push a translation, popped when the returned scope drops.
    fn translated(&mut self, dx: i32, dy: i32) -> PainterScope<'_, Self>;

    /// Push a clip mask, popped when the returned scope drops.
    fn masked(&mut self, mask: Rect) -> PainterScope<'_, Self>;
}

impl<P: Painter + ?Sized> PainterExt for P {
    fn translated(&mut self, dx: i32, dy: i32) -> PainterScope<'_, P> {
        self.translate(dx, dy);
        PainterScope { painter: self }
    }

    fn masked(&mut self, mask: Rect) -> PainterScope<'_, P> {
        self.push_mask(mask);
        PainterScope { painter: self }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use self::grid::GridPainter;

#[cfg(any(test, feature = "test-utils"))]
mod grid {
    use unicode_width::UnicodeWidthChar;

    use super::Painter;
    use crate::geometry::{Point, Rect};

    /// One saved origin/clip pair.
    #[derive(Debug, Clone, Copy)]
    struct State {
        /// Absolute origin on the grid.
        origin: Point,
        /// Absolute clip; drawing outside it is dropped.
        clip: Rect,
    }

    /// An in-memory character grid implementing [`Painter`].
    ///
    /// Renders widget trees without a terminal: tests resize a tree, draw it
    /// into a `GridPainter`, and assert on [`frame`](GridPainter::frame).
    /// The painter also exposes its [`stack_depth`](GridPainter::stack_depth)
    /// so tests can verify that draws leave the state stack balanced.
    #[derive(Debug)]
    pub struct GridPainter {
        width: i32,
        height: i32,
        cells: Vec<char>,
        state: State,
        stack: Vec<State>,
    }

    impl GridPainter {
        /// Create a blank grid of `width` x `height` space-filled cells.
        pub fn new(width: i32, height: i32) -> Self {
            let width = width.max(0);
            let height = height.max(0);
            Self {
                width,
                height,
                cells: vec![' '; (width * height) as usize],
                state: State {
                    origin: Point::ZERO,
                    clip: Rect::new(0, 0, width, height),
                },
                stack: Vec::new(),
            }
        }

        /// Number of unmatched pushes; zero after a well-behaved draw.
        pub fn stack_depth(&self) -> usize {
            self.stack.len()
        }

        /// The grid contents as one string per row.
        pub fn lines(&self) -> Vec<String> {
            (0..self.height)
                .map(|y| {
                    (0..self.width)
                        .map(|x| self.cells[(y * self.width + x) as usize])
                        .collect()
                })
                .collect()
        }

        /// The full frame with rows joined by newlines.
        pub fn frame(&self) -> String {
            self.lines().join("\n")
        }

        /// Set one cell, applying the current origin, clip, and screen bounds.
        fn put(&mut self, x: i32, y: i32, ch: char) {
            let cell = Point::new(x, y) + self.state.origin;
            if !self.state.clip.contains(cell) {
                return;
            }
            if cell.x < 0 || cell.x >= self.width || cell.y < 0 || cell.y >= self.height {
                return;
            }
            self.cells[(cell.y * self.width + cell.x) as usize] = ch;
        }
    }

    impl Painter for GridPainter {
        fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
            if width <= 0 || height <= 0 {
                return;
            }
            let (right, bottom) = (x + width - 1, y + height - 1);

            self.put(x, y, '┌');
            self.put(right, y, '┐');
            self.put(x, bottom, '└');
            self.put(right, bottom, '┘');
            for cx in x + 1..right {
                self.put(cx, y, '─');
                self.put(cx, bottom, '─');
            }
            for cy in y + 1..bottom {
                self.put(x, cy, '│');
                self.put(right, cy, '│');
            }
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str) {
            let mut cx = x;
            for ch in text.chars() {
                let advance = ch.width().unwrap_or(0) as i32;
                if advance == 0 {
                    continue;
                }
                self.put(cx, y, ch);
                // Wide glyphs occupy the following cell as well; leave it
                // blank rather than double-drawing.
                cx += advance;
            }
        }

        fn translate(&mut self, dx: i32, dy: i32) {
            self.stack.push(self.state);
            self.state.origin = self.state.origin + Point::new(dx, dy);
        }

        fn push_mask(&mut self, mask: Rect) {
            self.stack.push(self.state);
            let absolute = mask.translated(self.state.origin.x, self.state.origin.y);
            self.state.clip = self.state.clip.intersection(&absolute);
        }

        fn restore(&mut self) {
            if let Some(state) = self.stack.pop() {
                self.state = state;
            }
        }
    }
}
