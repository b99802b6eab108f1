//! Keyboard focus: the chain of focusable widgets and its Tab controller.
//!
//! A [`FocusChain`] is an ordered registry of focusable widgets with circular
//! next/previous traversal; at most one registered widget holds focus when
//! driven through the chain. The [`KbFocusController`] binds the Tab/Backtab
//! gesture to chain transitions and is wired into the same event stream the
//! root container broadcasts.
//!
//! There is deliberately no process-wide default chain: each UI instance
//! constructs its own [`SimpleFocusChain`] and threads it into the widgets
//! that need it.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use weft::focus::{FocusChain, KbFocusController, SimpleFocusChain};
//! use weft::widget::{widget_ref, Spacer, Widget};
//!
//! let first = widget_ref(Spacer::new());
//! let second = widget_ref(Spacer::new());
//! first.borrow_mut().set_focused(true);
//!
//! let mut chain = SimpleFocusChain::new();
//! chain.set(vec![first.clone(), second.clone()]);
//! let chain = Rc::new(RefCell::new(chain));
//!
//! let controller = KbFocusController::new(chain.clone());
//! // controller.handle_event(&tab_event) now advances the chain.
//! # let _ = controller;
//! assert!(chain.borrow_mut().focus_next().is_some());
//! assert!(second.borrow().is_focused());
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::event::{Event, Key};
use crate::widget::WidgetRef;

/// An ordered registry of focusable widgets with circular traversal.
pub trait FocusChain {
    /// Move focus from the currently focused widget to its successor,
    /// wrapping past the end. Returns the newly focused widget, or `None`
    /// when no registered widget was focused (focus stays unset).
    fn focus_next(&mut self) -> Option<WidgetRef>;

    /// Move focus to the predecessor, wrapping before the start. Same
    /// `None` semantics as [`focus_next`](FocusChain::focus_next).
    fn focus_prev(&mut self) -> Option<WidgetRef>;

    /// The widget that should receive focus initially: the first registered
    /// widget. Does not mutate any focus state. `None` on an empty registry.
    fn focus_default(&self) -> Option<WidgetRef>;
}

/// The standard [`FocusChain`]: traversal order is registration order.
#[derive(Default)]
pub struct SimpleFocusChain {
    widgets: Vec<WidgetRef>,
}

impl SimpleFocusChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the registry wholesale.
    ///
    /// Widgets' current focus flags are left untouched; callers seed focus by
    /// setting a flag directly (typically on
    /// [`focus_default`](FocusChain::focus_default)).
    pub fn set(&mut self, widgets: Vec<WidgetRef>) {
        self.widgets = widgets;
    }

    /// Index of the currently focused widget, if any.
    fn focused_index(&self) -> Option<usize> {
        self.widgets.iter().position(|w| w.borrow().is_focused())
    }

    /// Shift focus from the focused widget to the one at `to`.
    fn shift_focus(&mut self, from: usize, to: usize) -> WidgetRef {
        self.widgets[from].borrow_mut().set_focused(false);
        let next = self.widgets[to].clone();
        next.borrow_mut().set_focused(true);
        trace!(target: "weft::focus", from, to, "focus moved");
        next
    }
}

impl FocusChain for SimpleFocusChain {
    fn focus_next(&mut self) -> Option<WidgetRef> {
        let current = self.focused_index()?;
        let next = (current + 1) % self.widgets.len();
        Some(self.shift_focus(current, next))
    }

    fn focus_prev(&mut self) -> Option<WidgetRef> {
        let current = self.focused_index()?;
        let prev = if current == 0 {
            self.widgets.len() - 1
        } else {
            current - 1
        };
        Some(self.shift_focus(current, prev))
    }

    fn focus_default(&self) -> Option<WidgetRef> {
        self.widgets.first().cloned()
    }
}

/// Stateless adapter from keyboard events to focus-chain transitions.
///
/// Tab advances the chain, Backtab (Shift+Tab) retreats; everything else is
/// ignored. The chain reference is fixed at construction; a controller built
/// with [`detached`](KbFocusController::detached) is a no-op.
pub struct KbFocusController {
    chain: Option<Rc<RefCell<dyn FocusChain>>>,
}

impl KbFocusController {
    /// Create a controller driving `chain`.
    pub fn new(chain: Rc<RefCell<dyn FocusChain>>) -> Self {
        Self { chain: Some(chain) }
    }

    /// Create a controller with no chain; events are ignored.
    pub fn detached() -> Self {
        Self { chain: None }
    }

    /// Inspect one event from the stream and drive the chain on Tab/Backtab.
    pub fn handle_event(&self, event: &Event) {
        let Some(chain) = &self.chain else {
            return;
        };
        let Event::Key(key_event) = event else {
            return;
        };
        match key_event.key {
            Key::Tab => {
                chain.borrow_mut().focus_next();
            }
            Key::Backtab => {
                chain.borrow_mut().focus_prev();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::KeyEvent;
    use crate::geometry::Size;
    use crate::painter::Painter;
    use crate::widget::{widget_ref, Widget, WidgetBase};

    struct Stub {
        base: WidgetBase,
    }

    impl Stub {
        fn new() -> Self {
            Self {
                base: WidgetBase::new(),
            }
        }
    }

    impl Widget for Stub {
        fn widget_base(&self) -> &WidgetBase {
            &self.base
        }

        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.base
        }

        fn size_hint(&self) -> Size {
            Size::new(1, 1)
        }

        fn draw(&self, _painter: &mut dyn Painter) {}
    }

    fn chain_of(n: usize) -> (SimpleFocusChain, Vec<WidgetRef>) {
        let widgets: Vec<WidgetRef> = (0..n).map(|_| widget_ref(Stub::new())).collect();
        let mut chain = SimpleFocusChain::new();
        chain.set(widgets.clone());
        (chain, widgets)
    }

    fn focused_index(widgets: &[WidgetRef]) -> Option<usize> {
        widgets.iter().position(|w| w.borrow().is_focused())
    }

    #[test]
    fn test_focus_next_wraps_around() {
        let (mut chain, widgets) = chain_of(3);
        widgets[1].borrow_mut().set_focused(true);

        assert!(chain.focus_next().is_some());
        assert_eq!(focused_index(&widgets), Some(2));
        assert!(chain.focus_next().is_some());
        assert_eq!(focused_index(&widgets), Some(0));
        assert!(chain.focus_next().is_some());
        assert_eq!(focused_index(&widgets), Some(1));
    }

    #[test]
    fn test_focus_prev_inverts_next() {
        let (mut chain, widgets) = chain_of(4);
        widgets[0].borrow_mut().set_focused(true);

        for _ in 0..4 {
            chain.focus_next();
        }
        assert_eq!(focused_index(&widgets), Some(0));

        chain.focus_prev();
        assert_eq!(focused_index(&widgets), Some(3));
        chain.focus_prev();
        assert_eq!(focused_index(&widgets), Some(2));
    }

    #[test]
    fn test_exactly_one_widget_focused() {
        let (mut chain, widgets) = chain_of(4);
        widgets[2].borrow_mut().set_focused(true);

        for _ in 0..9 {
            chain.focus_next();
            let focused = widgets
                .iter()
                .filter(|w| w.borrow().is_focused())
                .count();
            assert_eq!(focused, 1);
        }
    }

    #[test]
    fn test_unfocused_chain_yields_none() {
        let (mut chain, widgets) = chain_of(4);

        // No widget focused: default is widget 0, but nothing is mutated.
        let default = chain.focus_default().unwrap();
        assert!(Rc::ptr_eq(&default, &widgets[0]));
        assert_eq!(focused_index(&widgets), None);

        // And traversal has nothing to move from.
        assert!(chain.focus_next().is_none());
        assert!(chain.focus_prev().is_none());
        assert_eq!(focused_index(&widgets), None);
    }

    #[test]
    fn test_empty_chain_has_no_default() {
        let chain = SimpleFocusChain::new();
        assert!(chain.focus_default().is_none());
    }

    #[test]
    fn test_controller_drives_chain_on_tab() {
        let (chain, widgets) = chain_of(2);
        widgets[0].borrow_mut().set_focused(true);
        let chain: Rc<RefCell<dyn FocusChain>> = Rc::new(RefCell::new(chain));
        let controller = KbFocusController::new(chain);

        controller.handle_event(&Event::Key(KeyEvent::new(Key::Tab)));
        assert_eq!(focused_index(&widgets), Some(1));

        controller.handle_event(&Event::Key(KeyEvent::new(Key::Backtab)));
        assert_eq!(focused_index(&widgets), Some(0));

        // Unrelated events leave focus alone.
        controller.handle_event(&Event::Key(KeyEvent::new(Key::Enter)));
        controller.handle_event(&Event::Resize);
        assert_eq!(focused_index(&widgets), Some(0));
    }

    #[test]
    fn test_detached_controller_is_noop() {
        let controller = KbFocusController::detached();
        controller.handle_event(&Event::Key(KeyEvent::new(Key::Tab)));
    }
}
