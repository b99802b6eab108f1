//! Widget-tree tests: rendering, recursive layout, and event broadcast.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{Event, Key, KeyEvent};
use crate::focus::{FocusChain, KbFocusController, SimpleFocusChain};
use crate::geometry::Size;
use crate::layout::BoxLayout;
use crate::painter::{GridPainter, Painter};
use crate::widget::{widget_ref, SizePolicy, SizePolicyPair, Widget, WidgetBase, WidgetRef};

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A leaf with fixed hints that paints its text on its first row and a `#`
/// fill on its second, making clipping visible in rendered frames.
struct Label {
    base: WidgetBase,
    text: String,
    hint: Size,
}

impl Label {
    fn new(text: &str, hint: Size) -> Self {
        Self {
            base: WidgetBase::new(),
            text: text.to_string(),
            hint,
        }
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn min_size_hint(&self) -> Size {
        self.hint
    }

    fn size_hint(&self) -> Size {
        self.hint
    }

    fn draw(&self, painter: &mut dyn Painter) {
        painter.draw_text(0, 0, &self.text);
        painter.draw_text(0, 1, &"#".repeat(self.text.chars().count()));
    }
}

/// A leaf that appends its name to a shared log on every event.
struct Recorder {
    base: WidgetBase,
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Recorder {
    fn new(name: &'static str, log: Rc<RefCell<Vec<&'static str>>>) -> Self {
        Self {
            base: WidgetBase::new(),
            name,
            log,
        }
    }
}

impl Widget for Recorder {
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

    fn handle_event(&mut self, _event: &Event) {
        self.log.borrow_mut().push(self.name);
    }
}

#[test]
fn test_bordered_box_renders_title_and_children() {
    setup();

    let mut root = BoxLayout::vertical();
    root.set_border(true);
    root.set_title("log");
    root.append(widget_ref(Label::new("alpha", Size::new(5, 2))));
    root.append(widget_ref(Label::new("beta", Size::new(4, 2))));

    root.resize(Size::new(12, 6));
    let mut painter = GridPainter::new(12, 6);
    root.draw(&mut painter);

    // Each child's view is clipped one cell short of its size, so the `#`
    // fill rows stay hidden.
    assert_eq!(
        painter.lines(),
        vec![
            "┌─log──────┐".to_string(),
            "│alpha     │".to_string(),
            "│          │".to_string(),
            "│beta      │".to_string(),
            "│          │".to_string(),
            "└──────────┘".to_string(),
        ]
    );
    assert_eq!(painter.stack_depth(), 0);
}

#[test]
fn test_long_title_is_clipped_to_the_top_band() {
    let mut root = BoxLayout::horizontal();
    root.set_border(true);
    root.set_title("abcdefgh");

    root.resize(Size::new(8, 3));
    let mut painter = GridPainter::new(8, 3);
    root.draw(&mut painter);

    assert_eq!(painter.lines()[0], "┌─abcd─┐");
    assert_eq!(painter.stack_depth(), 0);
}

#[test]
fn test_horizontal_children_advance_along_the_main_axis() {
    let mut root = BoxLayout::horizontal();
    root.append(widget_ref(Label::new("one", Size::new(4, 2))));
    root.append(widget_ref(Label::new("two", Size::new(4, 2))));

    root.resize(Size::new(8, 2));
    let mut painter = GridPainter::new(8, 2);
    root.draw(&mut painter);

    assert_eq!(painter.lines()[0], "one two ");
    assert_eq!(painter.stack_depth(), 0);
}

#[test]
fn test_nested_boxes_resize_recursively() {
    setup();

    let deep = widget_ref(Label::new("x", Size::new(1, 1)));
    let mut inner = BoxLayout::vertical();
    inner.append(deep.clone());
    let inner = widget_ref(inner);

    let mut root = BoxLayout::horizontal();
    root.append(inner.clone());

    root.resize(Size::new(9, 4));
    assert_eq!(inner.borrow().size(), Size::new(9, 4));
    assert_eq!(deep.borrow().size(), Size::new(9, 4));
}

#[test]
fn test_broadcast_reaches_every_descendant_once_in_preorder() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let leaf = |name| widget_ref(Recorder::new(name, log.clone()));

    let mut inner = BoxLayout::vertical();
    inner.append(leaf("b"));
    inner.append(leaf("c"));

    let mut root = BoxLayout::horizontal();
    root.append(leaf("a"));
    root.append(widget_ref(inner));
    root.append(leaf("d"));

    root.handle_event(&Event::Key(KeyEvent::from_char('z')));
    assert_eq!(*log.borrow(), vec!["a", "b", "c", "d"]);

    // Every kind is forwarded the same way, including backend conditions.
    log.borrow_mut().clear();
    root.handle_event(&Event::Error);
    root.handle_event(&Event::Interrupt);
    assert_eq!(*log.borrow(), vec!["a", "b", "c", "d", "a", "b", "c", "d"]);
}

#[test]
fn test_root_wiring_broadcast_plus_focus_controller() {
    setup();

    let log = Rc::new(RefCell::new(Vec::new()));
    let first: WidgetRef = widget_ref(Recorder::new("first", log.clone()));
    let second: WidgetRef = widget_ref(Recorder::new("second", log.clone()));

    let mut root = BoxLayout::vertical();
    root.append(first.clone());
    root.append(second.clone());

    let mut chain = SimpleFocusChain::new();
    chain.set(vec![first.clone(), second.clone()]);
    let default = chain.focus_default().expect("chain is non-empty");
    default.borrow_mut().set_focused(true);
    let chain: Rc<RefCell<dyn FocusChain>> = Rc::new(RefCell::new(chain));
    let controller = KbFocusController::new(chain);

    // The composed root runs both paths over the same stream.
    let tab = Event::Key(KeyEvent::new(Key::Tab));
    root.handle_event(&tab);
    controller.handle_event(&tab);

    assert_eq!(*log.borrow(), vec!["first", "second"]);
    assert!(!first.borrow().is_focused());
    assert!(second.borrow().is_focused());
}

#[test]
fn test_expanding_leaf_fills_a_dashboard_column() {
    // A typical dashboard: fixed header, expanding body, fixed footer.
    struct Fixed(WidgetBase, Size);
    impl Widget for Fixed {
        fn widget_base(&self) -> &WidgetBase {
            &self.0
        }
        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.0
        }
        fn min_size_hint(&self) -> Size {
            self.1
        }
        fn size_hint(&self) -> Size {
            self.1
        }
        fn size_policy(&self) -> SizePolicyPair {
            SizePolicyPair::new(SizePolicy::Maximum, SizePolicy::Maximum)
        }
        fn draw(&self, _painter: &mut dyn Painter) {}
    }
    struct Body(WidgetBase);
    impl Widget for Body {
        fn widget_base(&self) -> &WidgetBase {
            &self.0
        }
        fn widget_base_mut(&mut self) -> &mut WidgetBase {
            &mut self.0
        }
        fn size_hint(&self) -> Size {
            Size::ZERO
        }
        fn size_policy(&self) -> SizePolicyPair {
            SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Expanding)
        }
        fn draw(&self, _painter: &mut dyn Painter) {}
    }

    let header = widget_ref(Fixed(WidgetBase::new(), Size::new(10, 1)));
    let body = widget_ref(Body(WidgetBase::new()));
    let footer = widget_ref(Fixed(WidgetBase::new(), Size::new(10, 1)));

    let mut column = BoxLayout::vertical();
    column.append(header.clone());
    column.append(body.clone());
    column.append(footer.clone());

    column.resize(Size::new(40, 24));
    assert_eq!(header.borrow().size(), Size::new(40, 1));
    assert_eq!(body.borrow().size(), Size::new(40, 22));
    assert_eq!(footer.borrow().size(), Size::new(40, 1));
}
