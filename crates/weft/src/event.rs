//! Input and system events broadcast through the widget tree.
//!
//! Events form the wire vocabulary between a terminal input decoder (outside
//! this crate) and the widget tree. Each event kind is a variant of the
//! closed [`Event`] sum type, so an event can never carry a payload that
//! disagrees with its kind.
//!
//! Decoding raw terminal byte streams into these events is the backend's job;
//! this crate only broadcasts them (see [`crate::layout::BoxLayout`] and
//! [`crate::focus::KbFocusController`]).

use std::ops::BitOr;

use crate::geometry::Point;

/// Keyboard modifiers that may be held during a key event.
///
/// Each flag is independent, so modifiers combine freely:
///
/// ```
/// use weft::event::Modifiers;
///
/// let mods = Modifiers::CTRL | Modifiers::SHIFT;
/// assert!(mods.ctrl && mods.shift && !mods.alt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held.
    pub ctrl: bool,
    /// The Alt key is held.
    pub alt: bool,
    /// The Meta/Super key is held.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Shift only.
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Control only.
    pub const CTRL: Self = Self {
        shift: false,
        ctrl: true,
        alt: false,
        meta: false,
    };

    /// Alt only.
    pub const ALT: Self = Self {
        shift: false,
        ctrl: false,
        alt: true,
        meta: false,
    };

    /// Meta only.
    pub const META: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: true,
    };

    /// Check if any modifier is pressed.
    #[inline]
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }

    /// Check if no modifiers are pressed.
    #[inline]
    pub fn none(self) -> bool {
        !self.any()
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Modifiers) -> Modifiers {
        Modifiers {
            shift: self.shift || rhs.shift,
            ctrl: self.ctrl || rhs.ctrl,
            alt: self.alt || rhs.alt,
            meta: self.meta || rhs.meta,
        }
    }
}

/// A decoded key.
///
/// Printable characters arrive as [`Key::Unknown`] with the character in
/// [`KeyEvent::ch`]; named keys use the dedicated variants. `Backspace` and
/// `Backspace2` are distinct because terminals disagree on whether the key
/// sends BS (0x08) or DEL (0x7f).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Key {
    #[default]
    Unknown,
    Enter,
    Space,
    Tab,
    /// Shift+Tab as reported by the terminal (CSI Z).
    Backtab,
    Esc,
    Backspace,
    /// The DEL (0x7f) form of backspace.
    Backspace2,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Payload of a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// The decoded key.
    pub key: Key,
    /// The literal character, when the key produced one.
    pub ch: Option<char>,
    /// Modifiers held when the key was pressed.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key event with no character and no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ch: None,
            modifiers: Modifiers::NONE,
        }
    }

    /// A key event for a literal character.
    pub fn from_char(ch: char) -> Self {
        Self {
            key: Key::Unknown,
            ch: Some(ch),
            modifiers: Modifiers::NONE,
        }
    }

    /// Attach modifiers (builder pattern).
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Payload of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    /// Cell position of the pointer.
    pub pos: Point,
}

/// An input or system event observed by the widget tree.
///
/// `Resize`, `Error`, `Interrupt` and `Raw` carry backend-specific payloads
/// at the terminal layer; within the tree they are bare tags that widgets
/// react to (or ignore). The tree itself gives `Error`/`Interrupt` no special
/// treatment — they are broadcast like any other event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Event {
    /// A key press.
    Key(KeyEvent),
    /// The terminal was resized; the owner re-`resize`s the root.
    Resize,
    /// A mouse event at a cell position.
    Mouse(MouseEvent),
    /// The backend reported an abnormal condition.
    Error,
    /// The backend was interrupted.
    Interrupt,
    /// An undecoded raw event.
    Raw,
    /// No event (poll timeout).
    #[default]
    None,
}
