//! Semantic input events.
//!
//! These are plain data: the decoder produces them and the host routes them.

use std::fmt;

/// One decoded unit of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A keystroke or named control sequence.
    Key(KeyEvent),
    /// A mouse button press, release or drag.
    Mouse(MouseEvent),
}

/// A decoded keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// A key found in one of the fixed lookup tables.
    Named(NamedKey),
    /// Anything else: a single character, or a raw escape sequence that did
    /// not match a known entry.
    Literal(String),
}

impl KeyEvent {
    /// Returns the literal text if this is a single printable character.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Literal(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => Some(c),
                    _ => None,
                }
            }
            Self::Named(_) => None,
        }
    }
}

/// Control keys recognised by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow right.
    Right,
    /// Arrow left.
    Left,
    /// Backspace (DEL).
    Backspace,
    /// Enter / return.
    Enter,
    /// Ctrl+C.
    CtrlC,
    /// Ctrl+Q.
    CtrlQ,
    /// Ctrl+E.
    CtrlE,
    /// Ctrl+S.
    CtrlS,
    /// Ctrl+arrow up.
    CtrlUp,
    /// Ctrl+arrow down.
    CtrlDown,
    /// Ctrl+arrow right.
    CtrlRight,
    /// Ctrl+arrow left.
    CtrlLeft,
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
            Self::Backspace => "backspace",
            Self::Enter => "enter",
            Self::CtrlC => "ctrl-c",
            Self::CtrlQ => "ctrl-q",
            Self::CtrlE => "ctrl-e",
            Self::CtrlS => "ctrl-s",
            Self::CtrlUp => "ctrl-up",
            Self::CtrlDown => "ctrl-down",
            Self::CtrlRight => "ctrl-right",
            Self::CtrlLeft => "ctrl-left",
        };
        f.write_str(name)
    }
}

/// What happened to the mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// Button pressed.
    Down,
    /// Button released.
    Up,
    /// Pointer moved while a button is held. Never sent directly by the
    /// terminal; derived from the drag bit of the button code.
    Drag,
}

/// A mouse button code with its modifier bits, drag bit already removed.
///
/// The low two bits select the button (0 left, 1 middle, 2 right), bits
/// 4/8/16 flag shift/alt/ctrl and bit 64 marks the scroll wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButton(u8);

impl MouseButton {
    /// Left button.
    pub const LEFT: Self = Self(0);
    /// Middle button.
    pub const MIDDLE: Self = Self(1);
    /// Right button.
    pub const RIGHT: Self = Self(2);
    /// Wheel scrolled up.
    pub const SCROLL_UP: Self = Self(64);
    /// Wheel scrolled down.
    pub const SCROLL_DOWN: Self = Self(65);

    /// Shift modifier bit.
    pub const SHIFT_BIT: u8 = 4;
    /// Alt (meta) modifier bit.
    pub const ALT_BIT: u8 = 8;
    /// Ctrl modifier bit.
    pub const CTRL_BIT: u8 = 16;
    /// Drag bit, only present on the wire.
    pub const DRAG_BIT: u8 = 32;
    /// Scroll wheel bit.
    pub const SCROLL_BIT: u8 = 64;

    const MODIFIER_MASK: u8 = Self::SHIFT_BIT | Self::ALT_BIT | Self::CTRL_BIT;

    /// Wraps a raw button code.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    /// Returns the raw button code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns the same button with the given modifier bits set.
    #[must_use]
    pub const fn with(self, bits: u8) -> Self {
        Self(self.0 | bits)
    }

    /// Returns the button with shift/alt/ctrl cleared.
    #[must_use]
    pub const fn without_modifiers(self) -> Self {
        Self(self.0 & !Self::MODIFIER_MASK)
    }

    const fn base(self) -> Option<u8> {
        if self.is_scroll() {
            None
        } else {
            Some(self.0 & 3)
        }
    }

    /// True for the left button with any modifiers.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self.base(), Some(0))
    }

    /// True for the middle button with any modifiers.
    #[must_use]
    pub const fn is_middle(self) -> bool {
        matches!(self.base(), Some(1))
    }

    /// True for the right button with any modifiers.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self.base(), Some(2))
    }

    /// True for any scroll wheel event.
    #[must_use]
    pub const fn is_scroll(self) -> bool {
        self.0 & Self::SCROLL_BIT != 0
    }

    /// True if shift was held.
    #[must_use]
    pub const fn shift(self) -> bool {
        self.0 & Self::SHIFT_BIT != 0
    }

    /// True if alt was held.
    #[must_use]
    pub const fn alt(self) -> bool {
        self.0 & Self::ALT_BIT != 0
    }

    /// True if ctrl was held.
    #[must_use]
    pub const fn ctrl(self) -> bool {
        self.0 & Self::CTRL_BIT != 0
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::SCROLL_UP.with(self.0 & Self::MODIFIER_MASK) {
            return write!(f, "scroll-up({})", self.0);
        }
        if *self == Self::SCROLL_DOWN.with(self.0 & Self::MODIFIER_MASK) {
            return write!(f, "scroll-down({})", self.0);
        }
        let mut name = String::new();
        if self.ctrl() {
            name.push_str("ctrl-");
        }
        if self.alt() {
            name.push_str("alt-");
        }
        if self.shift() {
            name.push_str("shift-");
        }
        name.push_str(match self.base() {
            Some(0) => "left",
            Some(1) => "middle",
            Some(2) => "right",
            _ => "other",
        });
        f.write_str(&name)
    }
}

/// A decoded mouse report. Coordinates are 1-based terminal column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Press, release or drag.
    pub kind: MouseKind,
    /// Button and modifiers.
    pub button: MouseButton,
    /// Terminal column, starting at 1.
    pub x: u16,
    /// Terminal row, starting at 1.
    pub y: u16,
}

impl MouseEvent {
    /// Creates a mouse event.
    #[must_use]
    pub const fn new(kind: MouseKind, button: MouseButton, x: u16, y: u16) -> Self {
        Self { kind, button, x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_classification_ignores_modifiers() {
        let ctrl_right = MouseButton::RIGHT.with(MouseButton::CTRL_BIT);
        assert!(ctrl_right.is_right());
        assert!(ctrl_right.ctrl());
        assert!(!ctrl_right.alt());
        assert_eq!(ctrl_right.without_modifiers(), MouseButton::RIGHT);
    }

    #[test]
    fn scroll_is_not_a_button() {
        assert!(MouseButton::SCROLL_UP.is_scroll());
        assert!(!MouseButton::SCROLL_UP.is_left());
        assert!(!MouseButton::SCROLL_DOWN.is_middle());
    }

    #[test]
    fn button_display_names_modifiers() {
        let button = MouseButton::LEFT.with(MouseButton::ALT_BIT | MouseButton::SHIFT_BIT);
        assert_eq!(button.to_string(), "alt-shift-left");
        assert_eq!(MouseButton::SCROLL_DOWN.to_string(), "scroll-down(65)");
    }

    #[test]
    fn as_char_only_for_single_printable() {
        assert_eq!(KeyEvent::Literal("q".into()).as_char(), Some('q'));
        assert_eq!(KeyEvent::Literal("\x1b[H".into()).as_char(), None);
        assert_eq!(KeyEvent::Literal("\t".into()).as_char(), None);
        assert_eq!(KeyEvent::Named(NamedKey::Up).as_char(), None);
    }
}
