//! Fixed lookup tables for named keys.
//!
//! Both tables are built once on first use and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::event::NamedKey;

/// The escape character that starts every multi-byte sequence.
pub const ESC: char = '\x1b';

static SINGLE_CHARS: LazyLock<HashMap<char, NamedKey>> = LazyLock::new(|| {
    HashMap::from([
        ('\x7f', NamedKey::Backspace),
        ('\r', NamedKey::Enter),
        ('\n', NamedKey::Enter),
        ('\x03', NamedKey::CtrlC),
        ('\x11', NamedKey::CtrlQ),
        ('\x05', NamedKey::CtrlE),
        ('\x13', NamedKey::CtrlS),
    ])
});

static SEQUENCES: LazyLock<HashMap<&'static str, NamedKey>> = LazyLock::new(|| {
    HashMap::from([
        ("\x1b[A", NamedKey::Up),
        ("\x1b[B", NamedKey::Down),
        ("\x1b[C", NamedKey::Right),
        ("\x1b[D", NamedKey::Left),
        ("\x1b[1;5A", NamedKey::CtrlUp),
        ("\x1b[1;5B", NamedKey::CtrlDown),
        ("\x1b[1;5C", NamedKey::CtrlRight),
        ("\x1b[1;5D", NamedKey::CtrlLeft),
    ])
});

/// Looks up a single non-escape character.
#[must_use]
pub fn lookup_char(c: char) -> Option<NamedKey> {
    SINGLE_CHARS.get(&c).copied()
}

/// Looks up a complete escape sequence, `ESC` included.
#[must_use]
pub fn lookup_sequence(sequence: &str) -> Option<NamedKey> {
    SEQUENCES.get(sequence).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_chars_are_named() {
        assert_eq!(lookup_char('\x7f'), Some(NamedKey::Backspace));
        assert_eq!(lookup_char('\x13'), Some(NamedKey::CtrlS));
        assert_eq!(lookup_char('a'), None);
    }

    #[test]
    fn sequences_need_exact_match() {
        assert_eq!(lookup_sequence("\x1b[1;5D"), Some(NamedKey::CtrlLeft));
        assert_eq!(lookup_sequence("\x1b[1;2D"), None);
        assert_eq!(lookup_sequence("[A"), None);
    }
}
