//! Blocking, pull-based decoder over a raw terminal byte source.
//!
//! The decoder reads one character at a time. Plain characters are looked up
//! in the single-character table; an escape character starts a sequence that
//! is accumulated until the first alphabetic character. Sequences whose
//! terminator is never alphabetic block the reader until the source closes.

use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pixedit_common::error::{PixeditError, Result};

use crate::event::{InputEvent, KeyEvent};
use crate::keys::{self, ESC};
use crate::mouse;

/// Shared flag that stops a [`Decoder`] at its next pull.
///
/// Cancelling does not interrupt a read that is already blocked; the decoder
/// notices the flag before it starts reading the next event.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Requests the decoder to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Returns true once [`CancelHandle::cancel`] has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Decodes a byte source into [`InputEvent`]s.
///
/// The iterator ends when the source reaches end of file, after an I/O
/// error, or once cancelled. Decode errors for single malformed sequences
/// are yielded and decoding continues with the following input.
#[derive(Debug)]
pub struct Decoder<R> {
    source: R,
    cancel: CancelHandle,
    finished: bool,
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder reading from `source`.
    pub fn new(source: R) -> Self {
        Self {
            source,
            cancel: CancelHandle::default(),
            finished: false,
        }
    }

    /// Returns a handle that can stop this decoder.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.source.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(PixeditError::Io {
                        path: PathBuf::from("<input>"),
                        source,
                    });
                }
            }
        }
    }

    /// Reads one UTF-8 encoded character.
    fn read_char(&mut self) -> Result<Option<char>> {
        let Some(first) = self.read_byte()? else {
            return Ok(None);
        };
        let width = match first {
            0x00..=0x7f => 1,
            0xc0..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf7 => 4,
            _ => {
                return Err(PixeditError::decode(format!(
                    "invalid UTF-8 lead byte 0x{first:02x}"
                )));
            }
        };
        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(width).skip(1) {
            *slot = self.read_byte()?.ok_or_else(|| {
                PixeditError::decode("input ended inside a UTF-8 character")
            })?;
        }
        std::str::from_utf8(&buf[..width])
            .map_err(|e| PixeditError::decode(format!("invalid UTF-8 input: {e}")))?
            .chars()
            .next()
            .map(Some)
            .ok_or_else(|| PixeditError::decode("empty UTF-8 character"))
    }

    fn next_event(&mut self) -> Result<Option<InputEvent>> {
        let Some(c) = self.read_char()? else {
            self.finished = true;
            return Ok(None);
        };
        if c != ESC {
            let key = keys::lookup_char(c)
                .map_or_else(|| KeyEvent::Literal(c.to_string()), KeyEvent::Named);
            return Ok(Some(InputEvent::Key(key)));
        }

        let mut sequence = String::from(ESC);
        loop {
            match self.read_char()? {
                Some(next) => {
                    sequence.push(next);
                    if next.is_alphabetic() {
                        break;
                    }
                }
                None => {
                    // hand out what arrived before the source closed
                    self.finished = true;
                    return Ok(Some(InputEvent::Key(KeyEvent::Literal(sequence))));
                }
            }
        }

        if mouse::is_mouse_report(&sequence) {
            return mouse::parse_mouse_report(&sequence).map(|ev| Some(InputEvent::Mouse(ev)));
        }
        let key = keys::lookup_sequence(&sequence)
            .map_or_else(|| KeyEvent::Literal(sequence), KeyEvent::Named);
        Ok(Some(InputEvent::Key(key)))
    }
}

impl<R: Read> Iterator for Decoder<R> {
    type Item = Result<InputEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.cancel.is_cancelled() {
            tracing::debug!("input decoder cancelled");
            self.finished = true;
            return None;
        }
        match self.next_event() {
            Ok(Some(event)) => {
                tracing::trace!(?event, "decoded input event");
                Some(Ok(event))
            }
            Ok(None) => {
                tracing::debug!("input source closed");
                None
            }
            Err(err @ PixeditError::Io { .. }) => {
                tracing::warn!(error = %err, "input source failed");
                self.finished = true;
                Some(Err(err))
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to decode input");
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Decoder<R> {}

/// Decodes an in-memory byte string to completion.
///
/// # Errors
///
/// Returns the first decode error encountered.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<InputEvent>> {
    Decoder::new(bytes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{MouseButton, MouseEvent, MouseKind, NamedKey};

    fn literal(text: &str) -> InputEvent {
        InputEvent::Key(KeyEvent::Literal(text.into()))
    }

    fn named(key: NamedKey) -> InputEvent {
        InputEvent::Key(KeyEvent::Named(key))
    }

    #[test]
    fn decodes_left_press() {
        let events = decode_all(b"\x1b[<0;10;5M").expect("should decode");
        assert_eq!(
            events,
            vec![InputEvent::Mouse(MouseEvent::new(
                MouseKind::Down,
                MouseButton::LEFT,
                10,
                5
            ))]
        );
    }

    #[test]
    fn decodes_left_drag() {
        let events = decode_all(b"\x1b[<32;10;5M").expect("should decode");
        assert_eq!(
            events,
            vec![InputEvent::Mouse(MouseEvent::new(
                MouseKind::Drag,
                MouseButton::LEFT,
                10,
                5
            ))]
        );
    }

    #[test]
    fn decodes_release_and_modifiers() {
        let events = decode_all(b"\x1b[<18;3;4m").expect("should decode");
        let Some(InputEvent::Mouse(ev)) = events.first() else {
            panic!("expected mouse event, got {events:?}");
        };
        assert_eq!(ev.kind, MouseKind::Up);
        assert!(ev.button.is_right());
        assert!(ev.button.ctrl());
    }

    #[test]
    fn decodes_named_keys_and_literals() {
        let events = decode_all(b"a\x7f\x1b[A\x1b[1;5C\x13\r").expect("should decode");
        assert_eq!(
            events,
            vec![
                literal("a"),
                named(NamedKey::Backspace),
                named(NamedKey::Up),
                named(NamedKey::CtrlRight),
                named(NamedKey::CtrlS),
                named(NamedKey::Enter),
            ]
        );
    }

    #[test]
    fn unknown_sequence_is_literal() {
        let events = decode_all(b"\x1b[H").expect("should decode");
        assert_eq!(events, vec![literal("\x1b[H")]);
    }

    #[test]
    fn multibyte_characters_are_single_events() {
        let events = decode_all("é→".as_bytes()).expect("should decode");
        assert_eq!(events, vec![literal("é"), literal("→")]);
    }

    #[test]
    fn malformed_mouse_report_is_an_error_and_decoding_continues() {
        let mut decoder = Decoder::new(&b"\x1b[<0;10Mx"[..]);
        assert!(matches!(
            decoder.next(),
            Some(Err(PixeditError::Decode { .. }))
        ));
        assert_eq!(decoder.next().map(|r| r.expect("literal")), Some(literal("x")));
        assert!(decoder.next().is_none());
    }

    #[test]
    fn partial_sequence_at_end_of_input_is_literal() {
        let mut decoder = Decoder::new(&b"\x1b[1;"[..]);
        assert_eq!(
            decoder.next().map(|r| r.expect("literal")),
            Some(literal("\x1b[1;"))
        );
        assert!(decoder.next().is_none());
        assert!(decoder.next().is_none());
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let result = decode_all(b"\xff");
        assert!(matches!(result, Err(PixeditError::Decode { .. })));
    }

    #[test]
    fn cancelled_decoder_stops_before_reading() {
        let mut decoder = Decoder::new(&b"abc"[..]);
        let handle = decoder.cancel_handle();
        assert_eq!(decoder.next().map(|r| r.expect("literal")), Some(literal("a")));
        handle.cancel();
        assert!(decoder.next().is_none());
        assert!(decoder.next().is_none());
    }

    #[test]
    fn io_errors_end_the_stream() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("gone"))
            }
        }
        let mut decoder = Decoder::new(Broken);
        assert!(matches!(decoder.next(), Some(Err(PixeditError::Io { .. }))));
        assert!(decoder.next().is_none());
    }
}
