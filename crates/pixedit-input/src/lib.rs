//! # pixedit-input
//!
//! Terminal input decoding for the pixel editor.
//!
//! Handles:
//! - **Event**: the typed key and mouse events produced by decoding.
//! - **Keys**: immutable lookup tables for named control keys and sequences.
//! - **Mouse**: parsing of SGR mouse reports (`ESC [ < B ; X ; Y M|m`).
//! - **Decoder**: a blocking, pull-based iterator over a raw byte source.

pub mod decoder;
pub mod event;
pub mod keys;
pub mod mouse;

pub use decoder::{CancelHandle, Decoder, decode_all};
pub use event::{InputEvent, KeyEvent, MouseButton, MouseEvent, MouseKind, NamedKey};
