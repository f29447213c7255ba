//! # pixedit-tui
//!
//! Terminal front end of the pixel editor.
//!
//! Built with `crossterm` for terminal control and `ratatui` layout
//! geometry, providing:
//! - Terminal-mode guard (raw mode, SGR mouse tracking, alternate screen).
//! - A buffered painter for positioned, colored text.
//! - Movable, resizable widgets: draw area, toolbox, palette, color adjuster.
//! - A `:` command line and the main event loop.

pub mod app;
pub mod command;
pub mod editor;
pub mod painter;
pub mod terminal;
pub mod widget;
pub mod widgets;

pub use app::App;
pub use editor::Editor;
pub use terminal::TerminalGuard;
