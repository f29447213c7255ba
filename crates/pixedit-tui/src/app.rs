//! The editor application: screen layout, input routing and commands.
//!
//! Widgets are stacked in a fixed order (draw area, palette, toolbox, color
//! adjuster) and numbered accordingly; later widgets are drawn on top and
//! see mouse events first. All drawing goes through one [`Painter`] whose
//! output is flushed after every input event.

use std::cell::Cell;
use std::io::{Read, Write};
use std::rc::Rc;

use pixedit_canvas::PixelGrid;
use pixedit_common::color;
use pixedit_common::config::EditorConfig;
use pixedit_common::constants::APP_NAME;
use pixedit_common::error::{PixeditError, Result};
use pixedit_input::{Decoder, InputEvent, KeyEvent, MouseEvent, MouseKind, NamedKey};

use crate::command::{self, Command, CommandError};
use crate::editor::Editor;
use crate::painter::{self, Painter};
use crate::terminal;
use crate::widget::{Direction, Widget};
use crate::widgets::{ColorAdjuster, DrawArea, Palette, Toolbox};

/// Column where the draw area, title and status line start.
const MARGIN_LEFT: u16 = 3;
/// Row of the first canvas pixel.
const CANVAS_TOP: u16 = 3;
const TOOLBOX_WIDTH: u16 = 10;
const PALETTE_COLUMNS: u16 = 16;
const PALETTE_ROWS: u16 = 2;

const KEYBINDINGS: &[(&str, &str)] = &[
    ("middle click", "pick a color"),
    ("ctrl-s", "save"),
    (":  OR  ctrl-e", "open command line"),
    ("r", "force redraw"),
    ("0-9", "select widget; arrows move it, ctrl-arrows resize it"),
    ("q", "exit without saving"),
    ("?", "show this help"),
];

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// The running editor, writing its screen to `W`.
pub struct App<W: Write> {
    editor: Editor,
    draw_area: DrawArea,
    palette: Palette,
    toolbox: Toolbox,
    adjuster: ColorAdjuster,
    painter: Painter,
    out: W,
    /// Terminal `(columns, rows)`.
    size: (u16, u16),
    /// Re-query the terminal size on redraw.
    live_size: bool,
    command_line: Option<String>,
    status: String,
    help_shown: bool,
    running: bool,
    colors_changed: Rc<Cell<bool>>,
}

impl<W: Write> App<W> {
    /// Lays out the editor for `grid` on a terminal of `size` columns and
    /// rows.
    pub fn new(config: &EditorConfig, grid: PixelGrid, out: W, size: (u16, u16)) -> Self {
        let mut editor = Editor::new(grid, config);
        let colors_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&colors_changed);
        editor.colors.add_listener(move |_, _, _| flag.set(true));

        let canvas_width = to_u16(editor.grid.width().saturating_mul(2));
        let canvas_height = to_u16(editor.grid.height());
        let side = MARGIN_LEFT.saturating_add(canvas_width).saturating_add(3);

        let draw_area = DrawArea::new(MARGIN_LEFT, CANVAS_TOP, &editor.grid);
        let palette = Palette::new(
            MARGIN_LEFT,
            CANVAS_TOP.saturating_add(canvas_height).saturating_add(2),
            PALETTE_COLUMNS,
            PALETTE_ROWS,
            config.palette.clone(),
        );
        let toolbox = Toolbox::new(side, CANVAS_TOP, TOOLBOX_WIDTH);
        let adjuster_top = toolbox.frame().area.bottom().saturating_add(2);
        let adjuster = ColorAdjuster::new(side, adjuster_top, config.adjust_step);

        let mut app = Self {
            editor,
            draw_area,
            palette,
            toolbox,
            adjuster,
            painter: Painter::new(),
            out,
            size,
            live_size: false,
            command_line: None,
            status: String::new(),
            help_shown: false,
            running: true,
            colors_changed,
        };
        for (index, widget) in app.widgets_mut().into_iter().enumerate() {
            widget.frame_mut().title = Some(index.to_string());
        }
        app
    }

    /// Follows the real terminal size on every full redraw.
    #[must_use]
    pub fn with_live_size(mut self) -> Self {
        self.live_size = true;
        self
    }

    /// The document and selections.
    #[must_use]
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    /// False once the user asked to quit.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Last message shown in the status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The command being typed, if the command line is open.
    #[must_use]
    pub fn command_line(&self) -> Option<&str> {
        self.command_line.as_deref()
    }

    /// The output sink.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    fn widgets_mut(&mut self) -> [&mut dyn Widget; 4] {
        [
            &mut self.draw_area,
            &mut self.palette,
            &mut self.toolbox,
            &mut self.adjuster,
        ]
    }

    /// Draws the first frame, then handles input until the user quits or
    /// the source ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source or the terminal fails. Decode
    /// errors and failed commands are reported in the status line instead.
    pub fn run<R: Read>(&mut self, input: Decoder<R>) -> Result<()> {
        self.full_redraw();
        self.flush()?;
        for event in input {
            match event {
                Ok(event) => self.handle(event),
                Err(err @ PixeditError::Io { .. }) => return Err(err),
                Err(err) => self.show(&format!("Error: {err}")),
            }
            self.flush()?;
            if !self.running {
                break;
            }
        }
        tracing::info!("editor loop finished");
        Ok(())
    }

    /// Writes everything drawn so far to the output.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if writing fails.
    pub fn flush(&mut self) -> Result<()> {
        let bytes = self.painter.take();
        if bytes.is_empty() {
            return Ok(());
        }
        self.out.write_all(&bytes).map_err(terminal::terminal_error)?;
        self.out.flush().map_err(terminal::terminal_error)
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: InputEvent) {
        if self.help_shown {
            // any input dismisses the help screen
            self.help_shown = false;
            self.full_redraw();
            return;
        }
        match event {
            InputEvent::Mouse(ev) => self.handle_mouse(&ev),
            InputEvent::Key(key) => self.handle_key(&key),
        }
        if self.colors_changed.replace(false) {
            self.adjuster.render(&self.editor, &mut self.painter);
        }
    }

    fn handle_mouse(&mut self, ev: &MouseEvent) {
        let routed = self.route_mouse(ev);
        if ev.kind == MouseKind::Up {
            // the release may land outside the draw area
            self.editor.tools.reset_current();
            self.render_widgets();
        }
        if let Err(err) = routed {
            self.show(&format!("Error: {err}"));
        }
    }

    fn route_mouse(&mut self, ev: &MouseEvent) -> Result<()> {
        let Self {
            editor,
            draw_area,
            palette,
            toolbox,
            adjuster,
            painter,
            ..
        } = self;
        if draw_area.is_capturing() && ev.kind != MouseKind::Down {
            let _ = draw_area.on_mouse(ev, editor, painter)?;
            return Ok(());
        }
        let stack: [&mut dyn Widget; 4] = [draw_area, palette, toolbox, adjuster];
        for widget in stack.into_iter().rev() {
            if widget.contains(ev.x, ev.y) && widget.on_mouse(ev, editor, painter)? {
                tracing::trace!(widget = widget.name(), ?ev, "mouse event consumed");
                break;
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if self.command_line.is_some() {
            self.edit_command_line(key);
            return;
        }
        match (key, key.as_char()) {
            (KeyEvent::Named(NamedKey::CtrlQ | NamedKey::CtrlC), _) | (_, Some('q')) => self.quit(),
            (KeyEvent::Named(NamedKey::CtrlE), _) | (_, Some(':')) => {
                self.command_line = Some(String::from(":"));
                self.show(":");
            }
            (_, Some('?')) => self.show_help(),
            (_, Some('r')) => self.full_redraw(),
            (_, Some(digit @ '0'..='9')) => {
                let index = digit.to_digit(10).unwrap_or_default() as usize;
                let toggled = match self.widgets_mut().into_iter().nth(index) {
                    Some(widget) => {
                        widget.toggle_selected();
                        true
                    }
                    None => false,
                };
                if toggled {
                    self.full_redraw();
                }
            }
            (KeyEvent::Named(NamedKey::CtrlS), _) => {
                if let Err(err) = self.run_command(Command::Save(None)) {
                    self.show(&format!("Error: {err}"));
                }
            }
            (KeyEvent::Named(named), _) => {
                if let Some(direction) = arrow(*named) {
                    self.move_selected(direction);
                } else if let Some(direction) = ctrl_arrow(*named) {
                    self.resize_selected(direction);
                } else {
                    tracing::debug!(key = %named, "unbound key");
                }
            }
            (KeyEvent::Literal(text), _) => tracing::debug!(?text, "unbound key"),
        }
    }

    fn edit_command_line(&mut self, key: &KeyEvent) {
        let Some(line) = self.command_line.as_mut() else {
            return;
        };
        match key {
            KeyEvent::Named(NamedKey::Backspace) => {
                let _ = line.pop();
                let shown = line.clone();
                if shown.is_empty() {
                    self.command_line = None;
                }
                self.show(&shown);
            }
            KeyEvent::Named(NamedKey::Enter) => {
                let line = std::mem::take(line);
                self.command_line = None;
                self.execute(&line);
            }
            _ => {
                if let Some(c) = key.as_char() {
                    line.push(c);
                    let shown = line.clone();
                    self.show(&shown);
                }
            }
        }
    }

    /// Parses and runs one command line, reporting problems in the status
    /// line.
    pub fn execute(&mut self, line: &str) {
        tracing::debug!(line, "command");
        match Command::parse(line) {
            Ok(cmd) => {
                if let Err(err) = self.run_command(cmd) {
                    self.show(&format!("Error: {err}"));
                }
            }
            Err(err @ CommandError::Unknown(_)) => self.show(&err.to_string()),
            Err(err) => self.show(&format!("Error: {err}")),
        }
    }

    fn run_command(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Help => self.show_help(),
            Command::Quit => self.quit(),
            Command::New { width, height } => {
                if width == 0 || height == 0 {
                    return Err(PixeditError::validation(format!(
                        "image size must be positive, got {width}x{height}"
                    )));
                }
                self.editor.replace_grid(PixelGrid::new(width, height));
                tracing::info!(width, height, "new image");
                self.document_changed();
            }
            Command::Open(path) => {
                self.editor.open(&path)?;
                self.document_changed();
            }
            Command::Save(path) => {
                let saved = self.editor.save(path.as_deref())?;
                self.show(&format!("Saved image as {}", saved.display()));
            }
            Command::Crop { x0, y0, x1, y1 } => {
                self.editor.crop(x0, y0, x1, y1)?;
                self.document_changed();
            }
            Command::Tool(kind) => {
                self.editor.tools.select(kind);
                self.toolbox.render(&self.editor, &mut self.painter);
            }
        }
        Ok(())
    }

    fn document_changed(&mut self) {
        self.draw_area.fit(&self.editor.grid);
        self.full_redraw();
    }

    fn move_selected(&mut self, direction: Direction) {
        for widget in self.widgets_mut() {
            if widget.frame().selected {
                widget.move_by(direction);
            }
        }
        self.full_redraw();
    }

    fn resize_selected(&mut self, direction: Direction) {
        let Self {
            editor,
            draw_area,
            palette,
            toolbox,
            adjuster,
            ..
        } = self;
        let widgets: [&mut dyn Widget; 4] = [draw_area, palette, toolbox, adjuster];
        let mut failure = None;
        for widget in widgets {
            if !widget.frame().selected {
                continue;
            }
            if let Err(err) = widget.resize(direction, editor) {
                failure = Some(err);
            }
        }
        self.full_redraw();
        if let Some(err) = failure {
            self.show(&format!("Error: {err}"));
        }
    }

    fn quit(&mut self) {
        tracing::info!("quit requested");
        self.running = false;
        self.painter.clear();
    }

    fn title(&mut self) {
        let title = format!("{APP_NAME} v{}", env!("CARGO_PKG_VERSION"));
        self.painter.text(MARGIN_LEFT + 1, 1, &title, color::GREEN);
    }

    fn render_widgets(&mut self) {
        let Self {
            editor,
            draw_area,
            palette,
            toolbox,
            adjuster,
            painter,
            ..
        } = self;
        let widgets: [&dyn Widget; 4] = [draw_area, palette, toolbox, adjuster];
        for widget in widgets {
            widget.render(editor, painter);
        }
    }

    /// Clears the screen and draws everything again.
    pub fn full_redraw(&mut self) {
        if self.live_size {
            match terminal::size() {
                Ok(size) => self.size = size,
                Err(err) => tracing::warn!(error = %err, "cannot read terminal size"),
            }
        }
        self.painter.clear();
        self.title();
        self.render_widgets();
    }

    fn show(&mut self, text: &str) {
        let (columns, rows) = self.size;
        let width = usize::from(columns.saturating_sub(MARGIN_LEFT));
        self.painter.line(MARGIN_LEFT, rows, text, width, painter::LABEL);
        text.clone_into(&mut self.status);
    }

    fn show_help(&mut self) {
        self.painter.clear();
        self.title();
        let mut row = 3;
        self.painter.text(MARGIN_LEFT, row, "Keybindings:", color::GREEN);
        row += 1;
        for (key, action) in KEYBINDINGS {
            self.painter.text(MARGIN_LEFT + 2, row, key, painter::LABEL);
            self.painter.text(MARGIN_LEFT + 4, row + 1, action, painter::DIM);
            row += 2;
        }
        row += 1;
        self.painter.text(MARGIN_LEFT, row, "Commands:", color::GREEN);
        row += 1;
        for (cmd, explanation) in command::HELP {
            self.painter.text(MARGIN_LEFT + 2, row, cmd, painter::LABEL);
            self.painter.text(MARGIN_LEFT + 4, row + 1, explanation, painter::DIM);
            row += 2;
        }
        self.painter.text(MARGIN_LEFT, row + 2, "Press any key to continue...", painter::LABEL);
        self.help_shown = true;
    }
}

const fn arrow(key: NamedKey) -> Option<Direction> {
    match key {
        NamedKey::Up => Some(Direction::Up),
        NamedKey::Down => Some(Direction::Down),
        NamedKey::Left => Some(Direction::Left),
        NamedKey::Right => Some(Direction::Right),
        _ => None,
    }
}

const fn ctrl_arrow(key: NamedKey) -> Option<Direction> {
    match key {
        NamedKey::CtrlUp => Some(Direction::Up),
        NamedKey::CtrlDown => Some(Direction::Down),
        NamedKey::CtrlLeft => Some(Direction::Left),
        NamedKey::CtrlRight => Some(Direction::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pixedit_common::types::Pos;
    use pixedit_input::decode_all;
    use pixedit_tools::{Tool, ToolKind};

    use super::*;

    fn app(width: usize, height: usize) -> App<Vec<u8>> {
        App::new(
            &EditorConfig::default(),
            PixelGrid::new(width, height),
            Vec::new(),
            (80, 40),
        )
    }

    fn feed(app: &mut App<Vec<u8>>, bytes: &[u8]) {
        for event in decode_all(bytes).expect("decode") {
            app.handle(event);
        }
        app.flush().expect("flush");
    }

    #[test]
    fn layout_follows_the_canvas() {
        let app = app(4, 3);
        assert_eq!(app.draw_area.frame().area.x, 3);
        assert_eq!(app.toolbox.frame().area.x, 3 + 8 + 3);
        assert_eq!(app.palette.frame().area.y, 3 + 3 + 2);
        assert_eq!(app.adjuster.frame().area.y, 3 + 5 + 2);
        assert_eq!(app.toolbox.frame().title.as_deref(), Some("2"));
    }

    #[test]
    fn command_line_creates_new_image() {
        let mut app = app(4, 4);
        feed(&mut app, b":new 6 2\r");
        assert_eq!(app.editor().grid.width(), 6);
        assert_eq!(app.editor().grid.height(), 2);
        assert_eq!(app.draw_area.frame().area.width, 12);
        assert_eq!(app.command_line(), None);
        assert!(!app.output().is_empty());
    }

    #[test]
    fn command_line_editing() {
        let mut app = app(4, 4);
        feed(&mut app, b"\x05tl\x7f");
        assert_eq!(app.command_line(), Some(":t"));
        feed(&mut app, b"\x7f\x7f");
        assert_eq!(app.command_line(), None);
        // back in normal mode, so 'q' quits
        feed(&mut app, b"q");
        assert!(!app.is_running());
    }

    #[test]
    fn unknown_and_failing_commands_report_status() {
        let mut app = app(4, 4);
        feed(&mut app, b":bogus 1\r");
        assert_eq!(app.status(), "Unknown command ':bogus'");
        feed(&mut app, b":crop 1 2 3\n");
        assert!(app.status().starts_with("Error: "), "{}", app.status());
        feed(&mut app, b":save\r");
        assert_eq!(app.status(), "Error: Unable to save: file path not given");
        assert!(app.is_running());
    }

    #[test]
    fn tool_command_selects_tool() {
        let mut app = app(4, 4);
        feed(&mut app, b":tool fill\r");
        assert_eq!(app.editor().tools.current(), ToolKind::Fill);
    }

    #[test]
    fn clicking_the_canvas_paints_primary() {
        let mut app = app(4, 4);
        // draw area starts at column 3, row 3; column 6 is pixel 1
        feed(&mut app, b"\x1b[<0;6;4M\x1b[<0;6;4m");
        assert_eq!(app.editor().grid.get(Pos::new(1, 1)), color::GRAY);
        assert_eq!(app.editor().grid.get(Pos::new(0, 0)), color::WHITE);
    }

    #[test]
    fn rectangle_gesture_commits_on_release_outside() {
        let mut app = app(4, 4);
        feed(&mut app, b":tool rectangle\r");
        feed(&mut app, b"\x1b[<0;3;3M\x1b[<32;70;30M\x1b[<0;70;30m");
        let grid = &app.editor().grid;
        assert_eq!(grid.get(Pos::new(3, 3)), color::GRAY);
        assert_eq!(grid.get(Pos::new(0, 3)), color::GRAY);
        assert_eq!(grid.get(Pos::new(1, 1)), color::WHITE);
        assert!(app.editor().tools.tool(ToolKind::Rectangle).is_idle());
    }

    #[test]
    fn palette_click_sets_primary() {
        let mut app = app(4, 4);
        let palette_row = app.palette.frame().area.y;
        let click = format!("\x1b[<0;4;{palette_row}M");
        feed(&mut app, click.as_bytes());
        assert_eq!(app.editor().colors.primary(), color::BLACK);
        // fourth default swatch
        let click = format!("\x1b[<2;9;{palette_row}M");
        feed(&mut app, click.as_bytes());
        assert_eq!(app.editor().colors.secondary(), color::RED);
        assert_eq!(app.editor().colors.primary(), color::BLACK);
        assert!(!app.colors_changed.get());
    }

    #[test]
    fn selected_widgets_follow_arrows() {
        let mut app = app(4, 4);
        feed(&mut app, b"2\x1b[B\x1b[C");
        assert!(app.toolbox.frame().selected);
        assert_eq!(app.toolbox.frame().area.x, 3 + 8 + 3 + 1);
        assert_eq!(app.toolbox.frame().area.y, 4);
        assert_eq!(app.draw_area.frame().area.x, 3);
    }

    #[test]
    fn ctrl_arrows_resize_the_canvas() {
        let mut app = app(4, 4);
        feed(&mut app, b"0\x1b[1;5C\x1b[1;5A");
        assert_eq!(app.editor().grid.width(), 5);
        assert_eq!(app.editor().grid.height(), 3);
    }

    #[test]
    fn help_swallows_the_next_key() {
        let mut app = app(4, 4);
        feed(&mut app, b"?");
        assert!(app.help_shown);
        feed(&mut app, b"q");
        assert!(app.is_running());
        assert!(!app.help_shown);
    }

    #[test]
    fn save_and_open_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("art.png");
        let mut app = app(3, 2);
        feed(&mut app, b"\x1b[<0;3;3M\x1b[<0;3;3m");
        app.execute(&format!(":save {}", path.display()));
        assert!(app.status().starts_with("Saved image as"), "{}", app.status());

        feed(&mut app, b":new 8 8\r");
        app.execute(&format!(":open {}", path.display()));
        assert_eq!(app.editor().grid.width(), 3);
        assert_eq!(app.editor().grid.get(Pos::new(0, 0)), color::GRAY);
        assert_eq!(app.editor().grid.get(Pos::new(1, 0)), color::WHITE);

        // ctrl-s reuses the remembered path
        feed(&mut app, b"\x13");
        assert!(app.status().starts_with("Saved image as"), "{}", app.status());
    }

    #[test]
    fn run_stops_at_quit() {
        let mut app = app(2, 2);
        let input = Decoder::new(&b"x:q\rq"[..]);
        app.run(input).expect("run");
        assert!(!app.is_running());
    }
}
