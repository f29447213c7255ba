//! SGR mouse report parsing using `nom`.
//!
//! A report looks like `ESC [ < B ; X ; Y T` where `B` is the decimal
//! button code, `X`/`Y` the 1-based column/row and `T` is `M` for a press
//! or `m` for a release. Drags arrive as presses with bit 32 set in `B`.

use nom::{
    IResult, Parser,
    character::complete::{char, digit1},
    combinator::all_consuming,
    sequence::preceded,
};
use pixedit_common::error::{PixeditError, Result};

use crate::event::{MouseButton, MouseEvent, MouseKind};

/// Prefix shared by every SGR mouse report.
pub const MOUSE_PREFIX: &str = "\x1b[<";

/// Terminator of a button press report.
pub const DOWN_TERMINATOR: char = 'M';

/// Terminator of a button release report.
pub const UP_TERMINATOR: char = 'm';

/// Splits `B;X;Y` into its three decimal fields.
fn payload(input: &str) -> IResult<&str, (&str, &str, &str)> {
    all_consuming((
        digit1,
        preceded(char(';'), digit1),
        preceded(char(';'), digit1),
    ))
    .parse(input)
}

fn field<T: std::str::FromStr>(sequence: &str, name: &str, digits: &str) -> Result<T> {
    digits.parse().map_err(|_| {
        PixeditError::decode(format!(
            "{name} field out of range in mouse report {sequence:?}: {digits}"
        ))
    })
}

/// Returns true if `sequence` starts like a mouse report.
#[must_use]
pub fn is_mouse_report(sequence: &str) -> bool {
    sequence.starts_with(MOUSE_PREFIX)
}

/// Parses a complete mouse report, prefix and terminator included.
///
/// # Errors
///
/// Returns a decode error if the prefix or terminator is wrong, the payload
/// does not have exactly three numeric fields, or a field overflows.
pub fn parse_mouse_report(sequence: &str) -> Result<MouseEvent> {
    let body = sequence.strip_prefix(MOUSE_PREFIX).ok_or_else(|| {
        PixeditError::decode(format!("not a mouse report: {sequence:?}"))
    })?;
    let Some(terminator) = body.chars().next_back() else {
        return Err(PixeditError::decode("empty mouse report"));
    };
    let pressed = match terminator {
        DOWN_TERMINATOR => MouseKind::Down,
        UP_TERMINATOR => MouseKind::Up,
        other => {
            return Err(PixeditError::decode(format!(
                "unknown mouse report terminator {other:?} in {sequence:?}"
            )));
        }
    };
    let fields = &body[..body.len() - terminator.len_utf8()];
    let (_, (button, x, y)) = payload(fields).map_err(|e| {
        PixeditError::decode(format!("malformed mouse report {sequence:?}: {e}"))
    })?;

    let code: u8 = field(sequence, "button", button)?;
    let x = field(sequence, "column", x)?;
    let y = field(sequence, "row", y)?;

    let (kind, code) = if code & MouseButton::DRAG_BIT == 0 {
        (pressed, code)
    } else {
        (MouseKind::Drag, code & !MouseButton::DRAG_BIT)
    };
    Ok(MouseEvent::new(kind, MouseButton::from_code(code), x, y))
}
