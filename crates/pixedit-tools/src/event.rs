//! The grid-local event handed to tools.

use pixedit_canvas::DualColor;
use pixedit_common::color::Color;
use pixedit_common::types::Pos;
use pixedit_input::{MouseButton, MouseKind};

/// A mouse event re-expressed in grid coordinates, plus the color selection.
#[derive(Debug, Clone, Copy)]
pub struct DrawEvent<'a> {
    /// Cell under the pointer.
    pub pos: Pos,
    /// Press, release or drag.
    pub kind: MouseKind,
    /// Button and modifiers.
    pub button: MouseButton,
    /// The user's primary/secondary colors.
    pub colors: &'a DualColor,
}

impl<'a> DrawEvent<'a> {
    /// Creates a draw event.
    #[must_use]
    pub const fn new(pos: Pos, kind: MouseKind, button: MouseButton, colors: &'a DualColor) -> Self {
        Self {
            pos,
            kind,
            button,
            colors,
        }
    }

    /// The color this button paints with: secondary for the right button,
    /// primary for everything else.
    #[must_use]
    pub const fn active_color(&self) -> Color {
        if self.button.is_right() {
            self.colors.secondary()
        } else {
            self.colors.primary()
        }
    }

    /// True for the buttons that paint (left and right, any modifiers).
    #[must_use]
    pub const fn is_paint_button(&self) -> bool {
        self.button.is_left() || self.button.is_right()
    }
}

#[cfg(test)]
mod tests {
    use pixedit_common::color;

    use super::*;
    use crate::testing;

    #[test]
    fn right_button_uses_secondary() {
        let colors = testing::colors();
        let right = testing::event(&colors, MouseKind::Down, MouseButton::RIGHT, 0, 0);
        assert_eq!(right.active_color(), color::BLUE);
        let ctrl_right = testing::event(
            &colors,
            MouseKind::Drag,
            MouseButton::RIGHT.with(MouseButton::CTRL_BIT),
            0,
            0,
        );
        assert_eq!(ctrl_right.active_color(), color::BLUE);
    }

    #[test]
    fn other_buttons_use_primary() {
        let colors = testing::colors();
        for button in [MouseButton::LEFT, MouseButton::MIDDLE, MouseButton::SCROLL_UP] {
            let ev = testing::event(&colors, MouseKind::Down, button, 0, 0);
            assert_eq!(ev.active_color(), color::RED);
        }
    }
}
