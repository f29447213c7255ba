//! The primary/secondary color pair.

use std::fmt;

use pixedit_common::color::Color;

/// Which half of a [`DualColor`] is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Which {
    /// The color used by most buttons.
    Primary,
    /// The color used by the right button.
    Secondary,
}

impl fmt::Display for Which {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

/// Callback run after a color changes, with the old and the new color.
pub type ColorListener = Box<dyn FnMut(Which, Color, Color)>;

/// The two colors currently selected by the user.
pub struct DualColor {
    primary: Color,
    secondary: Color,
    listeners: Vec<ColorListener>,
}

impl DualColor {
    /// Creates a selection with no listeners.
    #[must_use]
    pub fn new(primary: Color, secondary: Color) -> Self {
        Self {
            primary,
            secondary,
            listeners: Vec::new(),
        }
    }

    /// The primary color.
    #[must_use]
    pub const fn primary(&self) -> Color {
        self.primary
    }

    /// The secondary color.
    #[must_use]
    pub const fn secondary(&self) -> Color {
        self.secondary
    }

    /// Returns one of the two colors.
    #[must_use]
    pub const fn get(&self, which: Which) -> Color {
        match which {
            Which::Primary => self.primary,
            Which::Secondary => self.secondary,
        }
    }

    /// Replaces one of the colors and notifies every listener.
    pub fn set(&mut self, which: Which, color: Color) {
        let slot = match which {
            Which::Primary => &mut self.primary,
            Which::Secondary => &mut self.secondary,
        };
        let old = std::mem::replace(slot, color);
        tracing::debug!(%which, %old, new = %color, "color changed");
        for listener in &mut self.listeners {
            listener(which, old, color);
        }
    }

    /// Registers a change listener.
    pub fn add_listener(&mut self, listener: impl FnMut(Which, Color, Color) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

impl fmt::Debug for DualColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DualColor")
            .field("primary", &self.primary)
            .field("secondary", &self.secondary)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pixedit_common::color;

    use super::*;

    #[test]
    fn set_replaces_one_side() {
        let mut colors = DualColor::new(color::BLACK, color::WHITE);
        colors.set(Which::Secondary, color::RED);
        assert_eq!(colors.primary(), color::BLACK);
        assert_eq!(colors.secondary(), color::RED);
        assert_eq!(colors.get(Which::Secondary), color::RED);
    }

    #[test]
    fn listeners_see_old_and_new() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut colors = DualColor::new(color::BLACK, color::WHITE);
        colors.add_listener(move |which, old, new| sink.borrow_mut().push((which, old, new)));
        colors.set(Which::Primary, color::GREEN);
        assert_eq!(
            *seen.borrow(),
            vec![(Which::Primary, color::BLACK, color::GREEN)]
        );
    }
}
