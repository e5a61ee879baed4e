//! Text rendering of the counter component.

use std::io::{self, Write};

use super::state::CounterState;

pub const DEFAULT_BUTTON_LABEL: &str = "Click Me";

/// Renders a button line followed by the current count.
#[derive(Debug, Clone)]
pub struct CounterView {
    button_label: String,
}

impl CounterView {
    pub fn new(button_label: impl Into<String>) -> Self {
        Self {
            button_label: button_label.into(),
        }
    }

    pub fn render<W: Write + ?Sized>(&self, state: &CounterState, out: &mut W) -> io::Result<()> {
        writeln!(out, "[ {} ]", self.button_label)?;
        writeln!(out, "{}", state.count)?;
        out.flush()
    }
}

impl Default for CounterView {
    fn default() -> Self {
        Self::new(DEFAULT_BUTTON_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_button_and_count() {
        let mut out = Vec::new();
        CounterView::default()
            .render(&CounterState { count: 3 }, &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[ Click Me ]\n3\n");
    }

    #[test]
    fn custom_label() {
        let mut out = Vec::new();
        CounterView::new("+1")
            .render(&CounterState::default(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[ +1 ]\n0\n");
    }
}
