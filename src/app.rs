//! Counter app: feeds input into a counter store and renders each state.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use std::sync::Arc;

use crate::config::ViewConfig;
use crate::counter::{CounterAction, CounterReducer, CounterState, CounterView};
use crate::error::AppError;
use crate::mvi::Action;
use crate::store::Store;

/// One line of interactive input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(CounterAction),
    Quit,
}

/// Parse a line of input.
///
/// - empty line or `click`: `INCREASE_COUNT`
/// - `quit` / `exit`: stop reading
/// - `{...}`: a JSON action such as `{"type":"INCREASE_COUNT"}`
/// - any other word: an action with that type tag
pub fn parse_line(line: &str) -> Result<Command, AppError> {
    match line.trim() {
        "" | "click" => Ok(Command::Dispatch(CounterAction::IncreaseCount)),
        "quit" | "exit" => Ok(Command::Quit),
        json if json.starts_with('{') => serde_json::from_str(json)
            .map(Command::Dispatch)
            .map_err(|source| AppError::InvalidAction {
                line: json.to_string(),
                source,
            }),
        tag => Ok(Command::Dispatch(CounterAction::from(tag))),
    }
}

pub struct App<W: Write + 'static> {
    store: Store<CounterReducer>,
    out: Rc<RefCell<W>>,
    echo_actions: bool,
}

impl<W: Write + 'static> App<W> {
    /// Build the app. With `render`, the counter view is the store listener
    /// and draws every state, starting with the initial one. Without it,
    /// nothing but [`App::print_state`] writes to `out`, so action echo is
    /// off as well.
    pub fn new(config: &ViewConfig, render: bool, out: W) -> Self {
        let out = Rc::new(RefCell::new(out));
        let store = if render {
            let view = CounterView::new(config.button_label.clone());
            let sink = Rc::clone(&out);
            Store::with_listener(CounterReducer, move |state: &CounterState| {
                if let Err(e) = view.render(state, &mut *sink.borrow_mut()) {
                    tracing::warn!(error = %e, "Failed to render counter");
                }
            })
        } else {
            Store::new(CounterReducer)
        };

        Self {
            store,
            out,
            echo_actions: render && config.echo_actions,
        }
    }

    pub fn dispatch(&mut self, action: CounterAction) -> Result<(), AppError> {
        if self.echo_actions {
            writeln!(self.out.borrow_mut(), "> {}", action.action_type())?;
        }
        self.store.dispatch(action);
        Ok(())
    }

    /// Dispatch `INCREASE_COUNT` `times` times.
    pub fn click(&mut self, times: u64) -> Result<(), AppError> {
        for _ in 0..times {
            self.dispatch(CounterAction::IncreaseCount)?;
        }
        Ok(())
    }

    /// Read commands until EOF or `quit`. Malformed lines are reported on
    /// stderr and skipped.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), AppError> {
        for line in input.lines() {
            match parse_line(&line?) {
                Ok(Command::Quit) => break,
                Ok(Command::Dispatch(action)) => self.dispatch(action)?,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping input line");
                    eprintln!("{e}");
                }
            }
        }
        Ok(())
    }

    pub fn state(&self) -> Arc<CounterState> {
        self.store.get_state()
    }

    /// Write the current state as a JSON line.
    pub fn print_state(&self) -> Result<(), AppError> {
        let json = serde_json::to_string(self.store.state()).map_err(AppError::Serialize)?;
        let mut out = self.out.borrow_mut();
        writeln!(out, "{json}")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_click_increase() {
        assert_eq!(
            parse_line("").unwrap(),
            Command::Dispatch(CounterAction::IncreaseCount)
        );
        assert_eq!(
            parse_line("  click ").unwrap(),
            Command::Dispatch(CounterAction::IncreaseCount)
        );
    }

    #[test]
    fn quit_words() {
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert_eq!(parse_line("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn bare_tag_dispatches_that_type() {
        assert_eq!(
            parse_line("INCREASE_COUNT").unwrap(),
            Command::Dispatch(CounterAction::IncreaseCount)
        );
        assert_eq!(
            parse_line("UNKNOWN").unwrap(),
            Command::Dispatch(CounterAction::Other("UNKNOWN".to_string()))
        );
    }

    #[test]
    fn json_action() {
        assert_eq!(
            parse_line(r#"{"type":"@@INIT"}"#).unwrap(),
            Command::Dispatch(CounterAction::Init)
        );
    }

    #[test]
    fn malformed_json_is_invalid_action() {
        let err = parse_line("{not json").unwrap_err();
        assert!(matches!(err, AppError::InvalidAction { .. }));
        assert!(err.to_string().contains("{not json"));
    }
}
