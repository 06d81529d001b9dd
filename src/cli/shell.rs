//! The interactive browsing loop.
//!
//! Each turn the current frame is drawn (only when the controller's
//! generation moved), then one line of input is read and applied.

use std::io::{self, BufRead, Write};

use console::Term;
use tracing::debug;

use crate::controller::ViewController;
use crate::page::PageId;
use crate::render::Frontend;
use crate::storage::PreferenceStore;
use crate::views::view_for;

const HELP: &str = "\
Type a page id (welcome, home, modules, drills, dashboard, alerts, about, login),
the number of an action on the page, `t` to switch theme, or `q` to quit.";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line, redraws nothing.
    Empty,
    Quit,
    Help,
    ToggleTheme,
    /// 1-based index into the current page's actions.
    Action(usize),
    /// Anything else is treated as a page identifier.
    Page(String),
}

/// Whether the loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Classifies a line of input.
pub fn parse_input(line: &str) -> Input {
    let word = line.trim();
    match word.to_ascii_lowercase().as_str() {
        "" => Input::Empty,
        "q" | "quit" | "exit" => Input::Quit,
        "?" | "h" | "help" => Input::Help,
        "t" | "theme" => Input::ToggleTheme,
        other => match other.parse::<usize>() {
            Ok(n) => Input::Action(n),
            Err(_) => Input::Page(other.to_string()),
        },
    }
}

/// A browsing session: a controller plus the front end that draws it.
pub struct Session<S: PreferenceStore> {
    controller: ViewController<S>,
    frontend: Frontend,
    drawn: Option<u64>,
}

impl<S: PreferenceStore> Session<S> {
    pub fn new(controller: ViewController<S>, frontend: Frontend) -> Self {
        Self {
            controller,
            frontend,
            drawn: None,
        }
    }

    pub fn controller(&self) -> &ViewController<S> {
        &self.controller
    }

    /// The page the session is on.
    pub fn page(&self) -> PageId {
        self.controller.state().active_page
    }

    /// Applies one input. Returns an optional message for the user.
    pub fn apply(&mut self, input: Input) -> (Flow, Option<String>) {
        match input {
            Input::Empty => (Flow::Continue, None),
            Input::Quit => (Flow::Quit, None),
            Input::Help => (Flow::Continue, Some(HELP.to_string())),
            Input::ToggleTheme => {
                self.controller.toggle_theme();
                (Flow::Continue, None)
            }
            Input::Action(n) => {
                let page = self.controller.state().active_page;
                match n.checked_sub(1).and_then(|i| view_for(page).actions().get(i)) {
                    Some(action) => {
                        action.invoke(&mut self.controller);
                        (Flow::Continue, None)
                    }
                    None => {
                        debug!(page = %page, index = n, "no such action");
                        (
                            Flow::Continue,
                            Some(format!("The {} page has no action {n}.", page.label())),
                        )
                    }
                }
            }
            Input::Page(id) => {
                self.controller.navigate_to(&id);
                (Flow::Continue, None)
            }
        }
    }

    /// Renders the frame if the state changed since the last call.
    pub fn pending_frame(&mut self) -> crate::Result<Option<String>> {
        let generation = self.controller.generation();
        if self.drawn == Some(generation) {
            return Ok(None);
        }
        let frame = self.frontend.render(self.controller.state())?;
        self.drawn = Some(generation);
        Ok(Some(frame))
    }

    /// Runs until the user quits or stdin closes.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let term = Term::stdout();
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            if let Some(frame) = self.pending_frame()? {
                if term.is_term() {
                    term.clear_screen()?;
                }
                term.write_line(&frame)?;
            }

            let prompt = format!("{} > ", self.controller.state().active_page);
            term.write_str(&prompt)?;
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                term.write_line("")?;
                break;
            }

            let (flow, message) = self.apply(parse_input(&line));
            if let Some(message) = message {
                term.write_line(&message)?;
            }
            if flow == Flow::Quit {
                break;
            }
        }
        debug!(page = %self.controller.state().active_page, "session ended");
        Ok(())
    }
}
