//! Line-oriented front end.
//!
//! Each input line is either a front-end command (`history`, `settings`,
//! `state`, `copy [id]`, `quit`) or a whitespace-separated list of key
//! labels. Key lines are applied in full and followed by the display.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::calculator::{copy_text, copy_to_clipboard, parse_keys};
use crate::config::Config;
use crate::display::DisplaySnapshot;
use crate::session::Session;
use crate::ui::{render_display, render_history, render_settings};

/// Whether the loop should keep reading input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A session plus the presentation settings of the front end.
pub struct App {
    session: Session,
    group_digits: bool,
    json: bool,
}

impl App {
    pub fn new(session: Session, config: &Config, json: bool) -> Self {
        Self {
            session,
            group_digits: config.group_digits,
            json,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Apply key labels and write the resulting display.
    pub fn apply_keys(&mut self, labels: &str, out: &mut impl Write) -> Result<()> {
        let actions = parse_keys(labels)?;
        self.session.dispatch_all(actions);
        self.write_display(out)
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next() {
            None => {}
            Some("quit" | "exit") => return Ok(Flow::Quit),
            Some("history") => writeln!(out, "{}", render_history(&self.session.state().history))?,
            Some("settings") => writeln!(out, "{}", render_settings(self.session.state()))?,
            Some("state") => {
                serde_json::to_writer_pretty(&mut *out, self.session.state())?;
                writeln!(out)?;
            }
            Some("copy") => {
                if let Err(err) = self.copy(words.next(), out) {
                    tracing::debug!("copy failed: {:#}", err);
                    writeln!(out, "{:#}", err)?;
                }
            }
            Some(_) => {
                if let Err(err) = self.apply_keys(line, out) {
                    tracing::debug!("rejected input {:?}: {:#}", line, err);
                    writeln!(out, "{}", err)?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    /// Read lines until end of input or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.write_display(out)?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn write_display(&self, out: &mut impl Write) -> Result<()> {
        let state = self.session.state();
        if self.json {
            serde_json::to_writer(&mut *out, state)?;
            writeln!(out)?;
        } else {
            let snapshot = DisplaySnapshot::from_state(state, self.group_digits);
            writeln!(out, "{}", render_display(&snapshot))?;
        }
        Ok(())
    }

    fn copy(&self, id: Option<&str>, out: &mut impl Write) -> Result<()> {
        let id = match id {
            Some(id) => Some(
                id.trim_start_matches('#')
                    .parse::<u64>()
                    .with_context(|| format!("Invalid history id '{}'", id))?,
            ),
            None => None,
        };

        match copy_text(self.session.state(), id) {
            Some(text) => {
                copy_to_clipboard(text)?;
                writeln!(out, "Copied {}", text)?;
            }
            None => writeln!(out, "Nothing to copy")?,
        }
        Ok(())
    }
}
