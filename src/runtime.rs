use std::collections::VecDeque;
use std::io;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::engine::BACKSPACE;

/// Source of one keystroke at a time. `Ok(None)` is end of stream: the
/// session stops as if it had completed.
pub trait KeystrokeSource {
    fn next_key(&mut self) -> io::Result<Option<char>>;
}

/// Production source blocking on crossterm's event stream. Backspace maps to
/// DEL, Enter to '\n', Tab to '\t'; Esc and Ctrl-C end the stream; anything
/// that is not a character key is skipped.
#[derive(Debug, Default)]
pub struct CrosstermKeySource;

impl CrosstermKeySource {
    pub fn new() -> Self {
        Self
    }
}

impl KeystrokeSource for CrosstermKeySource {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        loop {
            let CtEvent::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(None);
                }
                KeyCode::Esc => return Ok(None),
                KeyCode::Char(c) => return Ok(Some(c)),
                KeyCode::Enter => return Ok(Some('\n')),
                KeyCode::Tab => return Ok(Some('\t')),
                KeyCode::Backspace => return Ok(Some(BACKSPACE)),
                _ => continue,
            }
        }
    }
}

/// Test source replaying a fixed keystroke script.
#[derive(Debug, Default)]
pub struct ScriptedKeySource {
    keys: VecDeque<char>,
}

impl ScriptedKeySource {
    pub fn new<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl KeystrokeSource for ScriptedKeySource {
    fn next_key(&mut self) -> io::Result<Option<char>> {
        Ok(self.keys.pop_front())
    }
}
