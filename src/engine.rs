use std::io;

use thiserror::Error;

use crate::glyph::GlyphTable;
use crate::render::{Color, Direction, Renderer};
use crate::stats::{Outcome, Report, StatsAccumulator};
use crate::text::{TextError, TextModel};

/// DEL, the one distinguished control value in the input stream
pub const BACKSPACE: char = '\u{7f}';

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error("render command failed: {0}")]
    Render(#[from] io::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Typing,
    LineComplete,
    SessionComplete,
}

/// Characters that delimit words for the words-per-minute statistic
pub fn is_word_boundary(c: char) -> bool {
    matches!(c, '\n' | ' ' | '\t')
}

/// The per-keystroke state machine: judges keystrokes against the reference
/// text, keeps the terminal cursor in step with the logical position, and
/// feeds the statistics accumulator.
///
/// The terminal itself is only reachable through the [`Renderer`] passed into
/// each call, so the whole machine runs headless in tests.
#[derive(Debug)]
pub struct SessionEngine {
    text: TextModel,
    glyphs: GlyphTable,
    stats: StatsAccumulator,
    current_line: usize,
    cursor: usize,
    state: State,
}

impl SessionEngine {
    pub fn new(text: TextModel, glyphs: GlyphTable) -> Self {
        Self {
            text,
            glyphs,
            stats: StatsAccumulator::new(),
            current_line: 0,
            cursor: 0,
            state: State::Typing,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn current_line(&self) -> usize {
        self.current_line
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn stats(&self) -> &StatsAccumulator {
        &self.stats
    }

    pub fn finish(&self) -> Report {
        self.stats.finalize()
    }

    /// Print the first reference line before any keystroke is read.
    pub fn begin<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), EngineError> {
        if self.state == State::SessionComplete {
            return Ok(());
        }
        self.print_current_line(renderer)
    }

    /// Feed one keystroke through the state machine and return the state it
    /// left the session in. Keystrokes after completion are ignored.
    pub fn key<R: Renderer>(&mut self, c: char, renderer: &mut R) -> Result<State, EngineError> {
        if self.state == State::SessionComplete {
            return Ok(self.state);
        }

        if c == BACKSPACE {
            self.backspace(renderer)?;
        } else {
            self.advance(c, renderer)?;
        }

        Ok(self.state)
    }

    fn backspace<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), EngineError> {
        if self.cursor > 0 {
            let prev = {
                let line = self.text.line_at(self.current_line)?;
                line.chars().nth(self.cursor - 1).unwrap()
            };
            self.stats.record_backspace(is_word_boundary(prev));
            renderer.move_cursor(Direction::Left, self.glyphs.width_of(prev))?;
            self.cursor -= 1;
            return Ok(());
        }

        if self.current_line == 0 {
            // nothing before the first character; count the keypress only
            self.stats.record_backspace(false);
            return Ok(());
        }

        // Cross back into the previous line, landing just before its
        // terminator. A completed line's newline is re-opened for judging,
        // but the line body stays printed; one up-move plus one forward-move
        // re-synchronizes the terminal cursor without reprinting.
        self.current_line -= 1;
        let (len, body_width) = {
            let line = self.text.line_at(self.current_line)?;
            let len = line.chars().count();
            let body_width = self.glyphs.span_width(line.chars().take(len - 1));
            (len, body_width)
        };
        self.cursor = len - 1;
        self.stats.record_backspace(false);
        renderer.move_cursor(Direction::Up, 1)?;
        renderer.move_cursor(Direction::Right, body_width)?;
        self.state = State::Typing;

        Ok(())
    }

    fn advance<R: Renderer>(&mut self, c: char, renderer: &mut R) -> Result<(), EngineError> {
        let (expected, line_len) = {
            let line = self.text.line_at(self.current_line)?;
            (line.chars().nth(self.cursor).unwrap(), line.chars().count())
        };

        let outcome = if c == expected {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        };
        self.stats.record_keystroke(outcome, is_word_boundary(expected));

        // Always show the reference character, so the visible text keeps
        // matching the target line no matter what was mistyped.
        let glyph = self.glyphs.glyph_for(expected);
        let color = match outcome {
            Outcome::Correct => Color::Correct,
            Outcome::Incorrect => Color::Incorrect,
        };
        renderer.print(&glyph.display, color)?;

        self.cursor += 1;

        if expected == '\n' || self.cursor == line_len {
            self.complete_line(renderer)?;
        }

        Ok(())
    }

    fn complete_line<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), EngineError> {
        self.state = State::LineComplete;
        self.current_line += 1;
        self.cursor = 0;
        renderer.newline()?;

        if self.text.line_at(self.current_line)?.is_empty() {
            self.state = State::SessionComplete;
        } else {
            self.print_current_line(renderer)?;
            self.state = State::Typing;
        }

        Ok(())
    }

    fn print_current_line<R: Renderer>(&mut self, renderer: &mut R) -> Result<(), EngineError> {
        let line = self.text.line_at(self.current_line)?;
        for c in line.chars() {
            let glyph = self.glyphs.glyph_for(c);
            renderer.print(&glyph.display, Color::None)?;
        }
        let width = self.glyphs.span_width(line.chars());
        renderer.move_cursor(Direction::Left, width)?;
        Ok(())
    }
}
