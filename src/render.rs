use std::io::{self, Write};

use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetForegroundColor},
};

/// Closed set of colors the engine knows about; the renderer decides what
/// they look like on the actual terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    None,
    Correct,
    Incorrect,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
}

/// The engine's entire view of the terminal: three primitives plus a flush.
/// Production goes through crossterm; tests record the command stream.
pub trait Renderer {
    fn print(&mut self, glyph: &str, color: Color) -> io::Result<()>;
    fn move_cursor(&mut self, direction: Direction, columns: u16) -> io::Result<()>;
    /// Newline plus carriage return
    fn newline(&mut self) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

/// Production renderer queueing crossterm commands into any writer
/// (stdout in practice).
pub struct CrosstermRenderer<W: Write> {
    out: W,
}

impl<W: Write> CrosstermRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

fn foreground(color: Color) -> Option<CtColor> {
    match color {
        Color::None => None,
        Color::Correct => Some(CtColor::Green),
        Color::Incorrect => Some(CtColor::Red),
        Color::Info => Some(CtColor::Cyan),
    }
}

impl<W: Write> Renderer for CrosstermRenderer<W> {
    fn print(&mut self, glyph: &str, color: Color) -> io::Result<()> {
        match foreground(color) {
            Some(fg) => queue!(self.out, SetForegroundColor(fg), Print(glyph), ResetColor),
            None => queue!(self.out, Print(glyph)),
        }
    }

    fn move_cursor(&mut self, direction: Direction, columns: u16) -> io::Result<()> {
        if columns == 0 {
            return Ok(());
        }
        match direction {
            Direction::Left => queue!(self.out, MoveLeft(columns)),
            Direction::Right => queue!(self.out, MoveRight(columns)),
            Direction::Up => queue!(self.out, MoveUp(columns)),
        }
    }

    fn newline(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// One recorded render command, for asserting on engine output in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderCmd {
    Print(String, Color),
    Move(Direction, u16),
    Newline,
}

/// Test renderer that captures the command stream instead of touching a
/// terminal.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCmd>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for RecordingRenderer {
    fn print(&mut self, glyph: &str, color: Color) -> io::Result<()> {
        self.commands.push(RenderCmd::Print(glyph.to_string(), color));
        Ok(())
    }

    fn move_cursor(&mut self, direction: Direction, columns: u16) -> io::Result<()> {
        if columns > 0 {
            self.commands.push(RenderCmd::Move(direction, columns));
        }
        Ok(())
    }

    fn newline(&mut self) -> io::Result<()> {
        self.commands.push(RenderCmd::Newline);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossterm_renderer_emits_color_sequences() {
        let mut buf = Vec::new();
        {
            let mut renderer = CrosstermRenderer::new(&mut buf);
            renderer.print("a", Color::Correct).unwrap();
            renderer.flush().unwrap();
        }

        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains('a'));
        // set-foreground and reset escapes bracket the glyph
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_crossterm_renderer_plain_print_has_no_escapes() {
        let mut buf = Vec::new();
        {
            let mut renderer = CrosstermRenderer::new(&mut buf);
            renderer.print("a", Color::None).unwrap();
            renderer.flush().unwrap();
        }

        assert_eq!(String::from_utf8(buf).unwrap(), "a");
    }

    #[test]
    fn test_zero_column_move_is_a_no_op() {
        let mut buf = Vec::new();
        {
            let mut renderer = CrosstermRenderer::new(&mut buf);
            renderer.move_cursor(Direction::Left, 0).unwrap();
            renderer.flush().unwrap();
        }
        assert!(buf.is_empty());

        let mut recording = RecordingRenderer::new();
        recording.move_cursor(Direction::Right, 0).unwrap();
        assert!(recording.commands.is_empty());
    }

    #[test]
    fn test_recording_renderer_captures_stream() {
        let mut renderer = RecordingRenderer::new();

        renderer.print("h", Color::Correct).unwrap();
        renderer.move_cursor(Direction::Left, 2).unwrap();
        renderer.newline().unwrap();

        assert_eq!(
            renderer.commands,
            vec![
                RenderCmd::Print("h".to_string(), Color::Correct),
                RenderCmd::Move(Direction::Left, 2),
                RenderCmd::Newline,
            ]
        );
    }
}
