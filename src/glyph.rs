use std::collections::HashMap;
use unicode_width::UnicodeWidthChar;

/// Return symbol shown in place of a typed newline (padded to two columns)
pub const NEWLINE_GLYPH: &str = "⏎ ";
/// Open-box symbol shown in place of a space (padded to two columns)
pub const SPACE_GLYPH: &str = "␣ ";

/// On-screen representation of one reference character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pub display: String,
    pub width: u16,
}

/// Maps the few characters that are not printed literally to their display
/// glyph and column width. Every other character falls back to itself with
/// its unicode column width (1 for the ASCII range the engine deals in).
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    map: HashMap<char, Glyph>,
}

impl GlyphTable {
    /// Table with visible whitespace: newline and space render as two-column
    /// symbols so the player can see (and aim for) them.
    pub fn with_whitespace_glyphs() -> Self {
        let mut map = HashMap::new();
        map.insert(
            '\n',
            Glyph {
                display: NEWLINE_GLYPH.to_string(),
                width: 2,
            },
        );
        map.insert(
            ' ',
            Glyph {
                display: SPACE_GLYPH.to_string(),
                width: 2,
            },
        );
        Self { map }
    }

    /// Table with no substitutions at all (`--plain`). The newline still gets
    /// a one-column marker so the end of a line is typeable at sight.
    pub fn plain() -> Self {
        let mut map = HashMap::new();
        map.insert(
            '\n',
            Glyph {
                display: "⏎".to_string(),
                width: 1,
            },
        );
        Self { map }
    }

    pub fn glyph_for(&self, c: char) -> Glyph {
        if let Some(glyph) = self.map.get(&c) {
            return glyph.clone();
        }
        Glyph {
            display: c.to_string(),
            width: c.width().unwrap_or(1) as u16,
        }
    }

    pub fn width_of(&self, c: char) -> u16 {
        match self.map.get(&c) {
            Some(glyph) => glyph.width,
            None => c.width().unwrap_or(1) as u16,
        }
    }

    /// Total number of terminal columns a run of characters occupies. This is
    /// the pure half of cursor repositioning: callers turn the result into a
    /// single move command instead of interleaving arithmetic with printing.
    pub fn span_width<I>(&self, chars: I) -> u16
    where
        I: IntoIterator<Item = char>,
    {
        chars.into_iter().map(|c| self.width_of(c)).sum()
    }
}
