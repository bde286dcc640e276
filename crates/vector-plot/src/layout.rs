//! Word wrapping and cursor tracking

use tracing::{debug, warn};
use vector_plot_core::{GlyphSource, LayoutCursor, MotionCommand};
use vector_plot_font::{GlyphResolver, UnresolvedGlyph};

use crate::{ScaleFactor, render_word};

/// Page geometry, in device units except for `char_width`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal budget of one line
    pub line_width: f32,
    /// Advance of every character, in font design units
    pub char_width: f32,
    /// Gutter added to every line pitch
    pub line_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_width: 100.0,
            char_width: 18.0,
            line_spacing: -5.0,
        }
    }
}

impl LayoutConfig {
    /// Scaled width of one character cell.
    pub fn cell_width(&self, scale: ScaleFactor) -> f32 {
        self.char_width * scale.get()
    }

    /// Scaled width of `word`; every character advances by the same cell.
    pub fn measure_word(&self, word: &str, scale: ScaleFactor) -> f32 {
        word.chars().count() as f32 * self.cell_width(scale)
    }

    /// Vertical step from one line to the next. Negative: lines run downwards.
    pub fn line_pitch(&self, scale: ScaleFactor) -> f32 {
        self.line_spacing - self.cell_width(scale)
    }

    /// Cursor for the first line, one pitch below the origin.
    pub fn start_cursor(&self, scale: ScaleFactor) -> LayoutCursor {
        LayoutCursor::new(0.0, self.line_pitch(scale), self.line_width)
    }
}

/// Everything produced for one word; sent to the device as a single unit.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBatch {
    pub word: String,
    /// Commands in draw order, starting with the line-change move if `wrapped`
    pub commands: Vec<MotionCommand>,
    pub unresolved: Vec<UnresolvedGlyph>,
    /// Did this word start a new line?
    pub wrapped: bool,
}

/// Lays out a document one word at a time.
pub struct LayoutEngine<S> {
    resolver: GlyphResolver<S>,
    config: LayoutConfig,
    scale: ScaleFactor,
    cursor: LayoutCursor,
}

impl<S: GlyphSource> LayoutEngine<S> {
    pub fn new(source: S, config: LayoutConfig, scale: ScaleFactor) -> Self {
        Self {
            resolver: GlyphResolver::new(source),
            cursor: config.start_cursor(scale),
            config,
            scale,
        }
    }

    pub fn cursor(&self) -> LayoutCursor {
        self.cursor
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Start a new line and return the pen-up move to its origin.
    pub fn wrap_line(&mut self) -> MotionCommand {
        self.cursor = self
            .cursor
            .wrapped(self.config.line_pitch(self.scale), self.config.line_width);
        debug!(y = self.cursor.y, "new line");

        MotionCommand::MoveTo {
            x: self.cursor.x,
            y: self.cursor.y,
            draw: false,
        }
    }

    /// Place `word`, wrapping first if it does not fit, then skip one cell of space.
    ///
    /// The trailing space is charged without a fit check, so the budget may go negative
    /// after the last word of a line; only the next word's check wraps.
    pub fn layout_word(&mut self, word: &str) -> WordBatch {
        let width = self.config.measure_word(word, self.scale);
        let mut commands = Vec::new();
        let mut wrapped = false;

        if !self.cursor.fits(width) {
            commands.push(self.wrap_line());
            wrapped = true;
            if !self.cursor.fits(width) {
                warn!(word, width, "word is wider than a whole line");
                self.cursor.remaining -= width;
            }
        }

        let cell = self.config.cell_width(self.scale);
        let (rendered, cursor) = render_word(word, self.scale, cell, self.cursor, &self.resolver);
        commands.extend(rendered.commands);

        self.cursor = cursor.advanced(cell);

        WordBatch {
            word: word.to_owned(),
            commands,
            unresolved: rendered.unresolved,
            wrapped,
        }
    }

    /// Lazily lay out every word of `words`, in order.
    pub fn batches<I>(&mut self, words: I) -> impl Iterator<Item = WordBatch>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        words
            .into_iter()
            .map(move |word| self.layout_word(word.as_ref()))
    }
}
