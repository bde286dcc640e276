#![no_std]

//! `vector-plot-core` provides core primitives for the `vector-plot` crate.

use alloc::vec::Vec;

extern crate alloc;

/// Whether the pen touches the paper while moving.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PenState {
    /// Lifted; moves reposition without drawing.
    Up,
    /// Lowered; moves draw a line.
    Down,
}

impl PenState {
    /// Is this the drawing state?
    pub fn is_down(self) -> bool {
        self == PenState::Down
    }
}

/// A single point of a glyph, in unscaled font design units relative to the glyph origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokePoint {
    /// X coordinate of this point
    pub x: f32,
    /// Y coordinate of this point
    pub y: f32,
    /// Pen state used while moving to this point
    pub pen: PenState,
}

/// A single glyph (character) contained within a font.
///
/// Strokes are kept in the order they were declared; reordering them changes the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphEntry {
    /// Character this glyph draws
    pub character: u8,
    /// Series of points which make up this glyph
    pub strokes: Vec<StrokePoint>,
}

impl GlyphEntry {
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }
}

/// A motion directive for the plotter, in absolute device coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MotionCommand {
    /// Raise or lower the pen.
    SetPen(PenState),
    /// Move to the given point, drawing if `draw` is set.
    MoveTo { x: f32, y: f32, draw: bool },
}

/// Current pen position and remaining horizontal budget on the current line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutCursor {
    pub x: f32,
    pub y: f32,
    pub remaining: f32,
}

impl LayoutCursor {
    pub fn new(x: f32, y: f32, remaining: f32) -> Self {
        Self { x, y, remaining }
    }

    /// Charge `width` against the line if it fits.
    ///
    /// Leaves the cursor untouched and returns `false` otherwise.
    pub fn fits(&mut self, width: f32) -> bool {
        if self.remaining >= width {
            self.remaining -= width;
            true
        } else {
            false
        }
    }

    /// Cursor at the start of the next line, `pitch` below this one, with a full budget.
    pub fn wrapped(self, pitch: f32, line_width: f32) -> Self {
        Self {
            x: 0.0,
            y: self.y + pitch,
            remaining: line_width,
        }
    }

    /// Cursor moved right by `dx`, with `dx` taken out of the budget.
    ///
    /// No fit check happens here, so `remaining` may go negative.
    pub fn advanced(self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            remaining: self.remaining - dx,
            ..self
        }
    }
}

/// Something glyphs can be looked up in.
///
/// Implementors may store glyphs however they like (a parsed font file, a static table).
pub trait GlyphSource {
    /// Look up the glyph drawing `character`, if the font defines one.
    fn glyph(&self, character: char) -> Option<&GlyphEntry>;
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyph(&self, character: char) -> Option<&GlyphEntry> {
        (**self).glyph(character)
    }
}
