//! Glyph strokes to motion commands

use vector_plot_core::{GlyphSource, LayoutCursor, MotionCommand};
use vector_plot_font::{GlyphResolver, UnresolvedGlyph};

use crate::ScaleFactor;

/// Commands drawing one word, and the characters that could not be drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedWord {
    pub commands: Vec<MotionCommand>,
    pub unresolved: Vec<UnresolvedGlyph>,
}

/// Turn `word` into motion commands starting at `cursor`.
///
/// Every stroke point becomes a `SetPen` followed by a `MoveTo` in the same pen state.
/// The cursor moves one cell per character whether or not the glyph exists, so a missing
/// glyph leaves a correctly sized gap. Returns the cursor after the last character.
pub fn render_word<S: GlyphSource>(
    word: &str,
    scale: ScaleFactor,
    cell_width: f32,
    mut cursor: LayoutCursor,
    resolver: &GlyphResolver<S>,
) -> (RenderedWord, LayoutCursor) {
    let mut rendered = RenderedWord::default();
    let scale = scale.get();

    for character in word.chars() {
        match resolver.resolve_in_word(character, word) {
            Ok(strokes) => {
                rendered.commands.reserve(strokes.len() * 2);
                for stroke in strokes {
                    rendered.commands.push(MotionCommand::SetPen(stroke.pen));
                    rendered.commands.push(MotionCommand::MoveTo {
                        x: stroke.x * scale + cursor.x,
                        y: stroke.y * scale + cursor.y,
                        draw: stroke.pen.is_down(),
                    });
                }
            }
            Err(miss) => rendered.unresolved.push(miss),
        }

        cursor.x += cell_width;
    }

    (rendered, cursor)
}
