use tracing::warn;
use vector_plot_core::{GlyphSource, StrokePoint};

/// A character the font could not draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedGlyph {
    pub character: char,
    /// Word the character appeared in
    pub word: String,
}

/// Maps characters to stroke lists through any [GlyphSource].
pub struct GlyphResolver<S> {
    source: S,
}

impl<S: GlyphSource> GlyphResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Strokes of `character` and their count.
    pub fn resolve(&self, character: char) -> Option<(&[StrokePoint], usize)> {
        self.source
            .glyph(character)
            .map(|glyph| (glyph.strokes.as_slice(), glyph.stroke_count()))
    }

    /// Like [GlyphResolver::resolve], reporting a miss as an [UnresolvedGlyph].
    pub fn resolve_in_word(
        &self,
        character: char,
        word: &str,
    ) -> Result<&[StrokePoint], UnresolvedGlyph> {
        match self.resolve(character) {
            Some((strokes, _)) => Ok(strokes),
            None => {
                warn!(?character, word, "stroke data not found");
                Err(UnresolvedGlyph {
                    character,
                    word: word.to_owned(),
                })
            }
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
