use std::{collections::HashMap, fs, path::Path, str::FromStr};

use tracing::{debug, warn};
use vector_plot_core::{GlyphEntry, GlyphSource, PenState, StrokePoint};

use crate::{FontLoadError, FontRecord, Result, parse_records};

/// Largest stroke count a glyph header may declare.
pub const MAX_STROKES: usize = 4096;

/// Parsed font: a mapping from character to its glyph.
///
/// Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FontDatabase {
    glyphs: HashMap<u8, GlyphEntry>,
}

impl FontDatabase {
    /// Build the database from a record stream, validating every glyph header against the
    /// strokes that follow it.
    pub fn load<I>(records: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<FontRecord>,
    {
        let mut glyphs = HashMap::new();
        let mut records = records.into_iter().map(Into::<FontRecord>::into).enumerate();

        while let Some((index, record)) = records.next() {
            if !record.is_sentinel() {
                return Err(FontLoadError::OrphanStroke { record: index });
            }

            let (code, expected) = read_sentinel(index, &record)?;
            let character = code as char;

            let mut strokes = Vec::new();
            while strokes.len() < expected {
                let Some((stroke_index, stroke)) = records.next() else {
                    return Err(FontLoadError::Truncated {
                        character,
                        expected,
                        found: strokes.len(),
                    });
                };
                if stroke.is_sentinel() {
                    return Err(FontLoadError::SentinelInGlyph {
                        character,
                        expected,
                        record: stroke_index,
                    });
                }
                strokes.push(StrokePoint {
                    x: stroke.x,
                    y: stroke.y,
                    pen: if stroke.z != 0.0 {
                        PenState::Down
                    } else {
                        PenState::Up
                    },
                });
            }

            if strokes.is_empty() {
                debug!(?character, "glyph declares no strokes, skipping");
                continue;
            }

            if glyphs.contains_key(&code) {
                warn!(?character, record = index, "duplicate glyph definition ignored");
                continue;
            }

            glyphs.insert(
                code,
                GlyphEntry {
                    character: code,
                    strokes,
                },
            );
        }

        debug!(glyphs = glyphs.len(), "font loaded");
        Ok(Self { glyphs })
    }

    /// Read and parse a font file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        text.parse()
    }

    /// Look up the glyph for `character`.
    pub fn lookup(&self, character: char) -> Option<&GlyphEntry> {
        let code = u8::try_from(character).ok()?;
        self.glyphs.get(&code)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Every character the font can draw, in ascending order.
    pub fn characters(&self) -> Vec<char> {
        let mut codes: Vec<u8> = self.glyphs.keys().copied().collect();
        codes.sort_unstable();
        codes.into_iter().map(char::from).collect()
    }
}

impl FromStr for FontDatabase {
    type Err = FontLoadError;

    fn from_str(text: &str) -> Result<Self> {
        Self::load(parse_records(text)?)
    }
}

impl GlyphSource for FontDatabase {
    fn glyph(&self, character: char) -> Option<&GlyphEntry> {
        self.lookup(character)
    }
}

/// Character code and stroke count from a glyph header.
fn read_sentinel(record: usize, sentinel: &FontRecord) -> Result<(u8, usize)> {
    let invalid = |reason| FontLoadError::InvalidSentinel { record, reason };

    if sentinel.y.fract() != 0.0 || !(0.0..=255.0).contains(&sentinel.y) {
        return Err(invalid("character code is not a byte"));
    }
    if sentinel.z.fract() != 0.0 || sentinel.z < 0.0 {
        return Err(invalid("stroke count is not a non-negative integer"));
    }
    if sentinel.z > MAX_STROKES as f32 {
        return Err(invalid("stroke count is too large"));
    }

    Ok((sentinel.y as u8, sentinel.z as usize))
}
