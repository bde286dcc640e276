//! `vector-plot-font` loads single-stroke fonts stored as a flat stream of numeric records.
//!
//! Each record is a triple `x y z`. A record whose `x` equals [SENTINEL_MARKER] announces a
//! glyph: `y` is the character code and `z` the number of stroke records that follow.
//! Every other record is a stroke point, with `z` non-zero meaning "pen down".
//!
//! ```
//! use vector_plot_font::FontDatabase;
//!
//! let font: FontDatabase = "999 65 2\n0 0 0\n9 18 1\n".parse().unwrap();
//! assert_eq!(font.lookup('A').unwrap().strokes.len(), 2);
//! ```

mod database;
mod record;
mod resolver;

pub use database::{FontDatabase, MAX_STROKES};
pub use record::{FontRecord, SENTINEL_MARKER, parse_records};
pub use resolver::{GlyphResolver, UnresolvedGlyph};

/// Font loading error types
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("Failed to read font file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Record {record}: '{token}' is not a number")]
    Parse { record: usize, token: String },

    #[error("Font data ends in the middle of record {record}")]
    PartialRecord { record: usize },

    #[error("Record {record}: invalid glyph header ({reason})")]
    InvalidSentinel { record: usize, reason: &'static str },

    #[error("Glyph {character:?} declares {expected} strokes but the font ends after {found}")]
    Truncated {
        character: char,
        expected: usize,
        found: usize,
    },

    #[error(
        "Glyph {character:?} declares {expected} strokes but a new glyph starts at record {record}"
    )]
    SentinelInGlyph {
        character: char,
        expected: usize,
        record: usize,
    },

    #[error("Record {record} is a stroke outside of any glyph")]
    OrphanStroke { record: usize },
}

pub type Result<T> = std::result::Result<T, FontLoadError>;
