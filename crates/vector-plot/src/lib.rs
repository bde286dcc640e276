//! `vector-plot` is a library for drawing text with a pen plotter
//! using a single-stroke vector font.
//!
//! Words are laid out left to right with a fixed character cell, wrapped when the next
//! word would overflow the line, and turned into an ordered list of pen and move commands.
//! Those commands are serialized as G-code and handed to a [Transport] one word at a time.
//!
//! ```
//! use vector_plot::{FontDatabase, LayoutConfig, LayoutEngine, ScaleBounds};
//!
//! let font: FontDatabase = "999 73 2\n6 0 0\n6 18 1\n".parse().unwrap();
//! let config = LayoutConfig::default();
//! let scale = ScaleBounds::default().parse("5", &config).unwrap();
//!
//! let mut engine = LayoutEngine::new(&font, config, scale);
//! let batches: Vec<_> = engine.batches("I I".split_whitespace()).collect();
//! assert_eq!(batches.len(), 2);
//! assert_eq!(batches[0].commands.len(), 4);
//! ```

mod gcode;
mod generate;
mod layout;
mod plot;
mod scale;
mod transport;

pub use gcode::GcodeDialect;
pub use generate::{RenderedWord, render_word};
pub use layout::{LayoutConfig, LayoutEngine, WordBatch};
pub use plot::{PlotSession, PlotSummary, Plotter};
pub use scale::{ScaleBounds, ScaleError, ScaleFactor};
pub use transport::{Transport, TransportError, WriterTransport};

pub use vector_plot_core::{
    GlyphEntry, GlyphSource, LayoutCursor, MotionCommand, PenState, StrokePoint,
};
pub use vector_plot_font::{FontDatabase, FontLoadError, GlyphResolver, UnresolvedGlyph};
