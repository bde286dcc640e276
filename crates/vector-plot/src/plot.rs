//! Plot session: preamble, one send per word, return to origin

use tracing::{debug, trace};
use vector_plot_font::UnresolvedGlyph;

use crate::{GcodeDialect, Transport, TransportError, WordBatch};

/// What a finished plot did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotSummary {
    pub words: usize,
    pub lines: usize,
    /// Motion commands generated for words (excluding preamble and epilogue)
    pub commands: usize,
    pub unresolved: Vec<UnresolvedGlyph>,
}

/// Streams laid-out words to a [Transport].
#[derive(Debug, Clone, Default)]
pub struct Plotter {
    dialect: GcodeDialect,
}

impl Plotter {
    pub fn new(dialect: GcodeDialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> &GcodeDialect {
        &self.dialect
    }

    /// Open `transport`, wait for the device and send the preamble.
    ///
    /// Nothing has been laid out yet when this returns, so a link that fails to come up
    /// costs no rendering work.
    pub fn open<T: Transport>(
        &self,
        mut transport: T,
    ) -> Result<PlotSession<'_, T>, TransportError> {
        transport.initialize()?;
        transport.await_ready()?;
        debug!("device ready");

        for line in self.dialect.preamble() {
            transport.send(&[line])?;
        }

        Ok(PlotSession {
            dialect: &self.dialect,
            transport,
        })
    }

    /// Run a whole session over `transport`.
    ///
    /// `batches` is only pulled from once the device is ready.
    pub fn plot<T, I>(&self, batches: I, transport: T) -> Result<PlotSummary, TransportError>
    where
        T: Transport,
        I: IntoIterator<Item = WordBatch>,
    {
        self.open(transport)?.stream(batches)
    }
}

/// An open link that words can be streamed to.
pub struct PlotSession<'p, T> {
    dialect: &'p GcodeDialect,
    transport: T,
}

impl<T: Transport> PlotSession<'_, T> {
    /// Send every batch in order, one `send` each, then return to the origin and close.
    ///
    /// The first transport error ends the session and is returned; nothing is retried.
    pub fn stream<I>(mut self, batches: I) -> Result<PlotSummary, TransportError>
    where
        I: IntoIterator<Item = WordBatch>,
    {
        let mut summary = PlotSummary::default();
        for batch in batches {
            if summary.words == 0 || batch.wrapped {
                summary.lines += 1;
            }
            summary.words += 1;
            summary.commands += batch.commands.len();
            summary.unresolved.extend(batch.unresolved);

            if batch.commands.is_empty() {
                trace!(word = %batch.word, "nothing to draw");
                continue;
            }

            let lines = self.dialect.batch(&batch.commands);
            trace!(word = %batch.word, lines = lines.len(), "sending word");
            self.transport.send(&lines)?;
        }

        self.transport.send(&self.dialect.epilogue())?;
        self.transport.shutdown()?;

        debug!(
            words = summary.words,
            lines = summary.lines,
            commands = summary.commands,
            "plot finished"
        );
        Ok(summary)
    }
}
