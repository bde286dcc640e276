//! Link to the drawing device

use std::io::{self, Write};

/// Transport error types. All of them abort the plot.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Unable to open link: {0}")]
    Open(String),

    #[error("Link I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Device rejected '{line}': {reply}")]
    Rejected { line: String, reply: String },

    #[error("Link closed by device")]
    Closed,
}

/// A strictly request/acknowledge link to a plotter.
///
/// Each `send` carries one batch of directive lines and returns only once the device has
/// acknowledged all of it.
pub trait Transport {
    /// Open the link.
    fn initialize(&mut self) -> Result<(), TransportError>;

    /// Block until the device says it accepts motion.
    fn await_ready(&mut self) -> Result<(), TransportError>;

    /// Deliver one batch of lines and wait for acknowledgement.
    fn send(&mut self, batch: &[String]) -> Result<(), TransportError>;

    /// Release the link.
    fn shutdown(&mut self) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn initialize(&mut self) -> Result<(), TransportError> {
        (**self).initialize()
    }

    fn await_ready(&mut self) -> Result<(), TransportError> {
        (**self).await_ready()
    }

    fn send(&mut self, batch: &[String]) -> Result<(), TransportError> {
        (**self).send(batch)
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        (**self).shutdown()
    }
}

/// Writes every batch to a [Write], one directive per line. Acknowledges immediately.
pub struct WriterTransport<W> {
    writer: W,
    batches: usize,
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, batches: 0 }
    }

    /// Number of batches sent so far.
    pub fn batches(&self) -> usize {
        self.batches
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn initialize(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn await_ready(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn send(&mut self, batch: &[String]) -> Result<(), TransportError> {
        for line in batch {
            writeln!(self.writer, "{line}")?;
        }
        self.batches += 1;
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        self.writer.flush()?;
        Ok(())
    }
}
