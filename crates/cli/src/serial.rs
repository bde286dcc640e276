//! GRBL-style serial link: wake, wait for `$`, then one `ok` per line

use std::{
    io::{BufRead, BufReader, ErrorKind, Read, Write},
    thread,
    time::Duration,
};

use serialport::SerialPort;
use tracing::{debug, info, trace};
use vector_plot::{Transport, TransportError};

#[cfg(windows)]
pub const DEFAULT_PORT: &str = "COM3";
#[cfg(not(windows))]
pub const DEFAULT_PORT: &str = "/dev/ttyUSB0";

/// Byte the controller prints in its greeting once it accepts commands.
pub const READY_TOKEN: u8 = b'$';

#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub path: String,
    pub baud_rate: u32,
    /// Fixed wait after waking the device and after every acknowledged batch
    pub pace: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_PORT.to_owned(),
            baud_rate: 115_200,
            pace: Duration::from_millis(100),
        }
    }
}

/// Line protocol spoken over any byte stream.
pub struct GrblLink<D> {
    device: BufReader<D>,
}

impl<D: Read + Write> GrblLink<D> {
    pub fn new(device: D) -> Self {
        Self {
            device: BufReader::new(device),
        }
    }

    /// Nudge the controller with an empty line.
    pub fn wake(&mut self) -> Result<(), TransportError> {
        let device = self.device.get_mut();
        device.write_all(b"\n")?;
        device.flush()?;
        Ok(())
    }

    /// Discard input until `token` has been seen, then the rest of that line.
    pub fn await_token(&mut self, token: u8) -> Result<(), TransportError> {
        loop {
            let line = self.read_line()?;
            trace!(%line, "waiting for device");
            if line.as_bytes().contains(&token) {
                return Ok(());
            }
        }
    }

    /// Write each line and wait for its `ok` before writing the next.
    pub fn send_batch(&mut self, batch: &[String]) -> Result<(), TransportError> {
        for line in batch {
            let device = self.device.get_mut();
            device.write_all(line.as_bytes())?;
            device.write_all(b"\n")?;
            device.flush()?;

            self.await_ack(line)?;
        }
        Ok(())
    }

    fn await_ack(&mut self, sent: &str) -> Result<(), TransportError> {
        loop {
            let reply = self.read_line()?;
            let reply = reply.trim();
            if reply == "ok" {
                return Ok(());
            }
            if reply.starts_with("error") || reply.starts_with("ALARM") {
                return Err(TransportError::Rejected {
                    line: sent.to_owned(),
                    reply: reply.to_owned(),
                });
            }
            // Status reports, messages and blank lines carry no acknowledgement.
            trace!(reply, "ignoring device output");
        }
    }

    /// Read one line, riding out read timeouts.
    fn read_line(&mut self) -> Result<String, TransportError> {
        let mut buf = Vec::new();
        loop {
            match self.device.read_until(b'\n', &mut buf) {
                Ok(0) if buf.is_empty() => return Err(TransportError::Closed),
                Ok(_) if buf.ends_with(b"\n") => break,
                // End of stream after a partial line.
                Ok(0) => break,
                Ok(_) => continue,
                Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn into_inner(self) -> D {
        self.device.into_inner()
    }
}

/// [Transport] over a serial port.
pub struct SerialTransport {
    config: SerialConfig,
    link: Option<GrblLink<Box<dyn SerialPort>>>,
}

impl SerialTransport {
    pub fn new(config: SerialConfig) -> Self {
        Self { config, link: None }
    }

    fn link(&mut self) -> Result<&mut GrblLink<Box<dyn SerialPort>>, TransportError> {
        self.link.as_mut().ok_or(TransportError::Closed)
    }
}

impl Transport for SerialTransport {
    fn initialize(&mut self) -> Result<(), TransportError> {
        let port = serialport::new(&self.config.path, self.config.baud_rate)
            .timeout(Duration::from_millis(500))
            .open()
            .map_err(|err| TransportError::Open(format!("{}: {err}", self.config.path)))?;

        debug!(path = %self.config.path, baud = self.config.baud_rate, "port open");
        self.link = Some(GrblLink::new(port));
        Ok(())
    }

    fn await_ready(&mut self) -> Result<(), TransportError> {
        info!("Initializing plotter...");
        let pace = self.config.pace;
        let link = self.link()?;
        link.wake()?;
        thread::sleep(pace);
        link.await_token(READY_TOKEN)?;
        info!("Plotter ready to draw.");
        Ok(())
    }

    fn send(&mut self, batch: &[String]) -> Result<(), TransportError> {
        let pace = self.config.pace;
        self.link()?.send_batch(batch)?;
        thread::sleep(pace);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        if let Some(link) = self.link.take() {
            link.into_inner().flush()?;
            info!(path = %self.config.path, "port closed");
        }
        Ok(())
    }
}
