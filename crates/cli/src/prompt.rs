//! Interactive questions on a terminal

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Result, bail};
use vector_plot::{LayoutConfig, ScaleBounds, ScaleFactor};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for a character height until a valid one is given.
    pub fn scale(&mut self, bounds: &ScaleBounds, config: &LayoutConfig) -> Result<ScaleFactor> {
        loop {
            write!(
                self.output,
                "Enter a character height between {} and {}: ",
                bounds.min, bounds.max
            )?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match bounds.parse(&answer, config) {
                Ok(scale) => return Ok(scale),
                Err(err) => writeln!(self.output, "Invalid input! {err}.")?,
            }
        }
    }

    /// Ask for a file name; blank answers are asked again.
    pub fn path(&mut self, question: &str) -> Result<PathBuf> {
        loop {
            write!(self.output, "{question}: ")?;
            self.output.flush()?;

            let answer = self.read_line()?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(PathBuf::from(answer));
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended before an answer was given");
        }
        Ok(line)
    }
}
