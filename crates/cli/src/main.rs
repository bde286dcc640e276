use std::{
    io::{self, stderr},
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};
use vector_plot::{
    FontDatabase, GcodeDialect, LayoutConfig, LayoutEngine, Plotter, ScaleBounds, ScaleFactor,
    Transport, WordBatch, WriterTransport,
};

mod preview;
mod prompt;
mod serial;
mod text;

use prompt::Prompter;
use serial::{DEFAULT_PORT, SerialConfig, SerialTransport};
use text::TextDocument;

/// Draw a text file on a pen plotter using a single-stroke font
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text file to draw (asked for when omitted)
    input: Option<PathBuf>,

    /// Font file made of `x y z` records
    #[arg(long, default_value = "SingleStrokeFont.txt")]
    font: PathBuf,

    /// Character height in millimetres (asked for when omitted or invalid)
    #[arg(long)]
    scale: Option<String>,

    /// Serial device the plotter is attached to
    #[arg(long, default_value = DEFAULT_PORT)]
    port: String,

    #[arg(long, default_value_t = 115_200)]
    baud: u32,

    /// Pause after every acknowledged batch, in milliseconds
    #[arg(long, default_value_t = 100)]
    pace_ms: u64,

    /// Print the G-code to stdout instead of talking to a plotter
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Also write an SVG preview of the drawing
    #[arg(long)]
    svg: Option<PathBuf>,

    #[arg(long, default_value_t = 100.0)]
    line_width: f32,

    /// Character advance in font units
    #[arg(long, default_value_t = 18.0)]
    char_width: f32,

    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    line_spacing: f32,

    #[arg(long, default_value_t = 1000)]
    feed_rate: u32,

    /// Verbose output - shows more detailed logs
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

impl Cli {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            line_width: self.line_width,
            char_width: self.char_width,
            line_spacing: self.line_spacing,
        }
    }

    fn dialect(&self) -> GcodeDialect {
        GcodeDialect {
            feed_rate: self.feed_rate,
            ..Default::default()
        }
    }

    fn serial_config(&self) -> SerialConfig {
        SerialConfig {
            path: self.port.clone(),
            baud_rate: self.baud,
            pace: Duration::from_millis(self.pace_ms),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "vplot={level},vector_plot={level},vector_plot_font={level}"
        ))
    });
    registry()
        .with(filter)
        .with(fmt::layer().with_writer(stderr))
        .init();

    let font = FontDatabase::open(&cli.font)
        .with_context(|| format!("Unable to load font {}", cli.font.display()))?;
    info!(glyphs = font.len(), "font loaded");

    let config = cli.layout_config();
    let mut prompter = Prompter::new(io::stdin().lock(), stderr());
    let scale = choose_scale(&cli, &config, &mut prompter)?;
    info!(scale = scale.get(), "scale factor");

    let input = match &cli.input {
        Some(path) => path.clone(),
        None => prompter.path("Enter the name of the text file")?,
    };
    let document = TextDocument::open(&input)?;

    let job = Job {
        engine: LayoutEngine::new(&font, config, scale),
        document: &document,
        preview: cli.svg.as_deref(),
    };
    let plotter = Plotter::new(cli.dialect());
    if cli.dry_run {
        job.run(&plotter, WriterTransport::new(io::stdout().lock()))
    } else {
        job.run(&plotter, SerialTransport::new(cli.serial_config()))
            .with_context(|| format!("Plotting over {} failed", cli.port))
    }
}

/// Use the scale given on the command line if it is valid, otherwise ask.
fn choose_scale<R: io::BufRead, W: io::Write>(
    cli: &Cli,
    config: &LayoutConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<ScaleFactor> {
    let bounds = ScaleBounds::default();
    if let Some(value) = &cli.scale {
        match bounds.parse(value, config) {
            Ok(scale) => return Ok(scale),
            Err(err) => warn!("Invalid --scale: {err}"),
        }
    }
    prompter.scale(&bounds, config)
}

/// A document ready to be laid out and drawn.
struct Job<'a> {
    engine: LayoutEngine<&'a FontDatabase>,
    document: &'a TextDocument,
    preview: Option<&'a Path>,
}

impl Job<'_> {
    /// Bring the device up, then lay out and send words one at a time.
    fn run<T: Transport>(mut self, plotter: &Plotter, transport: T) -> Result<()> {
        let session = plotter.open(transport)?;

        let mut sent: Vec<WordBatch> = Vec::new();
        let record = self.preview.is_some();
        let batches = self
            .engine
            .batches(self.document.words())
            .inspect(|batch| {
                if record {
                    sent.push(batch.clone());
                }
            });
        let summary = session.stream(batches)?;

        info!(
            words = summary.words,
            lines = summary.lines,
            commands = summary.commands,
            "done"
        );
        if !summary.unresolved.is_empty() {
            warn!(
                count = summary.unresolved.len(),
                "some characters had no stroke data and were left blank"
            );
        }

        if let Some(path) = self.preview {
            preview::write_preview(path, &sent, 5.0)
                .with_context(|| format!("Unable to write preview {}", path.display()))?;
            info!(path = %path.display(), "preview written");
        }
        Ok(())
    }
}
