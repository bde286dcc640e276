//! SVG preview of a plot

use std::{io, path::Path};

use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Path as SvgPath, Rectangle};
use vector_plot::{MotionCommand, WordBatch};

/// Build path data tracing every move, with device Y flipped to point down.
///
/// Returns the data and the document size. The origin is always inside the drawing,
/// since the plotter starts and ends there.
fn commands_to_svg_path<'a>(
    commands: impl IntoIterator<Item = &'a MotionCommand> + Clone,
    margin: f32,
) -> (Data, (f32, f32)) {
    let mut min_x = 0.0f32;
    let mut min_y = 0.0f32;
    let mut max_x = 0.0f32;
    let mut max_y = 0.0f32;

    for command in commands.clone() {
        if let MotionCommand::MoveTo { x, y, .. } = *command {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    let width = (max_x - min_x) + 2.0 * margin;
    let height = (max_y - min_y) + 2.0 * margin;

    let mut data = Data::new().move_to((margin - min_x, margin + max_y));

    for command in commands {
        if let MotionCommand::MoveTo { x, y, draw } = *command {
            let point = (x - min_x + margin, max_y - y + margin);
            data = if draw {
                data.line_to(point)
            } else {
                data.move_to(point)
            };
        }
    }

    (data, (width, height))
}

/// Write every word of the plot into an SVG file at `path`.
pub fn write_preview(path: &Path, batches: &[WordBatch], margin: f32) -> io::Result<()> {
    let commands = batches.iter().flat_map(|batch| batch.commands.iter());
    let (data, (width, height)) = commands_to_svg_path(commands, margin);

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let strokes = SvgPath::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 0.3)
        .set("d", data);

    let document = Document::new()
        .add(background)
        .add(strokes)
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}mm"))
        .set("height", format!("{height}mm"));

    svg::save(path, &document)
}
