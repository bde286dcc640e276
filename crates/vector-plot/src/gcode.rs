//! Serialization of motion commands to the line-oriented G-code understood by the plotter

use vector_plot_core::{MotionCommand, PenState};

/// Parameters of the G-code flavor spoken by the device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GcodeDialect {
    /// `S` value that lowers the pen
    pub pen_down: u32,
    /// `S` value that raises the pen
    pub pen_up: u32,
    /// Feed rate set at the start of a session
    pub feed_rate: u32,
}

impl Default for GcodeDialect {
    fn default() -> Self {
        Self {
            pen_down: 1000,
            pen_up: 0,
            feed_rate: 1000,
        }
    }
}

impl GcodeDialect {
    /// One directive line, without terminator.
    pub fn directive(&self, command: &MotionCommand) -> String {
        match *command {
            MotionCommand::SetPen(PenState::Down) => format!("S{}", self.pen_down),
            MotionCommand::SetPen(PenState::Up) => format!("S{}", self.pen_up),
            MotionCommand::MoveTo { x, y, draw } => {
                let code = if draw { "G1" } else { "G0" };
                // Adding zero turns -0.0 into 0.0.
                format!("{code} X{:.2} Y{:.2}", x + 0.0, y + 0.0)
            }
        }
    }

    pub fn batch(&self, commands: &[MotionCommand]) -> Vec<String> {
        commands.iter().map(|c| self.directive(c)).collect()
    }

    /// Lines sent once the device is ready: home at feed rate, spindle (pen servo) on, pen up.
    pub fn preamble(&self) -> Vec<String> {
        vec![
            format!("G1 X0 Y0 F{}", self.feed_rate),
            "M3".to_owned(),
            format!("S{}", self.pen_up),
        ]
    }

    /// Lines sent after the last word: return to the origin.
    pub fn epilogue(&self) -> Vec<String> {
        vec!["G1 X0 Y0".to_owned()]
    }
}
