use vector_plot::{
    FontDatabase, LayoutConfig, LayoutEngine, MotionCommand, PenState, Plotter, ScaleFactor,
    Transport, TransportError, WriterTransport,
};

fn font_with_a() -> FontDatabase {
    "999 65 2\n0 0 0\n9 18 1\n".parse().unwrap()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn assert_move(command: &MotionCommand, x: f32, y: f32, draw: bool) {
    match *command {
        MotionCommand::MoveTo {
            x: got_x,
            y: got_y,
            draw: got_draw,
        } => assert!(
            close(got_x, x) && close(got_y, y) && got_draw == draw,
            "expected move to ({x}, {y}, {draw}), got {command:?}"
        ),
        _ => panic!("expected a move, got {command:?}"),
    }
}

#[test]
fn test_two_words_on_one_line() {
    let font = font_with_a();
    let config = LayoutConfig::default();
    let scale = ScaleFactor::from_multiplier(5.0 / 18.0);
    let mut engine = LayoutEngine::new(&font, config, scale);

    let batches: Vec<_> = engine.batches("A A".split_whitespace()).collect();
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| !b.wrapped && b.unresolved.is_empty()));

    // First line sits one pitch (-5 - 5) below the origin.
    let first = &batches[0].commands;
    assert_eq!(first.len(), 4);
    assert_eq!(first[0], MotionCommand::SetPen(PenState::Up));
    assert_move(&first[1], 0.0, -10.0, false);
    assert_eq!(first[2], MotionCommand::SetPen(PenState::Down));
    assert_move(&first[3], 2.5, -5.0, true);

    // Second word is offset by one character and one space.
    let second = &batches[1].commands;
    assert_eq!(second.len(), 4);
    assert_move(&second[1], 10.0, -10.0, false);
    assert_move(&second[3], 12.5, -5.0, true);

    assert!(close(engine.cursor().x, 20.0));
    assert!(close(engine.cursor().remaining, 80.0));
}

#[test]
fn test_wrap_moves_down_one_pitch_before_rendering() {
    let font = font_with_a();
    let config = LayoutConfig {
        line_width: 100.0,
        char_width: 18.0,
        ..Default::default()
    };
    let s = 8.0 / 18.0;
    let scale = ScaleFactor::from_multiplier(s);
    let mut engine = LayoutEngine::new(&font, config, scale);

    engine.layout_word("AAAAAAAA");
    let before = engine.cursor();
    assert!(config.measure_word("AAAA", scale) > before.remaining);

    let batch = engine.layout_word("AAAA");
    assert!(batch.wrapped);

    let expected_y = before.y + (config.line_spacing - config.char_width * s);
    assert_move(&batch.commands[0], 0.0, expected_y, false);
    assert_move(&batch.commands[2], 0.0, expected_y, false);
}

#[test]
fn test_unresolved_character_leaves_a_gap() {
    let font = font_with_a();
    let scale = ScaleFactor::from_multiplier(0.5);
    let mut engine = LayoutEngine::new(&font, LayoutConfig::default(), scale);

    let batch = engine.layout_word("A%A");
    assert_eq!(batch.commands.len(), 8);
    assert_eq!(batch.unresolved.len(), 1);
    assert_eq!(batch.unresolved[0].character, '%');
    assert_eq!(batch.unresolved[0].word, "A%A");

    // Third character starts two cells (2 * 9) from the left margin.
    assert_move(&batch.commands[5], 18.0, -14.0, false);
}

#[test]
fn test_glyph_commands_never_interleave() {
    let font: FontDatabase = "999 66 2\n0 0 0\n1 1 1\n999 67 2\n0 0 0\n1 1 1\n"
        .parse()
        .unwrap();
    let mut engine =
        LayoutEngine::new(&font, LayoutConfig::default(), ScaleFactor::from_multiplier(1.0));

    let batch = engine.layout_word("BC");
    let pens: Vec<_> = batch
        .commands
        .iter()
        .step_by(2)
        .map(|c| match c {
            MotionCommand::SetPen(pen) => *pen,
            other => panic!("expected a pen change, got {other:?}"),
        })
        .collect();
    assert_eq!(
        pens,
        [PenState::Up, PenState::Down, PenState::Up, PenState::Down]
    );
    assert_move(&batch.commands[1], 0.0, -23.0, false);
    assert_move(&batch.commands[3], 1.0, -22.0, true);
    assert_move(&batch.commands[5], 18.0, -23.0, false);
    assert_move(&batch.commands[7], 19.0, -22.0, true);
}

#[test]
fn test_dry_run_output() {
    let font = font_with_a();
    let mut engine =
        LayoutEngine::new(&font, LayoutConfig::default(), ScaleFactor::from_multiplier(0.5));
    let batches: Vec<_> = engine.batches(["A"]).collect();

    let mut transport = WriterTransport::new(Vec::new());
    let summary = Plotter::default().plot(batches, &mut transport).unwrap();
    assert_eq!(summary.words, 1);

    let text = String::from_utf8(transport.into_inner()).unwrap();
    assert_eq!(
        text,
        "G1 X0 Y0 F1000\nM3\nS0\nS0\nG0 X0.00 Y-14.00\nS1000\nG1 X4.50 Y-5.00\nG1 X0 Y0\n"
    );
}

/// Accepts a fixed number of batches, then fails.
struct FlakyLink {
    remaining: usize,
    sent: Vec<Vec<String>>,
    shut_down: bool,
}

impl Transport for FlakyLink {
    fn initialize(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn await_ready(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn send(&mut self, batch: &[String]) -> Result<(), TransportError> {
        if self.remaining == 0 {
            return Err(TransportError::Closed);
        }
        self.remaining -= 1;
        self.sent.push(batch.to_vec());
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        self.shut_down = true;
        Ok(())
    }
}

#[test]
fn test_transport_failure_aborts_the_plot() {
    let font = font_with_a();
    let mut engine =
        LayoutEngine::new(&font, LayoutConfig::default(), ScaleFactor::from_multiplier(0.5));
    let batches: Vec<_> = engine.batches(["A", "A", "A"]).collect();

    let mut link = FlakyLink {
        remaining: 4,
        sent: Vec::new(),
        shut_down: false,
    };
    let err = Plotter::default().plot(batches, &mut link).unwrap_err();

    assert!(matches!(err, TransportError::Closed));
    // Preamble plus the first word only.
    assert_eq!(link.sent.len(), 4);
    assert!(!link.shut_down);
}

/// A port that never opens.
struct DeadPort;

impl Transport for DeadPort {
    fn initialize(&mut self) -> Result<(), TransportError> {
        Err(TransportError::Open("no such device".into()))
    }

    fn await_ready(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn send(&mut self, _batch: &[String]) -> Result<(), TransportError> {
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

#[test]
fn test_failed_open_lays_out_nothing() {
    let font = font_with_a();
    let mut engine =
        LayoutEngine::new(&font, LayoutConfig::default(), ScaleFactor::from_multiplier(0.5));
    let start = engine.cursor();

    let err = Plotter::default()
        .plot(engine.batches(["A", "%", "A"]), DeadPort)
        .unwrap_err();

    assert!(matches!(err, TransportError::Open(_)));
    // No word was measured or rendered, so no glyph lookups were reported either.
    assert_eq!(engine.cursor(), start);
}
