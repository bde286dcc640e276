use std::path::PathBuf;

use vector_plot_core::PenState;
use vector_plot_font::{FontDatabase, FontLoadError, GlyphResolver};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fonts/block-caps.txt")
}

#[test]
fn test_loads_fixture_font() {
    let font = FontDatabase::open(fixture()).unwrap();
    assert_eq!(font.characters(), vec!['E', 'H', 'I', 'L', 'O', 'T']);

    let resolver = GlyphResolver::new(&font);
    let (strokes, count) = resolver.resolve('L').unwrap();
    assert_eq!(count, 3);
    assert_eq!(strokes[0].pen, PenState::Up);
    assert_eq!((strokes[2].x, strokes[2].y), (12.0, 0.0));
    assert!(resolver.resolve('l').is_none());
}

#[test]
fn test_sentinel_round_trip() {
    let font: FontDatabase = "999 65 2\n1.5 2.5 0\n3.5 4.5 1\n".parse().unwrap();
    let resolver = GlyphResolver::new(&font);

    let (strokes, count) = resolver.resolve('A').unwrap();
    assert_eq!(count, 2);
    assert_eq!((strokes[0].x, strokes[0].y, strokes[0].pen), (1.5, 2.5, PenState::Up));
    assert_eq!((strokes[1].x, strokes[1].y, strokes[1].pen), (3.5, 4.5, PenState::Down));
}

#[test]
fn test_desynchronized_font_fails_at_load() {
    // 'A' claims three strokes, swallowing the header of 'B'.
    let err = "999 65 3\n0 0 0\n1 1 1\n999 66 1\n2 2 1\n"
        .parse::<FontDatabase>()
        .unwrap_err();
    assert!(matches!(err, FontLoadError::SentinelInGlyph { character: 'A', .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = FontDatabase::open(fixture().with_file_name("does-not-exist.txt")).unwrap_err();
    assert!(matches!(err, FontLoadError::Io(_)));
}
