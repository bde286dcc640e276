//! Raw font records

use crate::{FontLoadError, Result};

/// `x` value marking a record as a glyph header.
pub const SENTINEL_MARKER: f32 = 999.0;

/// One `x y z` triple from a font stream.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontRecord {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl FontRecord {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Does this record announce a new glyph?
    pub fn is_sentinel(&self) -> bool {
        self.x == SENTINEL_MARKER
    }
}

impl From<(f32, f32, f32)> for FontRecord {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

/// Parse whitespace-separated numeric triples.
///
/// Line breaks carry no meaning; a font file normally has one record per line.
pub fn parse_records(text: &str) -> Result<Vec<FontRecord>> {
    let mut records = Vec::new();
    let mut tokens = text.split_whitespace();

    loop {
        let record = records.len();
        let Some(x) = tokens.next() else {
            break Ok(records);
        };

        let (Some(y), Some(z)) = (tokens.next(), tokens.next()) else {
            break Err(FontLoadError::PartialRecord { record });
        };

        records.push(FontRecord {
            x: parse_field(x, record)?,
            y: parse_field(y, record)?,
            z: parse_field(z, record)?,
        });
    }
}

fn parse_field(token: &str, record: usize) -> Result<f32> {
    token
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FontLoadError::Parse {
            record,
            token: token.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_line_layout() {
        let records = parse_records("999 65 2\n0 0 0   9.5\n-18 1\n").unwrap();
        assert_eq!(
            records,
            vec![
                FontRecord::new(999.0, 65.0, 2.0),
                FontRecord::new(0.0, 0.0, 0.0),
                FontRecord::new(9.5, -18.0, 1.0),
            ]
        );
        assert!(records[0].is_sentinel());
        assert!(!records[1].is_sentinel());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_records("999 65 2\n0 zero 0\n").unwrap_err();
        assert!(matches!(err, FontLoadError::Parse { record: 1, ref token } if token == "zero"));
    }

    #[test]
    fn test_parse_rejects_partial_record() {
        let err = parse_records("999 65 1\n3 4").unwrap_err();
        assert!(matches!(err, FontLoadError::PartialRecord { record: 1 }));
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_records(" \n\n").unwrap().is_empty());
    }
}
