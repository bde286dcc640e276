use std::{fs, path::Path, str::SplitWhitespace};

use anyhow::{Context, Result};

/// A document to draw, split into words on whitespace.
pub struct TextDocument {
    contents: String,
}

impl TextDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Error opening text file {}", path.display()))?;
        Ok(Self { contents })
    }

    pub fn words(&self) -> SplitWhitespace<'_> {
        self.contents.split_whitespace()
    }
}

impl From<String> for TextDocument {
    fn from(contents: String) -> Self {
        Self { contents }
    }
}
