//! Values passed between pipeline stages.
//!
//! Each value is owned by exactly one stage at a time and dropped once the
//! next stage has consumed it.

use std::fmt;

use super::{ColorKey, PixelGrid};

/// A URL read from the input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlEvent {
    pub url: String,
}

impl UrlEvent {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Outcome of fetching one URL. `grid == None` is a soft failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFetchResult {
    pub url: String,
    pub grid: Option<PixelGrid>,
}

impl ImageFetchResult {
    pub fn loaded(url: impl Into<String>, grid: PixelGrid) -> Self {
        Self {
            url: url.into(),
            grid: Some(grid),
        }
    }

    pub fn failed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            grid: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.grid.is_some()
    }
}

/// Most frequent colors of one image, most frequent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedColors {
    pub url: String,
    pub colors: Vec<ColorKey>,
}

/// One line of the output file, including its trailing newline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord(String);

impl OutputRecord {
    pub(crate) fn new(line: String) -> Self {
        Self(line)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
