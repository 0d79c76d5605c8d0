//! Single-line character ranges addressing text in the host document.

use serde::{Deserialize, Serialize};

/// Half-open column range `[start, end)` on one line.
///
/// Columns count UTF-16 code units, the unit editor positions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Build a span; reversed columns are swapped so `end >= start` holds.
    pub fn new(line: usize, start: usize, end: usize) -> Self {
        if end < start {
            TextSpan {
                line,
                start: end,
                end: start,
            }
        } else {
            TextSpan { line, start, end }
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, column: usize) -> bool {
        (self.start..self.end).contains(&column)
    }

    /// True when both spans sit on the same line and share at least one column.
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.line == other.line && self.start < other.end && other.start < self.end
    }
}
