//! Reader for line-oriented adjacency text.
//!
//! Each non-blank line lists one source vertex and its weighted neighbours:
//!
//! ```text
//! 10: 20,9 30,4
//! 20: 30,9
//! 40:
//! ```
//!
//! The source id is followed by `:`, then whitespace-separated
//! `target,weight` pairs. A line with no pairs declares an isolated vertex.
//! Weights are parsed as signed integers; rejecting non-positive ones is left
//! to [`pathknn_core::Graph::build`].

use std::{
    io::{self, BufRead},
    num::ParseIntError,
};

use pathknn_core::{AdjacencyRow, VertexId};
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors raised while reading adjacency text.
///
/// Line numbers are one-based.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AdjacencyParseError {
    /// The line has content but no `:` after the source id.
    #[error("line {line}: missing `:` after the source id")]
    MissingSeparator {
        /// Offending line.
        line: usize,
    },
    /// The source id is not an unsigned integer.
    #[error("line {line}: invalid source id `{raw}`")]
    InvalidSourceId {
        /// Offending line.
        line: usize,
        /// Text found in place of the id.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        error: ParseIntError,
    },
    /// A pair is not of the form `target,weight`.
    #[error("line {line}: expected `target,weight`, found `{raw}`")]
    InvalidPair {
        /// Offending line.
        line: usize,
        /// Text of the malformed pair.
        raw: String,
    },
    /// The target id of a pair is not an unsigned integer.
    #[error("line {line}: invalid target id `{raw}`")]
    InvalidTargetId {
        /// Offending line.
        line: usize,
        /// Text found in place of the id.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        error: ParseIntError,
    },
    /// The weight of a pair is not an integer.
    #[error("line {line}: invalid weight `{raw}`")]
    InvalidWeight {
        /// Offending line.
        line: usize,
        /// Text found in place of the weight.
        raw: String,
        /// Underlying integer parse failure.
        #[source]
        error: ParseIntError,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read adjacency input: {0}")]
    Io(#[from] io::Error),
}

impl AdjacencyParseError {
    /// Returns the stable machine-readable code for this error.
    ///
    /// # Examples
    /// ```
    /// use pathknn_providers_text::parse_line;
    ///
    /// let err = parse_line(3, "12 4,5").expect_err("separator is missing");
    /// assert_eq!(err.code(), "TEXT_MISSING_SEPARATOR");
    /// assert_eq!(err.line(), Some(3));
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingSeparator { .. } => "TEXT_MISSING_SEPARATOR",
            Self::InvalidSourceId { .. } => "TEXT_INVALID_SOURCE_ID",
            Self::InvalidPair { .. } => "TEXT_INVALID_PAIR",
            Self::InvalidTargetId { .. } => "TEXT_INVALID_TARGET_ID",
            Self::InvalidWeight { .. } => "TEXT_INVALID_WEIGHT",
            Self::Io(_) => "TEXT_IO",
        }
    }

    /// Returns the offending line, when the error is tied to one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MissingSeparator { line }
            | Self::InvalidSourceId { line, .. }
            | Self::InvalidPair { line, .. }
            | Self::InvalidTargetId { line, .. }
            | Self::InvalidWeight { line, .. } => Some(*line),
            Self::Io(_) => None,
        }
    }
}

/// Parses one line of adjacency text.
///
/// Returns `Ok(None)` for blank lines.
///
/// # Errors
/// Returns an [`AdjacencyParseError`] naming `line` when the text is
/// malformed.
///
/// # Examples
/// ```
/// use pathknn_core::VertexId;
/// use pathknn_providers_text::parse_line;
///
/// let row = parse_line(1, "10: 20,9 30,4")?.expect("line is not blank");
/// assert_eq!(row.source(), VertexId::new(10));
/// assert_eq!(row.edges(), &[(VertexId::new(20), 9), (VertexId::new(30), 4)]);
/// assert!(parse_line(2, "   ")?.is_none());
/// # Ok::<(), pathknn_providers_text::AdjacencyParseError>(())
/// ```
pub fn parse_line(line: usize, text: &str) -> Result<Option<AdjacencyRow>, AdjacencyParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let (source, pairs) = text
        .split_once(':')
        .ok_or(AdjacencyParseError::MissingSeparator { line })?;
    let source = parse_id(source.trim()).map_err(|(raw, error)| {
        AdjacencyParseError::InvalidSourceId { line, raw, error }
    })?;
    let edges = pairs
        .split_whitespace()
        .map(|pair| parse_pair(line, pair))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(AdjacencyRow::new(source, edges)))
}

fn parse_pair(line: usize, pair: &str) -> Result<(VertexId, i64), AdjacencyParseError> {
    let (target, weight) = pair
        .split_once(',')
        .ok_or_else(|| AdjacencyParseError::InvalidPair {
            line,
            raw: pair.to_owned(),
        })?;
    let target = parse_id(target).map_err(|(raw, error)| AdjacencyParseError::InvalidTargetId {
        line,
        raw,
        error,
    })?;
    let weight = weight
        .parse::<i64>()
        .map_err(|error| AdjacencyParseError::InvalidWeight {
            line,
            raw: weight.to_owned(),
            error,
        })?;
    Ok((target, weight))
}

fn parse_id(raw: &str) -> Result<VertexId, (String, ParseIntError)> {
    raw.parse::<u64>()
        .map(VertexId::new)
        .map_err(|error| (raw.to_owned(), error))
}

/// Iterator over the rows of a buffered adjacency source.
///
/// Blank lines are skipped. Iteration yields the first error it meets and
/// should be stopped there.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use pathknn_providers_text::AdjacencyReader;
///
/// let rows = AdjacencyReader::new(Cursor::new("1: 2,5\n\n3:\n"))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(rows.len(), 2);
/// # Ok::<(), pathknn_providers_text::AdjacencyParseError>(())
/// ```
#[derive(Debug)]
pub struct AdjacencyReader<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R: BufRead> AdjacencyReader<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for AdjacencyReader<R> {
    type Item = Result<AdjacencyRow, AdjacencyParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(err) => return Some(Err(err.into())),
            };
            self.line += 1;
            match parse_line(self.line, &text) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => {}
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Reads every row from `reader`.
///
/// # Errors
/// Returns the first [`AdjacencyParseError`] encountered.
#[instrument(name = "providers.text.read", err, skip(reader))]
pub fn read_rows<R: BufRead>(reader: R) -> Result<Vec<AdjacencyRow>, AdjacencyParseError> {
    let rows = AdjacencyReader::new(reader).collect::<Result<Vec<_>, _>>()?;
    debug!(rows = rows.len(), "adjacency rows read");
    Ok(rows)
}
