//! Qualifiers: parsed, replayable path expressions.
//!
//! A qualifier turns a delimited path such as `"a.b.0.c"` into an ordered
//! sequence of unescaped segments, handed out one at a time through a cursor.
//! Two forms share the [`Qualifier`] interface:
//!
//! - [`CompiledQualifier`] parses the whole path up front. Construction costs
//!   more, every traversal after that is cheap. Use it for paths that are
//!   reused many times.
//! - [`LazyQualifier`] keeps the original string and scans for the next
//!   segment on demand. Construction is free, each traversal pays for the
//!   scan. Use it for one-off paths.
//!
//! Both forms produce identical segments for identical input.
//!
//! # Syntax
//!
//! - The delimiter (default `.`) splits segments, empty segments included.
//! - `\` escapes the next character: `\.` is a literal delimiter and `\\` a
//!   literal backslash. Any other escaped character stands for itself.
//! - An empty path is a single empty segment.
//!
//! ```
//! use pathwise::{CompiledQualifier, Qualifier};
//!
//! let mut qual = CompiledQualifier::new(r"a\.b.c\.c\\.d")?;
//! assert_eq!(qual.segments().collect::<Vec<_>>(), vec!["a.b", r"c.c\", "d"]);
//!
//! assert_eq!(qual.next_segment().map(|(s, more)| (s.into_owned(), more)), Some(("a.b".to_string(), true)));
//! qual.reset();
//! assert_eq!(qual.to_string(), r"a\.b.c\.c\\.d");
//! # Ok::<(), pathwise::QualifierError>(())
//! ```

use std::{borrow::Cow, fmt};

use thiserror::Error;

use crate::constants::{ESCAPE, MAX_SEGMENTS};

pub mod compiled;
pub mod lazy;

pub use compiled::CompiledQualifier;
pub use lazy::LazyQualifier;

/// Errors raised while constructing a qualifier.
///
/// These are configuration errors: they surface when the qualifier is built,
/// never later during a traversal.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QualifierError {
    /// The delimiter collides with the escape character.
    #[error("Invalid delimiter {delimiter:?}: it is reserved as the escape character")]
    InvalidDelimiter { delimiter: char },

    /// The compiled form cannot hold this many segments.
    #[error("Qualifier has {count} segments, the compiled form holds at most {max}")]
    TooManySegments { count: usize, max: usize },
}

impl QualifierError {
    /// Check if this error is caused by the chosen delimiter
    pub fn is_delimiter_error(&self) -> bool {
        matches!(self, QualifierError::InvalidDelimiter { .. })
    }

    /// Check if this error is caused by the segment ceiling
    pub fn is_too_long(&self) -> bool {
        matches!(self, QualifierError::TooManySegments { .. })
    }
}

// Conversion from QualifierError to the main Error type
impl From<QualifierError> for crate::Error {
    fn from(err: QualifierError) -> Self {
        crate::Error::Qualifier(err)
    }
}

/// A cursor over the segments of a path.
///
/// `next_segment` hands out segments in order together with a flag telling
/// whether another segment follows. Once the cursor is exhausted it returns
/// `None` until [`reset`](Qualifier::reset) rewinds it.
///
/// Cursors are not meant to be shared between traversals running at the same
/// time. [`copy`](Qualifier::copy) returns an independent cursor over the same
/// parsed data instead.
pub trait Qualifier: fmt::Display {
    /// Advances the cursor, returning the segment and whether more follow.
    fn next_segment(&mut self) -> Option<(Cow<'_, str>, bool)>;

    /// Rewinds the cursor to the first segment.
    fn reset(&mut self);

    /// Returns an independent cursor positioned at the first segment.
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// Like [`copy`](Qualifier::copy), for qualifiers behind a trait object.
    fn boxed_copy(&self) -> Box<dyn Qualifier + '_>;

    /// The delimiter this qualifier was parsed with.
    fn delimiter(&self) -> char;

    /// Reads every segment from the start and leaves the cursor reset.
    fn to_segments(&mut self) -> Vec<String> {
        self.reset();
        let mut segments = Vec::new();
        while let Some((segment, _)) = self.next_segment() {
            segments.push(segment.into_owned());
        }
        self.reset();
        segments
    }
}

/// Rejects delimiters that cannot be told apart from the escape character.
pub(crate) fn check_delimiter(delimiter: char) -> Result<(), QualifierError> {
    if delimiter == ESCAPE {
        tracing::debug!(?delimiter, "rejecting qualifier delimiter");
        return Err(QualifierError::InvalidDelimiter { delimiter });
    }
    Ok(())
}

/// Scans one segment from the start of `input`.
///
/// Returns the unescaped segment and, if the segment was closed by an
/// unescaped delimiter, the byte offset just past that delimiter. Segments
/// without escapes borrow from `input`. A dangling escape at the very end is
/// dropped.
pub(crate) fn scan_segment(input: &str, delimiter: char) -> (Cow<'_, str>, Option<usize>) {
    let mut unescaped: Option<String> = None;
    let mut escape_pending = false;

    for (i, c) in input.char_indices() {
        if escape_pending {
            escape_pending = false;
            if let Some(buf) = unescaped.as_mut() {
                buf.push(c);
            }
            continue;
        }
        if c == ESCAPE {
            escape_pending = true;
            unescaped.get_or_insert_with(|| input[..i].to_string());
            continue;
        }
        if c == delimiter {
            let segment = match unescaped {
                Some(buf) => Cow::Owned(buf),
                None => Cow::Borrowed(&input[..i]),
            };
            return (segment, Some(i + c.len_utf8()));
        }
        if let Some(buf) = unescaped.as_mut() {
            buf.push(c);
        }
    }

    let segment = match unescaped {
        Some(buf) => Cow::Owned(buf),
        None => Cow::Borrowed(input),
    };
    (segment, None)
}

/// Splits a whole path into unescaped segments.
pub(crate) fn split_segments(path: &str, delimiter: char) -> Vec<String> {
    let mut segments = Vec::with_capacity(path.matches(delimiter).count() + 1);
    let mut rest = path;
    loop {
        let (segment, next) = scan_segment(rest, delimiter);
        segments.push(segment.into_owned());
        match next {
            Some(offset) => rest = &rest[offset..],
            None => return segments,
        }
    }
}

/// Escapes a single segment so it survives a round trip through the parser.
///
/// ```
/// # use pathwise::qualifier::escape_segment;
/// assert_eq!(escape_segment("a.b", '.'), r"a\.b");
/// assert_eq!(escape_segment(r"c\", '.'), r"c\\");
/// assert_eq!(escape_segment("plain", '.'), "plain");
/// ```
pub fn escape_segment(segment: &str, delimiter: char) -> Cow<'_, str> {
    if !segment.contains([delimiter, ESCAPE]) {
        return Cow::Borrowed(segment);
    }
    let mut escaped = String::with_capacity(segment.len() + 4);
    for c in segment.chars() {
        if c == delimiter || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    Cow::Owned(escaped)
}

/// Writes segments joined by `delimiter`, escaping each one.
pub(crate) fn write_escaped<'s>(
    f: &mut fmt::Formatter<'_>,
    segments: impl IntoIterator<Item = &'s str>,
    delimiter: char,
) -> fmt::Result {
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            write!(f, "{delimiter}")?;
        }
        write!(f, "{}", escape_segment(segment, delimiter))?;
    }
    Ok(())
}

/// Checks the number of parsed segments against the compiled ceiling.
pub(crate) fn check_len(count: usize) -> Result<(), QualifierError> {
    if count > MAX_SEGMENTS {
        tracing::debug!(count, max = MAX_SEGMENTS, "qualifier exceeds segment ceiling");
        return Err(QualifierError::TooManySegments {
            count,
            max: MAX_SEGMENTS,
        });
    }
    Ok(())
}
