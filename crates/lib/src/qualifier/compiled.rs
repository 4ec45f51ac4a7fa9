//! The eager qualifier form.

use std::{borrow::Cow, fmt, str::FromStr, sync::Arc};

use super::{Qualifier, QualifierError, check_delimiter, check_len, split_segments, write_escaped};
use crate::constants::DEFAULT_DELIMITER;

/// A qualifier parsed in full at construction time.
///
/// The segment list is immutable and shared: [`copy`](Qualifier::copy) and
/// `clone` hand out new cursors over the same `Arc`, so keeping one compiled
/// qualifier per frequently used path costs a single parse.
///
/// ```
/// use pathwise::{CompiledQualifier, Qualifier};
///
/// let qual = CompiledQualifier::with_delimiter("a/b/0", '/')?;
/// assert_eq!(qual.len(), 3);
/// assert_eq!(qual.to_string(), "a/b/0");
/// # Ok::<(), pathwise::QualifierError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CompiledQualifier {
    segments: Arc<[String]>,
    index: usize,
    delimiter: char,
}

impl CompiledQualifier {
    /// Parses `path` using the default delimiter.
    ///
    /// # Errors
    /// Returns [`QualifierError::TooManySegments`] if the path splits into more
    /// than [`MAX_SEGMENTS`](crate::constants::MAX_SEGMENTS) segments.
    pub fn new(path: &str) -> Result<Self, QualifierError> {
        Self::with_delimiter(path, DEFAULT_DELIMITER)
    }

    /// Parses `path` using a custom delimiter.
    ///
    /// # Errors
    /// Fails if the delimiter is the escape character or the path has too
    /// many segments.
    pub fn with_delimiter(path: &str, delimiter: char) -> Result<Self, QualifierError> {
        check_delimiter(delimiter)?;
        let segments = split_segments(path, delimiter);
        check_len(segments.len())?;
        Ok(Self {
            segments: segments.into(),
            index: 0,
            delimiter,
        })
    }

    /// Builds a qualifier directly from already unescaped segments.
    ///
    /// An empty iterator yields the single empty segment, the same as
    /// parsing an empty path.
    pub fn from_segments<I, S>(segments: I, delimiter: char) -> Result<Self, QualifierError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_delimiter(delimiter)?;
        let mut segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            segments.push(String::new());
        }
        check_len(segments.len())?;
        Ok(Self {
            segments: segments.into(),
            index: 0,
            delimiter,
        })
    }

    /// Returns an iterator over all segments, independent of the cursor.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the number of segments. Never zero.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`: a qualifier holds at least one segment.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments not yet handed out by the cursor.
    pub fn remaining(&self) -> usize {
        self.segments.len().saturating_sub(self.index)
    }
}

impl Qualifier for CompiledQualifier {
    fn next_segment(&mut self) -> Option<(Cow<'_, str>, bool)> {
        let segment = self.segments.get(self.index)?;
        self.index += 1;
        let has_more = self.index < self.segments.len();
        Some((Cow::Borrowed(segment.as_str()), has_more))
    }

    fn reset(&mut self) {
        self.index = 0;
    }

    fn copy(&self) -> Self {
        Self {
            segments: Arc::clone(&self.segments),
            index: 0,
            delimiter: self.delimiter,
        }
    }

    fn boxed_copy(&self) -> Box<dyn Qualifier + '_> {
        Box::new(self.copy())
    }

    fn delimiter(&self) -> char {
        self.delimiter
    }
}

impl PartialEq for CompiledQualifier {
    fn eq(&self, other: &Self) -> bool {
        self.delimiter == other.delimiter && self.segments == other.segments
    }
}

impl Eq for CompiledQualifier {}

impl fmt::Display for CompiledQualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_escaped(f, self.segments(), self.delimiter)
    }
}

impl FromStr for CompiledQualifier {
    type Err = QualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CompiledQualifier {
    type Error = QualifierError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}
