//! The lazy qualifier form.

use std::{borrow::Cow, fmt, ops::Deref, str::FromStr, sync::Arc};

use super::{
    CompiledQualifier, Qualifier, QualifierError, check_delimiter, scan_segment, write_escaped,
};
use crate::constants::DEFAULT_DELIMITER;

/// A qualifier that keeps its path as text and parses one segment per step.
///
/// Building one does no work beyond validating the delimiter. Each call to
/// [`next_segment`](Qualifier::next_segment) scans forward from the current
/// offset to the next unescaped delimiter. Segments without escapes are
/// borrowed straight from the path.
///
/// ```
/// use pathwise::{LazyQualifier, Qualifier};
///
/// let mut qual = LazyQualifier::new(r"user.first\.name");
/// assert_eq!(qual.to_segments(), vec!["user", "first.name"]);
/// ```
#[derive(Debug, Clone)]
pub struct LazyQualifier<'p> {
    path: PathText<'p>,
    offset: Option<usize>,
    delimiter: char,
}

/// Path text that is either borrowed or shared between copies.
#[derive(Debug, Clone)]
enum PathText<'p> {
    Borrowed(&'p str),
    Shared(Arc<str>),
}

impl<'p> From<Cow<'p, str>> for PathText<'p> {
    fn from(path: Cow<'p, str>) -> Self {
        match path {
            Cow::Borrowed(path) => PathText::Borrowed(path),
            Cow::Owned(path) => PathText::Shared(Arc::from(path)),
        }
    }
}

impl Deref for PathText<'_> {
    type Target = str;

    fn deref(&self) -> &str {
        match self {
            PathText::Borrowed(path) => path,
            PathText::Shared(path) => path,
        }
    }
}

impl<'p> LazyQualifier<'p> {
    /// Wraps `path` using the default delimiter.
    pub fn new(path: impl Into<Cow<'p, str>>) -> Self {
        Self {
            path: PathText::from(path.into()),
            offset: Some(0),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Wraps `path` using a custom delimiter.
    ///
    /// # Errors
    /// Returns [`QualifierError::InvalidDelimiter`] for the escape character.
    pub fn with_delimiter(
        path: impl Into<Cow<'p, str>>,
        delimiter: char,
    ) -> Result<Self, QualifierError> {
        check_delimiter(delimiter)?;
        Ok(Self {
            path: PathText::from(path.into()),
            offset: Some(0),
            delimiter,
        })
    }

    /// The path exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Parses the whole path into the eager form.
    ///
    /// # Errors
    /// Fails if the path has more segments than the compiled form allows.
    pub fn compile(&self) -> Result<CompiledQualifier, QualifierError> {
        CompiledQualifier::with_delimiter(&self.path, self.delimiter)
    }

    /// Detaches the qualifier from the borrowed path.
    pub fn into_owned(self) -> LazyQualifier<'static> {
        let path = match self.path {
            PathText::Borrowed(path) => Arc::from(path),
            PathText::Shared(path) => path,
        };
        LazyQualifier {
            path: PathText::Shared(path),
            offset: self.offset,
            delimiter: self.delimiter,
        }
    }
}

impl Qualifier for LazyQualifier<'_> {
    fn next_segment(&mut self) -> Option<(Cow<'_, str>, bool)> {
        let start = self.offset?;
        let (segment, next) = scan_segment(&self.path[start..], self.delimiter);
        self.offset = next.map(|consumed| start + consumed);
        Some((segment, next.is_some()))
    }

    fn reset(&mut self) {
        self.offset = Some(0);
    }

    fn copy(&self) -> Self {
        Self {
            path: self.path.clone(),
            offset: Some(0),
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

impl fmt::Display for LazyQualifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cursor = self.copy();
        let segments = cursor.to_segments();
        write_escaped(f, segments.iter().map(String::as_str), self.delimiter)
    }
}

impl FromStr for LazyQualifier<'static> {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LazyQualifier::new(s.to_string()))
    }
}

impl<'p> From<&'p str> for LazyQualifier<'p> {
    fn from(path: &'p str) -> Self {
        LazyQualifier::new(path)
    }
}

impl From<String> for LazyQualifier<'static> {
    fn from(path: String) -> Self {
        LazyQualifier::new(path)
    }
}
