//! Offset map for one source unit.
//!
//! Nodes store byte offsets only. A [`FileLocations`] shared by every node
//! parsed from the same file turns those offsets into [`Location`]s on demand,
//! so a location is never stored redundantly on a node.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use text_size::{TextRange, TextSize};

use crate::error::SyntaxError;

/// A line/column pair (both 1-indexed), without file identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub column: u32,
}

impl LineCol {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A resolved position in a named source unit (1-indexed).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    file: Arc<str>,
    line: u32,
    column: u32,
}

impl Location {
    pub fn new(file: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn line_col(&self) -> LineCol {
        LineCol::new(self.line, self.column)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Maps byte offsets of one source unit to lines and columns.
///
/// Read-only after construction. The line-start table is built on the first
/// query and reused afterwards; concurrent first use computes it once.
pub struct FileLocations {
    file: Arc<str>,
    text: Arc<str>,
    line_starts: OnceCell<Box<[TextSize]>>,
}

impl FileLocations {
    /// Create the offset map for `text`, reported under the name `file`.
    ///
    /// # Panics
    ///
    /// Panics if `text` is longer than `u32::MAX` bytes.
    pub fn new(file: impl Into<Arc<str>>, text: impl Into<Arc<str>>) -> Self {
        let (file, text) = (file.into(), text.into());
        if TextSize::try_from(text.len()).is_err() {
            panic!("{file} is longer than u32::MAX bytes");
        }
        Self {
            file,
            text,
            line_starts: OnceCell::new(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the source unit; the largest valid offset.
    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines, counting a trailing empty line after a final `\n`.
    pub fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    /// Resolve `offset` to a [`Location`].
    pub fn location(&self, offset: TextSize) -> Result<Location, SyntaxError> {
        let LineCol { line, column } = self.line_col(offset)?;
        Ok(Location {
            file: Arc::clone(&self.file),
            line,
            column,
        })
    }

    /// Resolve `offset` to a 1-indexed line and column.
    ///
    /// Columns count characters from the start of the line. An offset inside
    /// a multi-byte character resolves to that character's column.
    pub fn line_col(&self, offset: TextSize) -> Result<LineCol, SyntaxError> {
        let len = self.len();
        if offset > len {
            tracing::debug!(file = %self.file, offset = u32::from(offset), "offset out of range");
            return Err(SyntaxError::out_of_range(&self.file, offset, len));
        }

        let starts = self.line_starts();
        // starts[0] == 0, so at least one start is <= offset.
        let line = starts.partition_point(|&start| start <= offset) - 1;
        let line_start = usize::from(starts[line]);
        let offset = usize::from(offset);

        let mut column = self.text.as_bytes()[line_start..offset]
            .iter()
            .filter(|&&b| !is_utf8_continuation(b))
            .count();
        if !self.text.is_char_boundary(offset) {
            column -= 1;
        }

        Ok(LineCol::new(line as u32 + 1, column as u32 + 1))
    }

    /// Text of a 1-indexed line, without its terminator.
    pub fn line_text(&self, line: u32) -> Option<&str> {
        let starts = self.line_starts();
        let index = usize::try_from(line).ok()?.checked_sub(1)?;
        let start = usize::from(*starts.get(index)?);
        let end = match starts.get(index + 1) {
            Some(&next) => usize::from(next) - 1,
            None => self.text.len(),
        };
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Source text covered by `range`, if it lies on character boundaries
    /// inside this unit.
    pub fn text_at(&self, range: TextRange) -> Option<&str> {
        self.text.get(std::ops::Range::<usize>::from(range))
    }

    fn line_starts(&self) -> &[TextSize] {
        self.line_starts.get_or_init(|| {
            let starts: Box<[TextSize]> = std::iter::once(TextSize::new(0))
                .chain(
                    self.text
                        .match_indices('\n')
                        .map(|(index, _)| TextSize::new(index as u32 + 1)),
                )
                .collect();
            tracing::trace!(file = %self.file, lines = starts.len(), "computed line starts");
            starts
        })
    }
}

#[inline]
fn is_utf8_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

// Two maps are equivalent when they describe the same named text.
impl PartialEq for FileLocations {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file && self.text == other.text
    }
}

impl Eq for FileLocations {}

impl fmt::Debug for FileLocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLocations")
            .field("file", &self.file)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locs(text: &str) -> FileLocations {
        FileLocations::new("test.lark", text)
    }

    #[test]
    fn test_first_line() {
        let locs = locs("x = 1\ny = 2\n");
        assert_eq!(locs.line_col(TextSize::new(0)).unwrap(), LineCol::new(1, 1));
        assert_eq!(locs.line_col(TextSize::new(4)).unwrap(), LineCol::new(1, 5));
    }

    #[test]
    fn test_newline_belongs_to_its_line() {
        let locs = locs("ab\ncd");
        assert_eq!(locs.line_col(TextSize::new(2)).unwrap(), LineCol::new(1, 3));
        assert_eq!(locs.line_col(TextSize::new(3)).unwrap(), LineCol::new(2, 1));
    }

    #[test]
    fn test_end_of_file_is_valid() {
        let locs = locs("ab\n");
        assert_eq!(locs.line_col(TextSize::new(3)).unwrap(), LineCol::new(2, 1));
        assert!(locs.line_col(TextSize::new(4)).is_err());
    }

    #[test]
    fn test_columns_count_characters() {
        // 'é' is two bytes, '€' three.
        let locs = locs("é€x");
        assert_eq!(locs.line_col(TextSize::new(2)).unwrap(), LineCol::new(1, 2));
        assert_eq!(locs.line_col(TextSize::new(5)).unwrap(), LineCol::new(1, 3));
        // Inside '€'.
        assert_eq!(locs.line_col(TextSize::new(3)).unwrap(), LineCol::new(1, 2));
    }

    #[test]
    fn test_empty_source() {
        let locs = locs("");
        assert!(locs.is_empty());
        assert_eq!(locs.line_count(), 1);
        assert_eq!(locs.line_col(TextSize::new(0)).unwrap(), LineCol::new(1, 1));
    }

    #[test]
    fn test_line_text() {
        let locs = locs("first\r\nsecond\nthird");
        assert_eq!(locs.line_text(1), Some("first"));
        assert_eq!(locs.line_text(2), Some("second"));
        assert_eq!(locs.line_text(3), Some("third"));
        assert_eq!(locs.line_text(0), None);
        assert_eq!(locs.line_text(4), None);
    }

    #[test]
    fn test_text_at() {
        let locs = locs("load(\"x\")");
        let range = TextRange::new(TextSize::new(0), TextSize::new(4));
        assert_eq!(locs.text_at(range), Some("load"));
        let past_end = TextRange::new(TextSize::new(5), TextSize::new(40));
        assert_eq!(locs.text_at(past_end), None);
    }

    #[test]
    fn test_location_display() {
        let locs = locs("a\nbc");
        let location = locs.location(TextSize::new(3)).unwrap();
        assert_eq!(location.to_string(), "test.lark:2:2");
    }

    #[test]
    fn test_equivalence_ignores_cache_state() {
        let a = locs("a\nb");
        let b = locs("a\nb");
        let _ = a.line_col(TextSize::new(2));
        assert_eq!(a, b);
        assert_ne!(a, FileLocations::new("other.lark", "a\nb"));
    }
}
