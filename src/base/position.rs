/// Position tracking for code elements
///
/// Stores the source location (line/char) where elements begin and end.
/// Both coordinates are 1-based, matching how editors report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilePosition {
    pub line: usize,
    pub char: usize,
}

/// A half-open range in source code: `start` is inside, `end` is not
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: FilePosition,
    pub end: FilePosition,
}

impl FilePosition {
    /// Sentinel used as the end of a root element, past any real position
    pub const END_OF_FILE: FilePosition = FilePosition {
        line: usize::MAX,
        char: usize::MAX,
    };

    pub fn new(line: usize, char: usize) -> Self {
        Self { line, char }
    }

    pub fn is_end_of_file(&self) -> bool {
        *self == Self::END_OF_FILE
    }
}

impl Span {
    pub fn new(start: FilePosition, end: FilePosition) -> Self {
        Self { start, end }
    }

    /// Create a span from line/char coordinates
    pub fn from_coords(start_line: usize, start_char: usize, end_line: usize, end_char: usize) -> Self {
        Self {
            start: FilePosition::new(start_line, start_char),
            end: FilePosition::new(end_line, end_char),
        }
    }

    /// Check if a position falls within this span
    pub fn contains(&self, position: FilePosition) -> bool {
        position >= self.start && position < self.end
    }

    /// Check if another span lies entirely within this one
    pub fn encloses(&self, other: &Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_is_half_open() {
        let span = Span::from_coords(1, 1, 3, 5);
        assert!(span.contains(FilePosition::new(1, 1)));
        assert!(span.contains(FilePosition::new(2, 80)));
        assert!(span.contains(FilePosition::new(3, 4)));
        assert!(!span.contains(FilePosition::new(3, 5)));
    }

    #[test]
    fn test_end_of_file_encloses_everything() {
        let root = Span::new(FilePosition::new(1, 1), FilePosition::END_OF_FILE);
        assert!(root.encloses(&Span::from_coords(10, 2, 400, 1)));
        assert!(FilePosition::END_OF_FILE.is_end_of_file());
    }
}
