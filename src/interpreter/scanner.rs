use crate::error::ParseError;

/// Sentinel returned by [`Scanner::current`] past the last character.
pub const END: char = '\0';

/// Characters that separate tokens and are skipped after every match.
pub const WHITESPACE: [char; 4] = [' ', '\t', '\r', '\n'];

/// A character-level cursor over source text.
///
/// The scanner does not produce tokens. The parser drives it directly: it
/// probes for literal strings at the cursor with [`Scanner::is_match`], then
/// consumes them with [`Scanner::try_match`] or [`Scanner::expect`]. All
/// positions are character offsets, not byte offsets.
///
/// ## Example
/// ```
/// use quill::interpreter::scanner::Scanner;
///
/// let mut scanner = Scanner::new("if  (x)");
/// assert!(scanner.is_match(&["if"]));
/// assert_eq!(scanner.try_match(&["(", "if"]), Some("if"));
/// assert_eq!(scanner.position(), 4);
/// assert_eq!(scanner.current(), '(');
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    chars:    Vec<char>,
    position: usize,
}

impl Scanner {
    /// Creates a scanner positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { chars:    source.chars().collect(),
               position: 0, }
    }

    /// The character under the cursor, or [`END`] past the end.
    #[must_use]
    pub fn current(&self) -> char {
        self.chars.get(self.position).copied().unwrap_or(END)
    }

    /// The cursor offset in characters.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Moves one character forward. Does nothing at the end.
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.position += 1;
        }
    }

    /// Moves the cursor to the next non-whitespace character.
    pub fn skip_whitespace(&mut self) {
        while WHITESPACE.contains(&self.current()) {
            self.advance();
        }
    }

    /// Checks whether any candidate occurs at the cursor, without moving it.
    #[must_use]
    pub fn is_match(&self, candidates: &[&'static str]) -> bool {
        candidates.iter().any(|literal| self.matches_at_cursor(literal))
    }

    /// Consumes the first candidate that occurs at the cursor.
    ///
    /// Candidates are tried in order and the first match wins. On success the
    /// literal and any whitespace after it are consumed and the literal is
    /// returned. On failure the cursor does not move.
    pub fn try_match(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        let literal = candidates.iter()
                                .copied()
                                .find(|literal| self.matches_at_cursor(literal))?;
        self.position += literal.chars().count();
        self.skip_whitespace();
        Some(literal)
    }

    /// Like [`Scanner::try_match`], but a miss is an error.
    ///
    /// # Errors
    /// Returns [`ParseError::ExpectedOneOf`] listing every candidate, with the
    /// offset of the cursor at the time of the attempt.
    pub fn expect(&mut self, candidates: &[&'static str]) -> Result<&'static str, ParseError> {
        let offset = self.position;
        self.try_match(candidates)
            .ok_or_else(|| ParseError::ExpectedOneOf { expected: candidates.to_vec(),
                                                       offset })
    }

    fn matches_at_cursor(&self, literal: &str) -> bool {
        let mut rest = self.chars.get(self.position..).unwrap_or_default().iter();
        literal.chars().all(|expected| rest.next() == Some(&expected))
    }
}
