use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// ISBN-13 shape accepted by the silver layer: `978-D-DD-DDDDDD-D`.
pub const ISBN13_PATTERN: &str = r"^978-[0-9]-[0-9]{2}-[0-9]{6}-[0-9]$";

/// Data-quality rule applied to bronze book rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DqRule {
    /// `isbn` is null or empty after trimming.
    IsbnPresent,
    /// `title` is null or empty after trimming.
    TitlePresent,
    /// `isbn` does not match [`ISBN13_PATTERN`].
    IsbnFormat,
}

impl DqRule {
    pub fn as_str(self) -> &'static str {
        match self {
            DqRule::IsbnPresent => "isbn_present",
            DqRule::TitlePresent => "title_present",
            DqRule::IsbnFormat => "isbn_format",
        }
    }
}

impl fmt::Display for DqRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn isbn13() -> Option<&'static Regex> {
    static ISBN13: OnceLock<Option<Regex>> = OnceLock::new();
    ISBN13.get_or_init(|| Regex::new(ISBN13_PATTERN).ok()).as_ref()
}

/// Whether `value` has the ISBN-13 shape. No surrounding whitespace is allowed.
pub fn is_isbn13(value: &str) -> bool {
    isbn13().is_some_and(|re| re.is_match(value))
}

/// Rules a book row violates, in rule order. Empty when the row is valid.
///
/// The format rule is only reported for ISBNs that are present, so a blank
/// ISBN yields a single violation.
pub fn book_violations(isbn: &str, title: &str) -> Vec<DqRule> {
    let isbn = isbn.trim();
    let mut violations = Vec::new();

    if isbn.is_empty() {
        violations.push(DqRule::IsbnPresent);
    }
    if title.trim().is_empty() {
        violations.push(DqRule::TitlePresent);
    }
    if !isbn.is_empty() && !is_isbn13(isbn) {
        violations.push(DqRule::IsbnFormat);
    }

    violations
}

/// Whether a book row passes every silver-layer check.
pub fn is_valid_book(isbn: &str, title: &str) -> bool {
    book_violations(isbn, title).is_empty()
}
