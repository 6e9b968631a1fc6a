use std::collections::{BTreeMap, HashSet};
use std::fmt;

use bronzegen_core::{BookRow, DqRule};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{pick, random_digits};
use crate::catalog::{BOOKS, MALFORMED_ISBNS};
use crate::errors::GenerationError;

/// Number of distinct `978-D-DD-DDDDDD-D` ISBNs, the most valid rows one run can hold.
pub const ISBN13_SPACE: u64 = 10_000_000_000;

/// Way in which an invalid book row breaks the silver-layer checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectMode {
    NullIsbn,
    EmptyIsbn,
    MalformedIsbn,
    NullTitle,
    EmptyTitle,
    BlankIsbn,
    BlankTitle,
}

impl DefectMode {
    /// Every mode, in the order the cycle visits them.
    pub const ALL: [DefectMode; 7] = [
        DefectMode::NullIsbn,
        DefectMode::EmptyIsbn,
        DefectMode::MalformedIsbn,
        DefectMode::NullTitle,
        DefectMode::EmptyTitle,
        DefectMode::BlankIsbn,
        DefectMode::BlankTitle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DefectMode::NullIsbn => "null_isbn",
            DefectMode::EmptyIsbn => "empty_isbn",
            DefectMode::MalformedIsbn => "malformed_isbn",
            DefectMode::NullTitle => "null_title",
            DefectMode::EmptyTitle => "empty_title",
            DefectMode::BlankIsbn => "blank_isbn",
            DefectMode::BlankTitle => "blank_title",
        }
    }

    /// The check a row with this defect fails.
    pub fn violated_rule(self) -> DqRule {
        match self {
            DefectMode::NullIsbn | DefectMode::EmptyIsbn | DefectMode::BlankIsbn => {
                DqRule::IsbnPresent
            }
            DefectMode::MalformedIsbn => DqRule::IsbnFormat,
            DefectMode::NullTitle | DefectMode::EmptyTitle | DefectMode::BlankTitle => {
                DqRule::TitlePresent
            }
        }
    }

    /// Corrupt `row` in place. Null and empty both serialize as an empty cell.
    fn apply<R: Rng + ?Sized>(self, row: &mut BookRow, rng: &mut R) {
        match self {
            DefectMode::NullIsbn | DefectMode::EmptyIsbn => row.isbn.clear(),
            DefectMode::MalformedIsbn => row.isbn = malformed_isbn(rng),
            DefectMode::NullTitle | DefectMode::EmptyTitle => row.title.clear(),
            DefectMode::BlankIsbn => row.isbn = "   ".to_string(),
            DefectMode::BlankTitle => row.title = "   ".to_string(),
        }
    }
}

impl fmt::Display for DefectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round-robin over [`DefectMode::ALL`].
///
/// The position survives across calls, so any run of invalid rows spreads
/// evenly over the modes instead of sampling them.
#[derive(Debug, Clone, Default)]
pub struct DefectCycle {
    issued: u64,
}

impl DefectCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_mode(&mut self) -> DefectMode {
        let mode = DefectMode::ALL[(self.issued % DefectMode::ALL.len() as u64) as usize];
        self.issued += 1;
        mode
    }

    pub fn issued(&self) -> u64 {
        self.issued
    }
}

/// Random ISBN with the `978-D-DD-DDDDDD-D` shape.
pub fn random_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "978-{}-{}-{}-{}",
        random_digits(rng, 1),
        random_digits(rng, 2),
        random_digits(rng, 6),
        random_digits(rng, 1)
    )
}

fn malformed_isbn<R: Rng + ?Sized>(rng: &mut R) -> String {
    let candidate = *pick(&MALFORMED_ISBNS, rng);
    if candidate.ends_with('-') {
        format!("{candidate}{}", rng.random_range(0..=9))
    } else {
        candidate.to_string()
    }
}

/// Rows produced by one books run, already shuffled.
#[derive(Debug, Clone, Default)]
pub struct BookBatch {
    pub rows: Vec<BookRow>,
    pub valid: u64,
    pub invalid: u64,
    pub defects_by_mode: BTreeMap<DefectMode, u64>,
}

/// Builds valid and deliberately defective book rows.
#[derive(Debug)]
pub struct BookGenerator<R> {
    rng: R,
    used_isbns: HashSet<String>,
    defects: DefectCycle,
}

impl<R: Rng> BookGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            used_isbns: HashSet::new(),
            defects: DefectCycle::new(),
        }
    }

    /// A row that passes every check, with an ISBN not used before by this generator.
    pub fn valid_row(&mut self) -> BookRow {
        let isbn = loop {
            let candidate = random_isbn(&mut self.rng);
            if self.used_isbns.insert(candidate.clone()) {
                break candidate;
            }
        };
        let book = pick(&BOOKS, &mut self.rng);
        BookRow {
            isbn,
            title: book.title.to_string(),
            author: book.author.to_string(),
            genre: book.genre.to_string(),
        }
    }

    /// A row carrying the next defect in the cycle.
    pub fn invalid_row(&mut self) -> (DefectMode, BookRow) {
        let mode = self.defects.next_mode();
        let book = pick(&BOOKS, &mut self.rng);
        let mut row = BookRow {
            isbn: random_isbn(&mut self.rng),
            title: book.title.to_string(),
            author: book.author.to_string(),
            genre: book.genre.to_string(),
        };
        mode.apply(&mut row, &mut self.rng);

        if !row.isbn.trim().is_empty() {
            self.used_isbns.insert(row.isbn.clone());
        }

        (mode, row)
    }

    /// `valid` good rows followed by `invalid` defective ones, then shuffled.
    ///
    /// Fails up front when `valid` exceeds the ISBN space or the rows cannot
    /// be allocated.
    pub fn generate(&mut self, valid: u64, invalid: u64) -> Result<BookBatch, GenerationError> {
        if valid > ISBN13_SPACE {
            return Err(GenerationError::InvalidOptions(format!(
                "--valid {valid} exceeds the {ISBN13_SPACE} distinct ISBN-13 values"
            )));
        }
        let rows = valid
            .checked_add(invalid)
            .and_then(|total| usize::try_from(total).ok())
            .and_then(|total| {
                let mut rows = Vec::new();
                rows.try_reserve_exact(total).ok().map(|()| rows)
            })
            .ok_or_else(|| {
                GenerationError::InvalidOptions(format!(
                    "cannot hold {valid} valid and {invalid} invalid rows in memory"
                ))
            })?;

        let mut batch = BookBatch {
            rows,
            valid,
            invalid,
            defects_by_mode: BTreeMap::new(),
        };

        for _ in 0..valid {
            let row = self.valid_row();
            batch.rows.push(row);
        }
        for _ in 0..invalid {
            let (mode, row) = self.invalid_row();
            *batch.defects_by_mode.entry(mode).or_insert(0) += 1;
            batch.rows.push(row);
        }

        batch.rows.shuffle(&mut self.rng);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use bronzegen_core::is_isbn13;

    use super::*;
    use crate::generators::seeded_rng;

    #[test]
    fn cycle_visits_every_mode_before_repeating() {
        let mut cycle = DefectCycle::new();
        let first: Vec<DefectMode> = (0..7).map(|_| cycle.next_mode()).collect();
        assert_eq!(first, DefectMode::ALL.to_vec());
        assert_eq!(cycle.next_mode(), DefectMode::NullIsbn);
        assert_eq!(cycle.issued(), 8);
    }

    #[test]
    fn cycle_persists_across_generate_calls() {
        let mut generator = BookGenerator::new(seeded_rng(3));
        let first = generator.generate(0, 3).expect("first batch");
        let second = generator.generate(0, 4).expect("second batch");

        let modes: BTreeSet<DefectMode> = first
            .defects_by_mode
            .keys()
            .chain(second.defects_by_mode.keys())
            .copied()
            .collect();
        assert_eq!(modes.len(), 7);
    }

    #[test]
    fn random_isbn_has_isbn13_shape() {
        let mut rng = seeded_rng(11);
        for _ in 0..500 {
            let isbn = random_isbn(&mut rng);
            assert!(is_isbn13(&isbn), "{isbn} does not match");
        }
    }

    #[test]
    fn valid_rows_pass_and_never_repeat_isbns() {
        let mut generator = BookGenerator::new(seeded_rng(5));
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let row = generator.valid_row();
            assert!(row.is_valid(), "{row:?} should be valid");
            assert!(seen.insert(row.isbn.clone()), "duplicate isbn {}", row.isbn);
        }
    }

    #[test]
    fn invalid_rows_fail_the_rule_of_their_mode() {
        let mut generator = BookGenerator::new(seeded_rng(8));
        for _ in 0..70 {
            let (mode, row) = generator.invalid_row();
            let violations = row.violations();
            assert_eq!(violations, vec![mode.violated_rule()], "{mode}: {row:?}");
        }
    }

    #[test]
    fn malformed_isbns_come_from_the_fixed_list() {
        let mut rng = seeded_rng(21);
        for _ in 0..200 {
            let isbn = malformed_isbn(&mut rng);
            let known = MALFORMED_ISBNS[..4].contains(&isbn.as_str())
                || (isbn.len() == 5 && isbn.starts_with("978-"));
            assert!(known, "unexpected malformed isbn {isbn}");
            assert!(!is_isbn13(&isbn));
        }
    }

    #[test]
    fn blank_modes_write_whitespace() {
        let mut generator = BookGenerator::new(seeded_rng(1));
        let rows: Vec<(DefectMode, BookRow)> = (0..7).map(|_| generator.invalid_row()).collect();
        let (_, blank_isbn) = &rows[5];
        let (_, blank_title) = &rows[6];
        assert_eq!(blank_isbn.isbn, "   ");
        assert_eq!(blank_title.title, "   ");
        assert!(rows[0].1.isbn.is_empty());
        assert!(rows[3].1.title.is_empty());
    }

    #[test]
    fn generate_counts_and_classifies_rows() {
        let mut generator = BookGenerator::new(seeded_rng(100_003 * 10 + 7));
        let batch = generator.generate(10, 7).expect("batch");
        assert_eq!(batch.rows.len(), 17);
        assert_eq!(batch.rows.iter().filter(|row| row.is_valid()).count(), 10);
        assert_eq!(batch.defects_by_mode.len(), 7);
        assert!(batch.defects_by_mode.values().all(|count| *count == 1));
    }

    #[test]
    fn generate_is_deterministic_for_a_seed() {
        let a = BookGenerator::new(seeded_rng(77)).generate(20, 9).expect("a");
        let b = BookGenerator::new(seeded_rng(77)).generate(20, 9).expect("b");
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn more_valid_rows_than_isbns_is_rejected() {
        let mut generator = BookGenerator::new(seeded_rng(1));
        let err = generator
            .generate(ISBN13_SPACE + 1, 0)
            .expect_err("isbn space exhausted");
        assert!(matches!(err, GenerationError::InvalidOptions(_)), "{err}");
    }

    #[test]
    fn unallocatable_row_count_is_rejected() {
        let mut generator = BookGenerator::new(seeded_rng(1));
        let err = generator.generate(1, u64::MAX).expect_err("too many rows");
        assert!(matches!(err, GenerationError::InvalidOptions(_)), "{err}");

        let err = generator
            .generate(ISBN13_SPACE, u64::MAX - ISBN13_SPACE)
            .expect_err("too many rows");
        assert!(matches!(err, GenerationError::InvalidOptions(_)), "{err}");
    }
}
