//! Key-derived Playfair square.

use crate::common::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const ALPHABET_5X5: &str = "ABCDEFGHIKLMNOPQRSTUVWXYZ";
const ALPHABET_6X6: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Side length of the Playfair square, which also fixes the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatrixSize {
    /// 25 Latin letters, `J` folded into `I`.
    Five,
    /// 26 Latin letters followed by the ten digits.
    Six,
}

impl MatrixSize {
    pub const fn dimension(self) -> usize {
        match self {
            MatrixSize::Five => 5,
            MatrixSize::Six => 6,
        }
    }

    /// Canonical fill order for the symbols not taken by the key.
    pub const fn alphabet(self) -> &'static str {
        match self {
            MatrixSize::Five => ALPHABET_5X5,
            MatrixSize::Six => ALPHABET_6X6,
        }
    }

    /// Maps a character onto this alphabet: upper-cases it and, for the 5x5
    /// square, folds `J` into `I`. Returns `None` for characters outside it.
    pub fn normalize(self, c: char) -> Option<char> {
        match self {
            MatrixSize::Five if c.is_ascii_alphabetic() => match c.to_ascii_uppercase() {
                'J' => Some('I'),
                upper => Some(upper),
            },
            MatrixSize::Six if c.is_ascii_alphanumeric() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }

    pub fn accepts(self, c: char) -> bool {
        self.normalize(c).is_some()
    }
}

impl TryFrom<usize> for MatrixSize {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        match value {
            5 => Ok(MatrixSize::Five),
            6 => Ok(MatrixSize::Six),
            other => Err(Error::InvalidParameter(format!(
                "unsupported Playfair matrix size {} (expected 5 or 6)",
                other
            ))),
        }
    }
}

/// An N×N grid holding every symbol of the alphabet exactly once, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    size: MatrixSize,
    cells: Vec<char>,
}

impl Matrix {
    /// Builds the square from `key`: key symbols first (filtered, upper-cased,
    /// deduplicated in order of first appearance), then the rest of the
    /// alphabet in canonical order. An empty or fully invalid key yields the
    /// canonical alphabet.
    pub fn build(key: &str, size: MatrixSize) -> Self {
        let n = size.dimension();
        let mut cells = Vec::with_capacity(n * n);

        let candidates = key
            .chars()
            .filter_map(|c| size.normalize(c))
            .chain(size.alphabet().chars());
        for symbol in candidates {
            if !cells.contains(&symbol) {
                cells.push(symbol);
            }
        }

        tracing::debug!(dimension = n, key_len = key.len(), "built Playfair matrix");
        Self { size, cells }
    }

    pub fn size(&self) -> MatrixSize {
        self.size
    }

    pub fn dimension(&self) -> usize {
        self.size.dimension()
    }

    /// Symbol at `(row, col)`. Both indices must be below [`Matrix::dimension`].
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row * self.dimension() + col]
    }

    /// Position of `symbol`, or `None` when it is not part of this square
    /// (a digit or lower-case letter in a 5x5 square, for instance).
    pub fn locate(&self, symbol: char) -> Option<(usize, usize)> {
        let n = self.dimension();
        self.cells
            .iter()
            .position(|&c| c == symbol)
            .map(|index| (index / n, index % n))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.dimension())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
