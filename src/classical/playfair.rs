//! `PlayfairCipher` 提供基于密钥方阵的 Playfair 双字母替换加解密。
//!
//! The engine is split in two layers. [`matrix`] and [`digraph`] hold the pure
//! building blocks (square construction, segmentation, pair substitution);
//! this module adds text reconstruction and a validated front-end that ties
//! them together.

pub mod digraph;
pub mod matrix;

pub use digraph::{Digraph, Direction, Segmentation, format_pairs, segment, substitute_pair};
pub use matrix::{Matrix, MatrixSize};

use crate::common::config::PlayfairConfig;
use crate::common::errors::{Error, Result};

/// Maps a substituted pair stream back onto the shape of `original`.
///
/// Each alphabet character of `original` consumes the next stream symbol,
/// lower-cased when the original was lower-case. Filler positions listed in
/// `insertions` are emitted right after the symbol they follow. Characters
/// outside the alphabet are copied through, and unconsumed stream symbols are
/// appended at the end. `insertions` must be ascending, as produced by
/// [`segment`].
pub fn reconstruct(
    original: &str,
    size: MatrixSize,
    stream: &[char],
    insertions: &[usize],
) -> String {
    let mut result = String::with_capacity(original.len() + insertions.len());
    let mut idx = 0;

    for ch in original.chars() {
        if !size.accepts(ch) {
            result.push(ch);
            continue;
        }
        let Some(&symbol) = stream.get(idx) else {
            continue;
        };
        result.push(if ch.is_ascii_lowercase() {
            symbol.to_ascii_lowercase()
        } else {
            symbol
        });
        idx += 1;
        while idx < stream.len() && insertions.binary_search(&idx).is_ok() {
            result.push(stream[idx]);
            idx += 1;
        }
    }

    result.extend(&stream[idx.min(stream.len())..]);
    result
}

/// Everything one Playfair run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayfairOutput {
    /// Input digraphs and filler positions.
    pub segmentation: Segmentation,
    /// Digraphs after substitution.
    pub processed: Vec<Digraph>,
    /// Substituted text laid out like the input.
    pub text: String,
}

impl PlayfairOutput {
    pub fn pairs_text(&self) -> String {
        self.segmentation.pairs_text()
    }

    pub fn stream_text(&self) -> String {
        format_pairs(&self.processed)
    }
}

/// Playfair 加密系统实现
///
/// Holds a built matrix and a validated pair of fillers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayfairCipher {
    matrix: Matrix,
    filler: char,
    alt_filler: char,
}

impl PlayfairCipher {
    /// Cipher with the conventional `X`/`Y` fillers.
    pub fn new(key: &str, size: MatrixSize) -> Self {
        Self {
            matrix: Matrix::build(key, size),
            filler: 'X',
            alt_filler: 'Y',
        }
    }

    /// Cipher with caller-chosen fillers.
    ///
    /// Fillers are upper-cased (and `J` folded for the 5x5 square); they must
    /// belong to the alphabet and differ from each other.
    pub fn with_fillers(
        key: &str,
        size: MatrixSize,
        filler: char,
        alt_filler: char,
    ) -> Result<Self> {
        let normalize = |c: char| {
            size.normalize(c).ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "filler '{}' is not in the {n}x{n} alphabet",
                    c,
                    n = size.dimension()
                ))
            })
        };
        let filler = normalize(filler)?;
        let alt_filler = normalize(alt_filler)?;
        if filler == alt_filler {
            return Err(Error::InvalidParameter(
                "the two fillers must be different".to_string(),
            ));
        }

        Ok(Self {
            matrix: Matrix::build(key, size),
            filler,
            alt_filler,
        })
    }

    pub fn from_config(key: &str, config: &PlayfairConfig) -> Result<Self> {
        Self::with_fillers(key, config.matrix_size, config.filler, config.alt_filler)
    }

    /// Parses a filler typed as text; it must be exactly one character.
    pub fn parse_filler(text: &str) -> Result<char> {
        let mut chars = text.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            (None, _) => Err(Error::InvalidParameter("filler must not be empty".to_string())),
            _ => Err(Error::InvalidParameter(format!(
                "filler must be a single character, got {:?}",
                text
            ))),
        }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn fillers(&self) -> (char, char) {
        (self.filler, self.alt_filler)
    }

    pub fn encrypt(&self, text: &str) -> PlayfairOutput {
        self.run(text, Direction::Encrypt)
    }

    pub fn decrypt(&self, text: &str) -> PlayfairOutput {
        self.run(text, Direction::Decrypt)
    }

    fn run(&self, text: &str, direction: Direction) -> PlayfairOutput {
        let size = self.matrix.size();
        let segmentation = segment(text, size, self.filler, self.alt_filler);
        let processed: Vec<Digraph> = segmentation
            .pairs
            .iter()
            .map(|&pair| substitute_pair(&self.matrix, pair, direction))
            .collect();

        let stream: Vec<char> = processed.iter().flat_map(|p| [p.0, p.1]).collect();
        let text = reconstruct(text, size, &stream, &segmentation.insertions);

        PlayfairOutput {
            segmentation,
            processed,
            text,
        }
    }
}
