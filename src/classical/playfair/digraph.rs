//! Digraph segmentation and the three Playfair substitution rules.

use super::matrix::{Matrix, MatrixSize};
use std::fmt;

/// An ordered pair of matrix symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digraph(pub char, pub char);

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Result of splitting text into digraphs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Segmentation {
    pub pairs: Vec<Digraph>,
    /// Ascending positions in the flattened pair stream that hold a filler.
    pub insertions: Vec<usize>,
}

impl Segmentation {
    /// Upper-case pairs joined by single spaces, e.g. `BA LX LO ON`.
    pub fn pairs_text(&self) -> String {
        format_pairs(&self.pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

pub fn format_pairs(pairs: &[Digraph]) -> String {
    pairs
        .iter()
        .map(Digraph::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits `text` into digraphs over the alphabet of `size`.
///
/// Characters outside the alphabet are skipped. A repeated symbol is split by
/// `filler`, and a trailing single symbol is completed with it; `alt_filler`
/// takes over whenever the symbol being padded is `filler` itself. Callers
/// must pass two distinct fillers that belong to the alphabet.
pub fn segment(text: &str, size: MatrixSize, filler: char, alt_filler: char) -> Segmentation {
    let symbols: Vec<char> = text.chars().filter_map(|c| size.normalize(c)).collect();
    let pad = |symbol: char| if symbol == filler { alt_filler } else { filler };

    let mut segmentation = Segmentation::default();
    let mut i = 0;
    while i < symbols.len() {
        let a = symbols[i];
        match symbols.get(i + 1) {
            Some(&b) if b != a => {
                segmentation.pairs.push(Digraph(a, b));
                i += 2;
            }
            // repeated symbol or trailing odd symbol
            _ => {
                segmentation.pairs.push(Digraph(a, pad(a)));
                segmentation
                    .insertions
                    .push(segmentation.pairs.len() * 2 - 1);
                i += 1;
            }
        }
    }

    tracing::debug!(
        symbols = symbols.len(),
        pairs = segmentation.pairs.len(),
        fillers = segmentation.insertions.len(),
        "segmented Playfair input"
    );
    segmentation
}

/// Applies the row, column or rectangle rule to one digraph.
///
/// A pair containing a symbol that is not in the matrix is returned unchanged.
pub fn substitute_pair(matrix: &Matrix, pair: Digraph, direction: Direction) -> Digraph {
    let (Some((row_a, col_a)), Some((row_b, col_b))) =
        (matrix.locate(pair.0), matrix.locate(pair.1))
    else {
        return pair;
    };

    let n = matrix.dimension();
    let step = match direction {
        Direction::Encrypt => 1,
        Direction::Decrypt => n - 1,
    };

    if row_a == row_b {
        Digraph(
            matrix.get(row_a, (col_a + step) % n),
            matrix.get(row_b, (col_b + step) % n),
        )
    } else if col_a == col_b {
        Digraph(
            matrix.get((row_a + step) % n, col_a),
            matrix.get((row_b + step) % n, col_b),
        )
    } else {
        Digraph(matrix.get(row_a, col_b), matrix.get(row_b, col_a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> String {
        segment(text, MatrixSize::Five, 'X', 'Y').pairs_text()
    }

    #[test]
    fn test_balloon() {
        let seg = segment("BALLOON", MatrixSize::Five, 'X', 'Y');
        assert_eq!(seg.pairs_text(), "BA LX LO ON");
        assert_eq!(seg.insertions, vec![3]);
    }

    #[test]
    fn test_trailing_symbol_is_padded() {
        let seg = segment("abc", MatrixSize::Five, 'X', 'Y');
        assert_eq!(seg.pairs_text(), "AB CX");
        assert_eq!(seg.insertions, vec![3]);
    }

    #[test]
    fn test_alt_filler_used_for_filler_symbol() {
        assert_eq!(pairs("XX"), "XY XY");
        assert_eq!(pairs("AX"), "AX");
        assert_eq!(pairs("X"), "XY");
    }

    #[test]
    fn test_filters_and_folds() {
        assert_eq!(pairs("Hi, Jim! 42"), "HI IX IM");
        assert_eq!(
            segment("Hi, Jim! 42", MatrixSize::Six, 'X', 'Y').pairs_text(),
            "HI JI M4 2X"
        );
    }

    #[test]
    fn test_empty_input() {
        let seg = segment("!!! ...", MatrixSize::Five, 'X', 'Y');
        assert!(seg.is_empty());
        assert!(seg.insertions.is_empty());
    }

    #[test]
    fn test_never_produces_equal_pairs() {
        let inputs = [
            "aaaaaaa",
            "XXXXYYYY",
            "balloon mississippi",
            "jjiijj",
            "zzz1112223",
            "the quick brown fox jumps over the lazy dog",
        ];
        for input in inputs {
            for size in [MatrixSize::Five, MatrixSize::Six] {
                let seg = segment(input, size, 'X', 'Y');
                for pair in &seg.pairs {
                    assert_ne!(pair.0, pair.1, "{:?} in {:?}", pair, input);
                }
                let stream_len = seg.pairs.len() * 2;
                assert!(seg.insertions.iter().all(|&i| i % 2 == 1 && i < stream_len));
            }
        }
    }

    #[test]
    fn test_monarchy_textbook_pairs() {
        let matrix = Matrix::build("MONARCHY", MatrixSize::Five);
        let cases = [("AR", "RM"), ("MU", "CM"), ("HS", "BP"), ("EA", "IM")];
        for (plain, cipher) in cases {
            let p: Vec<char> = plain.chars().collect();
            let out = substitute_pair(&matrix, Digraph(p[0], p[1]), Direction::Encrypt);
            assert_eq!(out.to_string(), cipher);
        }
    }

    #[test]
    fn test_row_and_column_wrap() {
        let matrix = Matrix::build("", MatrixSize::Five);
        // A B C D E / F G H I K / L M N O P / Q R S T U / V W X Y Z
        assert_eq!(
            substitute_pair(&matrix, Digraph('D', 'E'), Direction::Encrypt),
            Digraph('E', 'A')
        );
        assert_eq!(
            substitute_pair(&matrix, Digraph('A', 'B'), Direction::Decrypt),
            Digraph('E', 'A')
        );
        assert_eq!(
            substitute_pair(&matrix, Digraph('Q', 'V'), Direction::Encrypt),
            Digraph('V', 'A')
        );
        assert_eq!(
            substitute_pair(&matrix, Digraph('A', 'F'), Direction::Decrypt),
            Digraph('V', 'A')
        );
    }

    #[test]
    fn test_rectangle_is_direction_independent() {
        let matrix = Matrix::build("", MatrixSize::Five);
        let pair = Digraph('A', 'G');
        assert_eq!(substitute_pair(&matrix, pair, Direction::Encrypt), Digraph('B', 'F'));
        assert_eq!(substitute_pair(&matrix, pair, Direction::Decrypt), Digraph('B', 'F'));
    }

    #[test]
    fn test_unknown_symbol_passes_through() {
        let matrix = Matrix::build("", MatrixSize::Five);
        let pair = Digraph('A', '7');
        assert_eq!(substitute_pair(&matrix, pair, Direction::Encrypt), pair);
    }

    #[test]
    fn test_decrypt_inverts_encrypt_for_every_pair() {
        for (key, size) in [("MONARCHY", MatrixSize::Five), ("R2D2 C3PO", MatrixSize::Six)] {
            let matrix = Matrix::build(key, size);
            let symbols: Vec<char> = matrix.rows().flatten().copied().collect();
            for &a in &symbols {
                for &b in &symbols {
                    let pair = Digraph(a, b);
                    let cipher = substitute_pair(&matrix, pair, Direction::Encrypt);
                    assert_eq!(substitute_pair(&matrix, cipher, Direction::Decrypt), pair);
                }
            }
        }
    }
}
