//! Matrix substitution cipher. A message becomes a square matrix of
//! alphabet indices (unused trailing cells hold the sentinel -1.0), which
//! is multiplied by an invertible encoder matrix; decoding multiplies by
//! the encoder's inverse.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::AlatError;
use crate::matrix::{Matrix, Shape};

/// Every character a message may contain, in code order.
pub const CHARACTERS: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz\
     é!'^+$%&/\\(){}[]=*-?-_~;,`.: <>|\"@";

static ALPHABET: Lazy<Vec<char>> = Lazy::new(|| CHARACTERS.chars().collect());

/// Character to code, keeping the first occurrence when a character
/// repeats in the alphabet.
static CHAR_INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (i, c) in CHARACTERS.chars().enumerate() {
        index.entry(c).or_insert(i);
    }
    index
});

/// Converts a message to the smallest square matrix that holds it, one
/// character code per cell in row-major order, -1.0 in the leftover cells.
pub fn to_matrix(message: &str) -> Result<Matrix, AlatError> {
    let length = message.chars().count();
    let mut edge = 1;
    while edge * edge < length {
        edge += 1;
    }
    let shape = Shape::square(edge)?;

    let mut data = Vec::with_capacity(shape.len());
    for c in message.chars() {
        match CHAR_INDEX.get(&c) {
            Some(&code) => data.push(code as f64),
            None => {
                return Err(AlatError::invalid_argument(&format!(
                    "character {:?} is not in the cipher alphabet",
                    c
                )))
            }
        }
    }
    data.resize(shape.len(), -1.0);
    Matrix::new(shape, data)
}

fn check_encoder(code: &Matrix, encoder: &Matrix) -> Result<(), AlatError> {
    if code.shape() != encoder.shape() {
        return Err(AlatError::shape(&format!(
            "encoder must be {}x{} for this message",
            code.rows(),
            code.cols()
        )));
    }
    if !encoder.is_invertible() {
        return Err(AlatError::not_invertible(
            "encoder matrix must be invertible",
        ));
    }
    Ok(())
}

/// Encodes a message: code matrix times the encoder.
pub fn encode(message: &str, encoder: &Matrix) -> Result<Matrix, AlatError> {
    let code = to_matrix(message)?;
    check_encoder(&code, encoder)?;
    code.matmul(encoder)
}

/// Decodes an encoded matrix: encoded times the encoder's inverse.
pub fn decode(encoded: &Matrix, encoder: &Matrix) -> Result<Matrix, AlatError> {
    check_encoder(encoded, encoder)?;
    encoded.matmul(&encoder.inverse()?)
}

/// Decodes an encoded matrix all the way back to the message text. Cells
/// are rounded to the nearest code so elimination noise cannot shift a
/// character; sentinel cells are skipped.
pub fn to_message(encoded: &Matrix, encoder: &Matrix) -> Result<String, AlatError> {
    let decoded = decode(encoded, encoder)?;
    let mut message = String::new();
    for &cell in decoded.as_slice() {
        let code = cell.round();
        if code == -1.0 {
            continue;
        }
        if code < 0.0 || code >= ALPHABET.len() as f64 {
            return Err(AlatError::invalid_argument(&format!(
                "decoded value {} is outside the cipher alphabet",
                cell
            )));
        }
        message.push(ALPHABET[code as usize]);
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_matrix_pads_with_sentinel() {
        let m = to_matrix("AB").unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
        // 'A' is code 10, 'B' is code 11
        assert_eq!(m.as_slice(), &[10.0, 11.0, -1.0, -1.0]);
    }

    #[test]
    fn to_matrix_rejects_unknown_characters() {
        assert!(matches!(
            to_matrix("A\u{00df}"),
            Err(AlatError::InvalidArgument(_))
        ));
    }

    #[test]
    fn encode_rejects_singular_encoder() {
        let singular = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert!(matches!(
            encode("AB", &singular),
            Err(AlatError::NotInvertible(_))
        ));
    }

    #[test]
    fn encode_rejects_mismatched_encoder() {
        let encoder = Matrix::from_rows(vec![
            vec![1.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ])
        .unwrap();
        assert!(matches!(encode("AB", &encoder), Err(AlatError::ShapeError(_))));
    }
}
