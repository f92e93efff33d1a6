//! Structural predicates. All element comparisons are exact; the engine
//! never applies a tolerance.

use crate::matrix::Matrix;

impl Matrix {
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// True when the last column of every row is zero.
    pub fn is_homogeneous(&self) -> bool {
        (0..self.rows()).all(|i| self.at(i, self.cols() - 1) == 0.0)
    }

    pub fn is_zeros(&self) -> bool {
        self.is_arbitrary(0.0)
    }

    pub fn is_ones(&self) -> bool {
        self.is_arbitrary(1.0)
    }

    /// True when every cell equals `value`.
    pub fn is_arbitrary(&self, value: f64) -> bool {
        self.as_slice().iter().all(|&v| v == value)
    }

    pub fn is_identity(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                let expected = if i == j { 1.0 } else { 0.0 };
                if self.at(i, j) != expected {
                    return false;
                }
            }
        }
        true
    }

    /// True when every cell above the main diagonal is zero.
    pub fn is_lower_triangular(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.rows() {
            for j in i + 1..self.cols() {
                if self.at(i, j) != 0.0 {
                    return false;
                }
            }
        }
        true
    }

    /// Upper triangular is lower triangular of the transpose.
    pub fn is_upper_triangular(&self) -> bool {
        self.transpose().is_lower_triangular()
    }

    pub fn is_triangular(&self) -> bool {
        self.is_lower_triangular() || self.is_upper_triangular()
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_lower_triangular() && self.is_upper_triangular()
    }

    pub fn is_symmetric(&self) -> bool {
        self.is_square() && self.is_equal(&self.transpose())
    }

    /// Shape and every cell equal, exactly.
    pub fn is_equal(&self, other: &Matrix) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }

    /// A matrix is invertible iff its determinant is non-zero. Non-square
    /// input is simply not invertible.
    pub fn is_invertible(&self) -> bool {
        self.determinant().map(|d| d != 0.0).unwrap_or(false)
    }
}
