//! The elimination pipeline: determinant by pivoted forward elimination,
//! then minors, cofactors, adjugate, inverse, and linear solve on top of it.

use rayon::prelude::*;

use crate::error::AlatError;
use crate::matrix::{Matrix, Shape};

impl Matrix {
    /// Determinant of a square matrix.
    ///
    /// 1x1 and 2x2 are closed-form. Larger matrices are reduced to upper
    /// triangular form by row operations: a zero pivot swaps in the first
    /// nonzero row below it and flips the sign; a pivot column that is zero
    /// all the way down means the determinant is zero. The pivot row itself
    /// is never scaled, so the determinant is the signed product of the
    /// final diagonal.
    pub fn determinant(&self) -> Result<f64, AlatError> {
        if !self.is_square() {
            return Err(AlatError::shape("determinant requires a square matrix"));
        }
        let n = self.rows();
        if n == 1 {
            return Ok(self.at(0, 0));
        }
        if n == 2 {
            return Ok(self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0));
        }

        let mut cells = self.as_slice().to_vec();
        let mut sign = 1.0;
        for k in 0..n {
            if cells[k * n + k] == 0.0 {
                match (k + 1..n).find(|&r| cells[r * n + k] != 0.0) {
                    Some(nonzero) => {
                        for j in 0..n {
                            cells.swap(k * n + j, nonzero * n + j);
                        }
                        sign = -sign;
                    }
                    None => return Ok(0.0),
                }
            }
            for i in k + 1..n {
                let coef = -cells[i * n + k] / cells[k * n + k];
                for j in 0..n {
                    cells[i * n + j] += coef * cells[k * n + j];
                }
            }
        }

        let mut product = 1.0;
        for i in 0..n {
            product *= cells[i * n + i];
        }
        Ok(sign * product)
    }

    /// Copy of the matrix with row `row` and column `col` deleted. Callers
    /// guarantee a square matrix with n >= 2.
    fn submatrix(&self, row: usize, col: usize) -> Matrix {
        let n = self.rows();
        let shape = Shape {
            rows: n - 1,
            cols: n - 1,
        };
        let mut data = Vec::with_capacity(shape.len());
        for i in 0..n {
            if i == row {
                continue;
            }
            for j in 0..n {
                if j == col {
                    continue;
                }
                data.push(self.at(i, j));
            }
        }
        Matrix::from_parts(shape, data)
    }

    /// Map of minors: cell (i, j) holds the determinant of the submatrix
    /// with row i and column j deleted. The cells are independent, so they
    /// are computed in parallel; the result is identical to a sequential
    /// pass. A 1x1 matrix yields [[1.0]], the determinant of the empty
    /// submatrix.
    pub fn minors(&self) -> Result<Matrix, AlatError> {
        if !self.is_square() {
            return Err(AlatError::shape("minors require a square matrix"));
        }
        let n = self.rows();
        if n == 1 {
            return Ok(Matrix::from_parts(self.shape(), vec![1.0]));
        }
        let data = (0..n * n)
            .into_par_iter()
            .map(|ix| self.submatrix(ix / n, ix % n).determinant())
            .collect::<Result<Vec<f64>, AlatError>>()?;
        Ok(Matrix::from_parts(self.shape(), data))
    }

    /// Minors with alternating signs: cells at odd (i + j) are negated.
    /// Zero minors are left alone so the map never carries -0.0.
    pub fn cofactors(&self) -> Result<Matrix, AlatError> {
        let minors = self.minors()?;
        let n = minors.rows();
        let data = minors
            .as_slice()
            .iter()
            .enumerate()
            .map(|(ix, &value)| {
                if (ix / n + ix % n) % 2 == 1 && value != 0.0 {
                    -value
                } else {
                    value
                }
            })
            .collect();
        Ok(Matrix::from_parts(minors.shape(), data))
    }

    /// Transpose of the cofactor map.
    pub fn adjugate(&self) -> Result<Matrix, AlatError> {
        Ok(self.cofactors()?.transpose())
    }

    /// Inverse via the adjugate formula; fails on a singular matrix.
    pub fn inverse(&self) -> Result<Matrix, AlatError> {
        let determinant = self.determinant()?;
        if determinant == 0.0 {
            return Err(AlatError::not_invertible("determinant is zero"));
        }
        self.adjugate()?.scalar_div(determinant)
    }

    /// Solves the linear system held in an augmented matrix (a square
    /// coefficient block plus one target column). The result is the
    /// rows x 1 column of solution values.
    pub fn solve(&self) -> Result<Matrix, AlatError> {
        if self.cols() != self.rows() + 1 {
            return Err(AlatError::shape(
                "solve expects an augmented matrix with cols == rows + 1",
            ));
        }
        let n = self.rows();
        let main_shape = Shape { rows: n, cols: n };
        let target_shape = Shape { rows: n, cols: 1 };
        let mut main = Vec::with_capacity(main_shape.len());
        let mut target = Vec::with_capacity(n);
        for i in 0..n {
            for j in 0..n {
                main.push(self.at(i, j));
            }
            target.push(self.at(i, n));
        }
        let main = Matrix::from_parts(main_shape, main);
        let target = Matrix::from_parts(target_shape, target);
        if !main.is_invertible() {
            return Err(AlatError::not_invertible(
                "coefficient block of the augmented matrix is singular",
            ));
        }
        main.inverse()?.matmul(&target)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::AlatError;
    use crate::matrix::Matrix;

    #[test]
    fn determinant_rejects_non_square() {
        let wide = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert!(matches!(wide.determinant(), Err(AlatError::ShapeError(_))));
    }

    #[test]
    fn determinant_small_cases() {
        let one = Matrix::from_rows(vec![vec![7.0]]).unwrap();
        assert_eq!(one.determinant().unwrap(), 7.0);
        let two = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(two.determinant().unwrap(), -2.0);
    }

    #[test]
    fn zero_pivot_column_short_circuits_to_zero() {
        let m = Matrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![0.0, 3.0, 4.0],
            vec![0.0, 5.0, 6.0],
        ])
        .unwrap();
        assert_eq!(m.determinant().unwrap(), 0.0);
    }

    #[test]
    fn minors_of_unit_matrix() {
        let one = Matrix::from_rows(vec![vec![5.0]]).unwrap();
        assert_eq!(one.minors().unwrap().as_slice(), &[1.0]);
        assert_eq!(one.inverse().unwrap().as_slice(), &[0.2]);
    }
}
