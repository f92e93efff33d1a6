//! Element-wise and structural operators. Shape requirements are checked up
//! front; every operator returns a fresh matrix.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::AlatError;
use crate::matrix::{Axis, Matrix, Shape};

impl Matrix {
    fn require_same_shape(&self, other: &Matrix, operation: &str) -> Result<(), AlatError> {
        if self.shape() != other.shape() {
            return Err(AlatError::shape(&format!(
                "{} requires matching shapes, got ({},{}) and ({},{})",
                operation,
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        Ok(())
    }

    fn zip_cells<F>(&self, other: &Matrix, mut f: F) -> Matrix
    where
        F: FnMut(f64, f64) -> f64,
    {
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_parts(self.shape(), data)
    }

    pub fn transpose(&self) -> Matrix {
        let shape = Shape {
            rows: self.cols(),
            cols: self.rows(),
        };
        let mut data = vec![0.0; shape.len()];
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                data[j * shape.cols + i] = self.at(i, j);
            }
        }
        Matrix::from_parts(shape, data)
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix, AlatError> {
        self.require_same_shape(other, "add")?;
        Ok(self.zip_cells(other, |a, b| a + b))
    }

    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, AlatError> {
        self.require_same_shape(other, "subtract")?;
        Ok(self.zip_cells(other, |a, b| a - b))
    }

    pub fn elementwise_mul(&self, other: &Matrix) -> Result<Matrix, AlatError> {
        self.require_same_shape(other, "elementwise multiply")?;
        Ok(self.zip_cells(other, |a, b| a * b))
    }

    pub fn elementwise_div(&self, other: &Matrix) -> Result<Matrix, AlatError> {
        self.require_same_shape(other, "elementwise divide")?;
        if other.as_slice().iter().any(|&v| v == 0.0) {
            return Err(AlatError::divide_by_zero(
                "divisor matrix contains a zero cell",
            ));
        }
        Ok(self.zip_cells(other, |a, b| a / b))
    }

    pub fn scalar_mul(&self, scalar: f64) -> Matrix {
        let data = self.as_slice().iter().map(|&v| v * scalar).collect();
        Matrix::from_parts(self.shape(), data)
    }

    pub fn scalar_div(&self, scalar: f64) -> Result<Matrix, AlatError> {
        if scalar == 0.0 {
            return Err(AlatError::divide_by_zero("scalar divisor is zero"));
        }
        let data = self.as_slice().iter().map(|&v| v / scalar).collect();
        Ok(Matrix::from_parts(self.shape(), data))
    }

    /// Standard matrix product: `self.cols` must equal `other.rows`, and
    /// each result cell is the dot product of a row of `self` with a
    /// column of `other`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix, AlatError> {
        if self.cols() != other.rows() {
            return Err(AlatError::shape(&format!(
                "cannot multiply ({},{}) by ({},{})",
                self.rows(),
                self.cols(),
                other.rows(),
                other.cols()
            )));
        }
        let shape = Shape::new(self.rows(), other.cols())?;
        let mut data = vec![0.0; shape.len()];
        for i in 0..shape.rows {
            for j in 0..shape.cols {
                data[i * shape.cols + j] =
                    (0..self.cols()).map(|k| self.at(i, k) * other.at(k, j)).sum();
            }
        }
        Ok(Matrix::from_parts(shape, data))
    }

    /// Joins two matrices. `Vertical` stacks the rows of `other` below
    /// `self` (column counts must match); `Horizontal` appends its columns
    /// on the right (row counts must match).
    pub fn concat(&self, other: &Matrix, axis: Axis) -> Result<Matrix, AlatError> {
        match axis {
            Axis::Vertical => {
                if self.cols() != other.cols() {
                    return Err(AlatError::shape(
                        "vertical concatenation requires equal column counts",
                    ));
                }
                let shape = Shape::new(self.rows() + other.rows(), self.cols())?;
                let mut data = Vec::with_capacity(shape.len());
                data.extend_from_slice(self.as_slice());
                data.extend_from_slice(other.as_slice());
                Ok(Matrix::from_parts(shape, data))
            }
            Axis::Horizontal => {
                if self.rows() != other.rows() {
                    return Err(AlatError::shape(
                        "horizontal concatenation requires equal row counts",
                    ));
                }
                let shape = Shape::new(self.rows(), self.cols() + other.cols())?;
                let mut data = Vec::with_capacity(shape.len());
                for i in 0..self.rows() {
                    data.extend_from_slice(self.row(i)?);
                    data.extend_from_slice(other.row(i)?);
                }
                Ok(Matrix::from_parts(shape, data))
            }
        }
    }

    /// Reinterprets the row-major cell sequence under a new shape with the
    /// same cell count.
    pub fn reshape(&self, shape: Shape) -> Result<Matrix, AlatError> {
        if shape.len() != self.shape().len() {
            return Err(AlatError::shape(&format!(
                "cannot reshape ({},{}) into ({},{})",
                self.rows(),
                self.cols(),
                shape.rows,
                shape.cols
            )));
        }
        Ok(Matrix::from_parts(shape, self.as_slice().to_vec()))
    }

    /// Aggregates along one axis: `Vertical` collapses the rows into a
    /// 1 x cols row of column sums, `Horizontal` collapses the columns into
    /// a rows x 1 column of row sums.
    pub fn sum(&self, axis: Axis) -> Matrix {
        match axis {
            Axis::Vertical => {
                let shape = Shape {
                    rows: 1,
                    cols: self.cols(),
                };
                let data = (0..self.cols())
                    .map(|j| (0..self.rows()).map(|i| self.at(i, j)).sum())
                    .collect();
                Matrix::from_parts(shape, data)
            }
            Axis::Horizontal => {
                let shape = Shape {
                    rows: self.rows(),
                    cols: 1,
                };
                let data = (0..self.rows())
                    .map(|i| (0..self.cols()).map(|j| self.at(i, j)).sum())
                    .collect();
                Matrix::from_parts(shape, data)
            }
        }
    }

    /// Main diagonal as a 1 x n row; square matrices only.
    pub fn diagonal(&self) -> Result<Matrix, AlatError> {
        if !self.is_square() {
            return Err(AlatError::shape("diagonal requires a square matrix"));
        }
        let shape = Shape {
            rows: 1,
            cols: self.cols(),
        };
        let data = (0..self.rows()).map(|i| self.at(i, i)).collect();
        Ok(Matrix::from_parts(shape, data))
    }

    pub fn highest(&self) -> f64 {
        let mut high = self.as_slice()[0];
        for &v in self.as_slice() {
            if v > high {
                high = v;
            }
        }
        high
    }

    pub fn lowest(&self) -> f64 {
        let mut low = self.as_slice()[0];
        for &v in self.as_slice() {
            if v < low {
                low = v;
            }
        }
        low
    }

    /// Sorts the flattened row-major sequence and refills in the same
    /// order.
    pub fn sort(&self, ascending: bool) -> Matrix {
        let mut data = self.as_slice().to_vec();
        data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        if !ascending {
            data.reverse();
        }
        Matrix::from_parts(self.shape(), data)
    }

    /// Permutes the flattened cells. The permutation is drawn by sampling
    /// cell indices and discarding repeats until every index appears once.
    pub fn shuffle<R: Rng>(&self, rng: &mut R) -> Matrix {
        let count = self.shape().len();
        let mut indexes: Vec<usize> = Vec::with_capacity(count);
        while indexes.len() < count {
            let candidate = rng.gen_range(0..count);
            if !indexes.contains(&candidate) {
                indexes.push(candidate);
            }
        }
        let data = indexes.into_iter().map(|ix| self.as_slice()[ix]).collect();
        Matrix::from_parts(self.shape(), data)
    }

    pub fn mean(&self) -> f64 {
        self.as_slice().iter().sum::<f64>() / self.shape().len() as f64
    }

    /// Population standard deviation (divides by n).
    pub fn stddev(&self) -> f64 {
        let mean = self.mean();
        let squares: f64 = self.as_slice().iter().map(|&v| (v - mean).powi(2)).sum();
        (squares / self.shape().len() as f64).sqrt()
    }

    /// Median of the sorted flattened sequence; an even cell count averages
    /// the two middle elements.
    pub fn median(&self) -> f64 {
        let sorted = self.sort(true);
        let cells = sorted.as_slice();
        let n = cells.len();
        if n % 2 == 1 {
            cells[n / 2]
        } else {
            (cells[n / 2 - 1] + cells[n / 2]) / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::generate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn transpose_round_trips_exactly() {
        let m = sample();
        assert!(m.transpose().transpose().is_equal(&m));
    }

    #[test]
    fn elementwise_div_rejects_zero_cells() {
        let m = sample();
        let divisor = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 6.0]]).unwrap();
        assert!(matches!(
            m.elementwise_div(&divisor),
            Err(AlatError::DivideByZero(_))
        ));
    }

    #[test]
    fn sum_shapes() {
        let m = sample();
        let vertical = m.sum(Axis::Vertical);
        assert_eq!((vertical.rows(), vertical.cols()), (1, 3));
        assert_eq!(vertical.as_slice(), &[5.0, 7.0, 9.0]);
        let horizontal = m.sum(Axis::Horizontal);
        assert_eq!((horizontal.rows(), horizontal.cols()), (2, 1));
        assert_eq!(horizontal.as_slice(), &[6.0, 15.0]);
    }

    #[test]
    fn concat_and_reshape() {
        let m = sample();
        let stacked = m.concat(&m, Axis::Vertical).unwrap();
        assert_eq!((stacked.rows(), stacked.cols()), (4, 3));
        let wide = m.concat(&m, Axis::Horizontal).unwrap();
        assert_eq!((wide.rows(), wide.cols()), (2, 6));
        assert_eq!(wide.row(0).unwrap(), &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);

        let reshaped = m.reshape(Shape::new(3, 2).unwrap()).unwrap();
        assert_eq!(reshaped.row(1).unwrap(), &[3.0, 4.0]);
        assert!(m.reshape(Shape::new(2, 2).unwrap()).is_err());
    }

    #[test]
    fn shuffle_preserves_cells() {
        let m = sample();
        let mut rng = StdRng::seed_from_u64(11);
        let shuffled = m.shuffle(&mut rng);
        let mut before = m.as_slice().to_vec();
        let mut after = shuffled.as_slice().to_vec();
        before.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        after.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        assert_eq!(before, after);
    }

    #[test]
    fn statistics_match_hand_computation() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.mean(), 2.5);
        assert_eq!(m.median(), 2.5);
        assert!((m.stddev() - (1.25f64).sqrt()).abs() < 1e-12);
        let odd = Matrix::from_rows(vec![vec![5.0, 1.0, 3.0]]).unwrap();
        assert_eq!(odd.median(), 3.0);
    }

    #[test]
    fn matmul_against_identity() {
        let m = sample();
        let eye = generate::identity(Shape::square(3).unwrap()).unwrap();
        assert!(m.matmul(&eye).unwrap().is_equal(&m));
        assert!(eye.matmul(&m).is_err());
    }
}
