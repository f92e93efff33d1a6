//! Applications of the elimination pipeline: polynomial interpolation,
//! least-squares regression, and determinant-based area/volume.

use crate::error::AlatError;
use crate::matrix::{Matrix, Shape};

fn column(values: &[f64]) -> Result<Matrix, AlatError> {
    let shape = Shape::new(values.len(), 1)?;
    Matrix::new(shape, values.to_vec())
}

/// Fits the unique polynomial of degree n-1 through n points: builds the
/// Vandermonde matrix of x powers and solves it against the y column. The
/// result holds the coefficients from the constant term upward. Repeated
/// x values make the system singular.
pub fn poly_curve_fitting(x_points: &[f64], y_points: &[f64]) -> Result<Vec<f64>, AlatError> {
    if x_points.len() != y_points.len() {
        return Err(AlatError::shape(
            "curve fitting needs as many y points as x points",
        ));
    }
    let n = x_points.len();
    let shape = Shape::square(n)?;
    let mut powers = Vec::with_capacity(shape.len());
    for &x in x_points {
        for exponent in 0..n {
            powers.push(x.powi(exponent as i32));
        }
    }
    let vandermonde = Matrix::new(shape, powers)?;
    let target = column(y_points)?;
    let coefficients = vandermonde.inverse()?.matmul(&target)?;
    Ok(coefficients.as_slice().to_vec())
}

/// Least-squares line through the points, solved from the normal
/// equations. Returns (intercept, slope).
pub fn least_squares_reg(x_points: &[f64], y_points: &[f64]) -> Result<(f64, f64), AlatError> {
    if x_points.len() != y_points.len() {
        return Err(AlatError::shape(
            "regression needs as many y points as x points",
        ));
    }
    let n = x_points.len();
    let mut design = Vec::with_capacity(2 * n);
    design.extend(std::iter::repeat(1.0).take(n));
    design.extend_from_slice(x_points);
    let design = Matrix::new(Shape::new(2, n)?, design)?;
    let target = column(y_points)?;

    let gram = design.matmul(&design.transpose())?;
    let moment = design.matmul(&target)?;
    let solution = gram.inverse()?.matmul(&moment)?;
    Ok((solution.get(0, 0)?, solution.get(1, 0)?))
}

/// Area of the triangle with the given corner coordinates, via the 3x3
/// determinant of the points against a ones row.
pub fn triangle_area(x_points: &[f64], y_points: &[f64]) -> Result<f64, AlatError> {
    if x_points.len() != 3 || y_points.len() != 3 {
        return Err(AlatError::shape("a triangle has exactly three corners"));
    }
    let matrix = Matrix::from_rows(vec![
        x_points.to_vec(),
        y_points.to_vec(),
        vec![1.0, 1.0, 1.0],
    ])?;
    Ok((matrix.determinant()? / 2.0).abs())
}

/// Volume of the tetrahedron with the given corner coordinates, via the
/// 4x4 determinant of the points against a ones row.
pub fn tetrahedron_volume(
    x_points: &[f64],
    y_points: &[f64],
    z_points: &[f64],
) -> Result<f64, AlatError> {
    if x_points.len() != 4 || y_points.len() != 4 || z_points.len() != 4 {
        return Err(AlatError::shape("a tetrahedron has exactly four corners"));
    }
    let matrix = Matrix::from_rows(vec![
        x_points.to_vec(),
        y_points.to_vec(),
        z_points.to_vec(),
        vec![1.0, 1.0, 1.0, 1.0],
    ])?;
    Ok((matrix.determinant()? / 6.0).abs())
}
