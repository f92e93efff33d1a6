//! Matrix generators. Every randomized generator takes the random source as
//! an explicit argument so callers control seeding; nothing here touches a
//! process-wide RNG.

use rand::Rng;

use crate::error::AlatError;
use crate::matrix::{Matrix, Shape};

/// Matrix filled with zeros.
pub fn zeros(shape: Shape) -> Matrix {
    arbitrary(0.0, shape)
}

/// Matrix filled with ones.
pub fn ones(shape: Shape) -> Matrix {
    arbitrary(1.0, shape)
}

/// Matrix filled with one constant value.
pub fn arbitrary(value: f64, shape: Shape) -> Matrix {
    Matrix::from_parts(shape, vec![value; shape.len()])
}

/// Identity matrix; the shape must be square.
pub fn identity(shape: Shape) -> Result<Matrix, AlatError> {
    if !shape.is_square() {
        return Err(AlatError::shape("identity matrix must be square"));
    }
    let mut data = vec![0.0; shape.len()];
    for i in 0..shape.rows() {
        data[i * shape.cols() + i] = 1.0;
    }
    Ok(Matrix::from_parts(shape, data))
}

/// Linear ramp from `start` to `end` inclusive, laid out in row-major
/// order. A single-cell shape yields just `start`.
pub fn sequential(start: f64, end: f64, shape: Shape) -> Matrix {
    let count = shape.len();
    if count == 1 {
        return Matrix::from_parts(shape, vec![start]);
    }
    let step = (end - start) / (count as f64 - 1.0);
    let data = (0..count).map(|i| start + step * i as f64).collect();
    Matrix::from_parts(shape, data)
}

/// One sample in the unit interval: two independent draws, the smaller
/// divided by the larger. The ratio leans toward 1, which downstream
/// behavior depends on; both draws landing on 0.0 yields 0.0.
fn unit_sample<R: Rng>(rng: &mut R) -> f64 {
    let first: f64 = rng.gen();
    let second: f64 = rng.gen();
    let (smaller, larger) = if first < second {
        (first, second)
    } else {
        (second, first)
    };
    if larger == 0.0 {
        0.0
    } else {
        smaller / larger
    }
}

/// Matrix of unit-interval samples.
pub fn random<R: Rng>(shape: Shape, rng: &mut R) -> Matrix {
    let data = (0..shape.len()).map(|_| unit_sample(rng)).collect();
    Matrix::from_parts(shape, data)
}

/// Matrix of samples in `[start, end]`. Each cell is a scaled unit sample,
/// redrawn until it lands inside the range.
pub fn uniform<R: Rng>(
    start: f64,
    end: f64,
    shape: Shape,
    rng: &mut R,
) -> Result<Matrix, AlatError> {
    if end < start {
        return Err(AlatError::range("end must not be smaller than start"));
    }
    let data = (0..shape.len())
        .map(|_| loop {
            let value = start + unit_sample(rng) * (end - start);
            if value >= start && value <= end {
                break value;
            }
        })
        .collect();
    Ok(Matrix::from_parts(shape, data))
}

/// Matrix of integral samples in `[start, end]`: `uniform` truncated
/// toward zero.
pub fn randint<R: Rng>(
    start: f64,
    end: f64,
    shape: Shape,
    rng: &mut R,
) -> Result<Matrix, AlatError> {
    let sampled = uniform(start, end, shape, rng)?;
    let data = sampled.as_slice().iter().map(|v| v.trunc()).collect();
    Ok(Matrix::from_parts(shape, data))
}
