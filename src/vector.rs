//! Vector geometry on top of the matrix engine. Angles are carried in
//! degrees throughout, matching the coordinate-transform conventions.

use std::f64::consts::PI;

use crate::error::AlatError;
use crate::matrix::Matrix;

/// Dimension cap, shared with the matrix capacity.
pub const MAX_DIM: usize = 32;

/// Coordinate system a vector's components are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    Cartesian,
    Cylindrical,
    Spherical,
}

/// Output form for `angle`: the raw cosine, radians, or degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleForm {
    Decimal,
    Radians,
    Degrees,
}

fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinate: Coordinate,
    components: Vec<f64>,
}

impl Vector {
    pub fn new(coordinate: Coordinate, components: Vec<f64>) -> Result<Self, AlatError> {
        if components.is_empty() || components.len() > MAX_DIM {
            return Err(AlatError::shape(&format!(
                "vector dimension must be between 1 and {}",
                MAX_DIM
            )));
        }
        Ok(Vector {
            coordinate,
            components,
        })
    }

    pub fn cartesian(components: &[f64]) -> Result<Self, AlatError> {
        Vector::new(Coordinate::Cartesian, components.to_vec())
    }

    pub fn cylindrical(components: &[f64]) -> Result<Self, AlatError> {
        Vector::new(Coordinate::Cylindrical, components.to_vec())
    }

    pub fn spherical(components: &[f64]) -> Result<Self, AlatError> {
        Vector::new(Coordinate::Spherical, components.to_vec())
    }

    pub fn dim(&self) -> usize {
        self.components.len()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn components(&self) -> &[f64] {
        &self.components
    }

    fn require_cartesian(&self, operation: &str) -> Result<(), AlatError> {
        if self.coordinate != Coordinate::Cartesian {
            return Err(AlatError::invalid_argument(&format!(
                "{} requires a cartesian vector",
                operation
            )));
        }
        Ok(())
    }

    fn require_same_dim(&self, other: &Vector, operation: &str) -> Result<(), AlatError> {
        if self.dim() != other.dim() {
            return Err(AlatError::shape(&format!(
                "{} requires equal dimensions, got {} and {}",
                operation,
                self.dim(),
                other.dim()
            )));
        }
        Ok(())
    }

    /// Re-expresses a three-dimensional vector in another coordinate
    /// system. Angular components are degrees on both sides.
    pub fn transform(&self, coordinate: Coordinate) -> Result<Vector, AlatError> {
        if self.dim() != 3 {
            return Err(AlatError::shape(
                "coordinate transform requires a three-dimensional vector",
            ));
        }
        let (a, b, c) = (self.components[0], self.components[1], self.components[2]);
        let components = match (self.coordinate, coordinate) {
            (Coordinate::Cartesian, Coordinate::Cylindrical) => {
                vec![(a * a + b * b).sqrt(), degrees((b / a).atan()), c]
            }
            (Coordinate::Cartesian, Coordinate::Spherical) => {
                let radius = (a * a + b * b + c * c).sqrt();
                vec![
                    radius,
                    degrees((c / radius).acos()),
                    degrees((b / a).atan()),
                ]
            }
            (Coordinate::Cylindrical, Coordinate::Cartesian) => {
                vec![a * radians(b).cos(), a * radians(b).sin(), c]
            }
            (Coordinate::Cylindrical, Coordinate::Spherical) => {
                vec![(a * a + c * c).sqrt(), degrees((a / c).atan()), b]
            }
            (Coordinate::Spherical, Coordinate::Cartesian) => vec![
                a * radians(b).sin() * radians(c).cos(),
                a * radians(b).sin() * radians(c).sin(),
                a * radians(b).cos(),
            ],
            (Coordinate::Spherical, Coordinate::Cylindrical) => {
                vec![a * radians(b).sin(), c, a * radians(b).cos()]
            }
            _ => self.components.clone(),
        };
        Vector::new(coordinate, components)
    }

    pub fn length(&self) -> Result<f64, AlatError> {
        self.require_cartesian("length")?;
        Ok(self.components.iter().map(|&v| v * v).sum::<f64>().sqrt())
    }

    /// Unit vector along `self`; the zero vector has no direction.
    pub fn unit(&self) -> Result<Vector, AlatError> {
        let length = self.length()?;
        if length == 0.0 {
            return Err(AlatError::divide_by_zero("zero vector has no unit vector"));
        }
        let components = self.components.iter().map(|&v| v / length).collect();
        Vector::new(Coordinate::Cartesian, components)
    }

    pub fn add(&self, other: &Vector) -> Result<Vector, AlatError> {
        self.require_cartesian("add")?;
        other.require_cartesian("add")?;
        self.require_same_dim(other, "add")?;
        let components = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| a + b)
            .collect();
        Vector::new(Coordinate::Cartesian, components)
    }

    pub fn scalar_mul(&self, scalar: f64) -> Result<Vector, AlatError> {
        self.require_cartesian("scalar multiply")?;
        let components = self.components.iter().map(|&v| v * scalar).collect();
        Vector::new(Coordinate::Cartesian, components)
    }

    pub fn distance(&self, other: &Vector) -> Result<f64, AlatError> {
        self.require_cartesian("distance")?;
        other.require_cartesian("distance")?;
        self.require_same_dim(other, "distance")?;
        let squares: f64 = self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| (a - b).powi(2))
            .sum();
        Ok(squares.sqrt())
    }

    pub fn dot(&self, other: &Vector) -> Result<f64, AlatError> {
        self.require_cartesian("dot product")?;
        other.require_cartesian("dot product")?;
        self.require_same_dim(other, "dot product")?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(&a, &b)| a * b)
            .sum())
    }

    /// Cross product of two three-dimensional cartesian vectors, read off
    /// the first row of the cofactor map of [[1,1,1], self, other] — the
    /// usual expansion along the ones row.
    pub fn cross(&self, other: &Vector) -> Result<Vector, AlatError> {
        self.require_cartesian("cross product")?;
        other.require_cartesian("cross product")?;
        if self.dim() != 3 || other.dim() != 3 {
            return Err(AlatError::shape(
                "cross product requires three-dimensional vectors",
            ));
        }
        let matrix = Matrix::from_rows(vec![
            vec![1.0, 1.0, 1.0],
            self.components.clone(),
            other.components.clone(),
        ])?;
        let cofactors = matrix.cofactors()?;
        Vector::new(Coordinate::Cartesian, cofactors.row(0)?.to_vec())
    }

    /// Angle between two non-zero cartesian vectors, as a cosine
    /// (`Decimal`), radians, or degrees.
    pub fn angle(&self, other: &Vector, form: AngleForm) -> Result<f64, AlatError> {
        self.require_same_dim(other, "angle")?;
        if self.is_zeros() || other.is_zeros() {
            return Err(AlatError::divide_by_zero(
                "angle is undefined for the zero vector",
            ));
        }
        let cosine = self.dot(other)? / (self.length()? * other.length()?);
        Ok(match form {
            AngleForm::Decimal => cosine,
            AngleForm::Radians => cosine.acos(),
            AngleForm::Degrees => degrees(cosine.acos()),
        })
    }

    pub fn is_equal(&self, other: &Vector) -> bool {
        self.coordinate == other.coordinate && self.components == other.components
    }

    pub fn is_zeros(&self) -> bool {
        self.components.iter().all(|&v| v == 0.0)
    }

    /// Cauchy-Schwarz inequality for the pair.
    pub fn is_cauchy_schwarz(&self, other: &Vector) -> bool {
        let (both, left, right) = match (
            self.dot(other),
            self.dot(self),
            other.dot(other),
        ) {
            (Ok(a), Ok(b), Ok(c)) => (a, b, c),
            _ => return false,
        };
        both * both <= left * right
    }

    /// Triangle inequality for the pair.
    pub fn is_triangle(&self, other: &Vector) -> bool {
        match (self.length(), other.length(), self.add(other)) {
            (Ok(a), Ok(b), Ok(sum)) => match sum.length() {
                Ok(c) => a + b >= c,
                Err(_) => false,
            },
            _ => false,
        }
    }

    /// Pythagorean identity for the pair, with exact comparison.
    pub fn is_pythagorean(&self, other: &Vector) -> bool {
        match (self.length(), other.length(), self.add(other)) {
            (Ok(a), Ok(b), Ok(sum)) => match sum.length() {
                Ok(c) => c.powi(2) == a.powi(2) + b.powi(2),
                Err(_) => false,
            },
            _ => false,
        }
    }

    /// True when the vectors meet at exactly 90 degrees.
    pub fn is_steep(&self, other: &Vector) -> bool {
        self.angle(other, AngleForm::Degrees).map_or(false, |a| a == 90.0)
    }

    /// True when the vectors point exactly opposite ways.
    pub fn is_parallel(&self, other: &Vector) -> bool {
        self.angle(other, AngleForm::Degrees).map_or(false, |a| a == 180.0)
    }
}
