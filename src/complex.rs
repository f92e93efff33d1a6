//! Complex numbers in cartesian or polar form. Polar angles are degrees;
//! addition and subtraction run through the cartesian form, multiplication
//! and division through the polar form.

use std::f64::consts::PI;

use crate::error::AlatError;

/// Form a complex number's two components are expressed in: cartesian
/// holds (real, imaginary), polar holds (modulus, argument in degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Cartesian,
    Polar,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    form: Form,
    first: f64,
    second: f64,
}

fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

impl Complex {
    pub fn cartesian(real: f64, imaginary: f64) -> Self {
        Complex {
            form: Form::Cartesian,
            first: real,
            second: imaginary,
        }
    }

    pub fn polar(modulus: f64, argument: f64) -> Self {
        Complex {
            form: Form::Polar,
            first: modulus,
            second: argument,
        }
    }

    pub fn zero(form: Form) -> Self {
        Complex {
            form,
            first: 0.0,
            second: 0.0,
        }
    }

    pub fn form(&self) -> Form {
        self.form
    }

    pub fn components(&self) -> (f64, f64) {
        (self.first, self.second)
    }

    pub fn is_cartesian(&self) -> bool {
        self.form == Form::Cartesian
    }

    pub fn is_polar(&self) -> bool {
        self.form == Form::Polar
    }

    pub fn is_zero(&self) -> bool {
        self.first == 0.0 && self.second == 0.0
    }

    /// Form and both components equal, exactly.
    pub fn is_equal(&self, other: &Complex) -> bool {
        self.form == other.form && self.first == other.first && self.second == other.second
    }

    /// Re-expresses the number in the requested form.
    pub fn transform(&self, form: Form) -> Complex {
        match (self.form, form) {
            (Form::Cartesian, Form::Polar) => Complex::polar(
                (self.first * self.first + self.second * self.second).sqrt(),
                degrees(self.second.atan2(self.first)),
            ),
            (Form::Polar, Form::Cartesian) => Complex::cartesian(
                self.first * radians(self.second).cos(),
                self.first * radians(self.second).sin(),
            ),
            _ => *self,
        }
    }

    pub fn real(&self) -> f64 {
        self.transform(Form::Cartesian).first
    }

    pub fn imaginary(&self) -> f64 {
        self.transform(Form::Cartesian).second
    }

    pub fn modulus(&self) -> f64 {
        self.transform(Form::Polar).first
    }

    /// Argument in degrees.
    pub fn argument(&self) -> f64 {
        self.transform(Form::Polar).second
    }

    pub fn add(&self, other: &Complex, output_form: Form) -> Complex {
        let a = self.transform(Form::Cartesian);
        let b = other.transform(Form::Cartesian);
        Complex::cartesian(a.first + b.first, a.second + b.second).transform(output_form)
    }

    pub fn subtract(&self, other: &Complex, output_form: Form) -> Complex {
        let a = self.transform(Form::Cartesian);
        let b = other.transform(Form::Cartesian);
        Complex::cartesian(a.first - b.first, a.second - b.second).transform(output_form)
    }

    /// Product via the polar form: moduli multiply, arguments add.
    pub fn multiply(&self, other: &Complex, output_form: Form) -> Complex {
        let a = self.transform(Form::Polar);
        let b = other.transform(Form::Polar);
        Complex::polar(a.first * b.first, a.second + b.second).transform(output_form)
    }

    /// Quotient via the polar form; a zero divisor has no reciprocal.
    pub fn divide(&self, other: &Complex, output_form: Form) -> Result<Complex, AlatError> {
        let a = self.transform(Form::Polar);
        let b = other.transform(Form::Polar);
        if b.first == 0.0 {
            return Err(AlatError::divide_by_zero("complex divisor is zero"));
        }
        Ok(Complex::polar(a.first / b.first, a.second - b.second).transform(output_form))
    }

    /// De Moivre power: modulus to the n, argument times n.
    pub fn power(&self, n: f64, output_form: Form) -> Complex {
        let polar = self.transform(Form::Polar);
        Complex::polar(polar.first.powf(n), polar.second * n).transform(output_form)
    }

    /// Principal n-th root.
    pub fn root(&self, n: f64, output_form: Form) -> Result<Complex, AlatError> {
        if n == 0.0 {
            return Err(AlatError::divide_by_zero("zeroth root is undefined"));
        }
        let polar = self.transform(Form::Polar);
        Ok(Complex::polar(polar.first.powf(1.0 / n), polar.second / n).transform(output_form))
    }

    pub fn conjugate(&self, output_form: Form) -> Complex {
        let cartesian = self.transform(Form::Cartesian);
        Complex::cartesian(cartesian.first, -cartesian.second).transform(output_form)
    }

    pub fn reciprocal(&self, output_form: Form) -> Result<Complex, AlatError> {
        if self.modulus() == 0.0 {
            return Err(AlatError::divide_by_zero("zero has no reciprocal"));
        }
        Ok(self.power(-1.0, output_form))
    }

    /// Triangle inequality on moduli.
    pub fn is_triangle(&self, other: &Complex) -> bool {
        self.modulus() + other.modulus() >= self.add(other, Form::Polar).first
    }
}
