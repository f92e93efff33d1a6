use alat::vector::{AngleForm, Coordinate, Vector};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn cylindrical_round_trip() {
    let v = Vector::cartesian(&[3.0, 4.0, 5.0]).unwrap();
    let cylindrical = v.transform(Coordinate::Cylindrical).unwrap();
    assert!(approx_eq(cylindrical.components()[0], 5.0, 1e-12));
    let back = cylindrical.transform(Coordinate::Cartesian).unwrap();
    for (restored, original) in back.components().iter().zip(v.components()) {
        assert!(approx_eq(*restored, *original, 1e-9));
    }
}

#[test]
fn spherical_round_trip() {
    let v = Vector::cartesian(&[1.0, 2.0, 2.0]).unwrap();
    let spherical = v.transform(Coordinate::Spherical).unwrap();
    assert!(approx_eq(spherical.components()[0], 3.0, 1e-12));
    let back = spherical.transform(Coordinate::Cartesian).unwrap();
    for (restored, original) in back.components().iter().zip(v.components()) {
        assert!(approx_eq(*restored, *original, 1e-9));
    }
}

#[test]
fn transform_requires_three_dimensions() {
    let flat = Vector::cartesian(&[1.0, 2.0]).unwrap();
    assert!(flat.transform(Coordinate::Spherical).is_err());
}

#[test]
fn cross_product_is_anticommutative() {
    let a = Vector::cartesian(&[1.0, 2.0, 3.0]).unwrap();
    let b = Vector::cartesian(&[4.0, 5.0, 6.0]).unwrap();
    let ab = a.cross(&b).unwrap();
    let ba = b.cross(&a).unwrap();
    assert_eq!(ab.components(), &[-3.0, 6.0, -3.0]);
    let negated: Vec<f64> = ba.components().iter().map(|&v| -v).collect();
    assert_eq!(ab.components(), negated.as_slice());
}

#[test]
fn cross_product_is_orthogonal_to_both_operands() {
    let a = Vector::cartesian(&[1.0, 2.0, 3.0]).unwrap();
    let b = Vector::cartesian(&[-2.0, 0.5, 4.0]).unwrap();
    let cross = a.cross(&b).unwrap();
    assert!(approx_eq(cross.dot(&a).unwrap(), 0.0, 1e-9));
    assert!(approx_eq(cross.dot(&b).unwrap(), 0.0, 1e-9));
}

#[test]
fn length_distance_and_unit() {
    let v = Vector::cartesian(&[3.0, 4.0]).unwrap();
    assert_eq!(v.length().unwrap(), 5.0);
    let origin = Vector::cartesian(&[0.0, 0.0]).unwrap();
    assert_eq!(v.distance(&origin).unwrap(), 5.0);
    assert!(approx_eq(v.unit().unwrap().length().unwrap(), 1.0, 1e-12));
}

#[test]
fn opposite_vectors_are_parallel() {
    let v = Vector::cartesian(&[2.0, 0.0]).unwrap();
    let w = Vector::cartesian(&[-3.0, 0.0]).unwrap();
    assert!(approx_eq(v.angle(&w, AngleForm::Decimal).unwrap(), -1.0, 1e-12));
    assert!(v.is_parallel(&w));
}

#[test]
fn inequality_predicates_hold_for_generic_vectors() {
    let a = Vector::cartesian(&[1.0, 2.0, 2.0]).unwrap();
    let b = Vector::cartesian(&[2.0, -1.0, 0.5]).unwrap();
    assert!(a.is_cauchy_schwarz(&b));
    assert!(a.is_triangle(&b));
}

#[test]
fn pythagorean_pair() {
    let a = Vector::cartesian(&[3.0, 0.0]).unwrap();
    let b = Vector::cartesian(&[0.0, 4.0]).unwrap();
    assert!(a.is_pythagorean(&b));
}

#[test]
fn zero_vector_has_no_angle() {
    let zero = Vector::cartesian(&[0.0, 0.0]).unwrap();
    let v = Vector::cartesian(&[1.0, 1.0]).unwrap();
    assert!(zero.angle(&v, AngleForm::Radians).is_err());
}
