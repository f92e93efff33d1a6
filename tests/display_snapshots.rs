//! Snapshot tests for the matrix display format.

use alat::matrix::generate;
use alat::matrix::{Matrix, Shape};

#[test]
fn identity_display_is_stable() {
    let eye = generate::identity(Shape::square(2).unwrap()).unwrap();
    insta::assert_snapshot!(eye.to_string(), @r###"
    Shape (row, col): (2,2)
    1.000000 0.000000
    0.000000 1.000000
    "###);
}

#[test]
fn fractional_cells_render_with_six_decimals() {
    let m = Matrix::from_rows(vec![vec![0.5, -1.25], vec![2.0, 1.0 / 3.0]]).unwrap();
    insta::assert_snapshot!(m.to_string(), @r###"
    Shape (row, col): (2,2)
    0.500000 -1.250000
    2.000000 0.333333
    "###);
}

#[test]
fn sequential_ramp_display() {
    let m = generate::sequential(0.0, 10.0, Shape::new(2, 3).unwrap());
    insta::assert_snapshot!(m.to_string(), @r###"
    Shape (row, col): (2,3)
    0.000000 2.000000 4.000000
    6.000000 8.000000 10.000000
    "###);
}
