use alat::matrix::generate;
use alat::matrix::Shape;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn constant_generators_satisfy_their_predicates() {
    let shape = Shape::new(3, 5).unwrap();
    assert!(generate::zeros(shape).is_zeros());
    assert!(generate::ones(shape).is_ones());
    assert!(generate::arbitrary(2.5, shape).is_arbitrary(2.5));
    assert!(!generate::arbitrary(2.5, shape).is_zeros());
}

#[test]
fn sequential_ramp_is_inclusive() {
    let m = generate::sequential(-2.0, 2.0, Shape::new(1, 5).unwrap());
    assert_eq!(m.as_slice(), &[-2.0, -1.0, 0.0, 1.0, 2.0]);
}

#[test]
fn uniform_respects_bounds() {
    let mut rng = StdRng::seed_from_u64(1);
    let m = generate::uniform(-3.0, 5.0, Shape::new(8, 8).unwrap(), &mut rng).unwrap();
    assert!(m.as_slice().iter().all(|&v| (-3.0..=5.0).contains(&v)));
}

#[test]
fn randint_cells_are_integral_and_bounded() {
    let mut rng = StdRng::seed_from_u64(2);
    let m = generate::randint(0.0, 9.0, Shape::new(6, 6).unwrap(), &mut rng).unwrap();
    for &v in m.as_slice() {
        assert_eq!(v.fract(), 0.0);
        assert!((0.0..=9.0).contains(&v));
    }
}

#[test]
fn same_seed_same_matrix() {
    let shape = Shape::new(5, 5).unwrap();
    let a = generate::uniform(0.0, 1.0, shape, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = generate::uniform(0.0, 1.0, shape, &mut StdRng::seed_from_u64(9)).unwrap();
    assert!(a.is_equal(&b));
}

#[test]
fn different_seeds_disagree_somewhere() {
    let shape = Shape::new(5, 5).unwrap();
    let a = generate::random(shape, &mut StdRng::seed_from_u64(3));
    let b = generate::random(shape, &mut StdRng::seed_from_u64(4));
    assert!(!a.is_equal(&b));
}
