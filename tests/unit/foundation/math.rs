use super::*;

#[test]
fn half_size_uses_integer_division() {
    assert_eq!(half_size(1), 0);
    assert_eq!(half_size(5), 2);
    assert_eq!(half_size(500), 250);
}

#[test]
fn deg_to_rad_quarter_turn() {
    assert!((deg_to_rad(90.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert_eq!(deg_to_rad(0.0), 0.0);
}

#[test]
fn linspace_is_inclusive_and_exact_at_end() {
    assert_eq!(linspace(0.0, 90.0, 5), vec![0.0, 22.5, 45.0, 67.5, 90.0]);
    let v = linspace(0.0, 1.0, 7);
    assert_eq!(v.len(), 7);
    assert_eq!(v[6], 1.0);
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    assert!(linspace(3.0, 9.0, 0).is_empty());
}
