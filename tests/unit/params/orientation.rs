use super::*;

#[test]
fn two_endpoints_with_count_are_interpolated() {
    assert_eq!(
        expand_orientations(&[0.0, 90.0], 5).unwrap(),
        vec![0.0, 22.5, 45.0, 67.5, 90.0]
    );
    assert_eq!(
        expand_orientations(&[90.0, 0.0], 3).unwrap(),
        vec![90.0, 45.0, 0.0]
    );
}

#[test]
fn two_values_without_count_are_used_literally() {
    assert_eq!(expand_orientations(&[0.0, 45.0], 0).unwrap(), vec![0.0, 45.0]);
    assert_eq!(expand_orientations(&[0.0, 45.0], 2).unwrap(), vec![0.0, 45.0]);
}

#[test]
fn other_lengths_ignore_count() {
    assert_eq!(expand_orientations(&[30.0], 10).unwrap(), vec![30.0]);
    assert_eq!(
        expand_orientations(&[0.0, 10.0, 20.0], 10).unwrap(),
        vec![0.0, 10.0, 20.0]
    );
}

#[test]
fn empty_list_is_rejected() {
    let err = expand_orientations(&[], 5).unwrap_err();
    assert!(matches!(err, GaborError::Validation(_)));
}

#[test]
fn non_positive_counts_keep_the_literal_list() {
    for n in [-1, -100, i64::MIN, 1] {
        assert_eq!(
            expand_orientations(&[0.0, 45.0], n).unwrap(),
            vec![0.0, 45.0],
            "n={n}"
        );
    }
}
