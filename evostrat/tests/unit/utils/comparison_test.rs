use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_nan_greater: (Float::NAN, 1., Ordering::Greater),
    case05_nan_less: (1., Float::NAN, Ordering::Less),
    case06_both_nan: (Float::NAN, Float::NAN, Ordering::Equal),
    case07_infinity: (Float::INFINITY, Float::MAX, Ordering::Greater),
}

#[test]
fn can_sort_with_nan_last() {
    let mut values = vec![3., Float::NAN, 1., 2.];

    values.sort_by(compare_floats_refs);

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}
