use super::*;

#[test]
fn can_get_values_by_kind() {
    let strategy = StrategyParams::new()
        .with("sigma", 0.5)
        .with("sigmas", vec![0.1, 0.2])
        .with("covariance", Matrix::identity(2));

    assert_eq!(strategy.len(), 3);
    assert_eq!(strategy.keys(), vec!["covariance", "sigma", "sigmas"]);
    assert_eq!(strategy.scalar("sigma"), Some(0.5));
    assert_eq!(strategy.vector("sigmas"), Some([0.1, 0.2].as_slice()));
    assert_eq!(strategy.matrix("covariance").and_then(|m| m.get(1, 1)), Some(1.));

    assert_eq!(strategy.scalar("sigmas"), None);
    assert_eq!(strategy.vector("sigma"), None);
    assert_eq!(strategy.matrix("unknown"), None);
}

#[test]
fn can_replace_value() {
    let mut strategy = StrategyParams::new().with("sigma", 1.);

    let previous = strategy.insert("sigma", 2.);

    assert_eq!(previous, Some(StrategyValue::Scalar(1.)));
    assert_eq!(strategy.scalar("sigma"), Some(2.));
}

#[test]
fn can_average_all_kinds() {
    let first = StrategyParams::new()
        .with("sigma", 1.)
        .with("sigmas", vec![1., 2.])
        .with("matrix", Matrix::new(1, 2, vec![0., 4.]).unwrap());
    let second = StrategyParams::new()
        .with("sigma", 3.)
        .with("sigmas", vec![3., 4.])
        .with("matrix", Matrix::new(1, 2, vec![2., 0.]).unwrap());

    let average = StrategyParams::average(&[&first, &second]);

    assert_eq!(average.scalar("sigma"), Some(2.));
    assert_eq!(average.vector("sigmas"), Some([2., 3.].as_slice()));
    assert_eq!(average.matrix("matrix").map(|m| m.data().to_vec()), Some(vec![1., 2.]));
}

#[test]
fn can_keep_first_value_on_mismatch() {
    let first = StrategyParams::new().with("sigma", 1.).with("sigmas", vec![1., 2.]).with("only_first", 5.);
    let second = StrategyParams::new().with("sigma", vec![3.]).with("sigmas", vec![3.]);

    let average = StrategyParams::average(&[&first, &second]);

    assert_eq!(average.scalar("sigma"), Some(1.));
    assert_eq!(average.vector("sigmas"), Some([1., 2.].as_slice()));
    assert_eq!(average.scalar("only_first"), Some(5.));
}

#[test]
fn can_average_empty_input() {
    assert!(StrategyParams::average(&[]).is_empty());
}

#[test]
fn can_create_matrix() {
    assert!(Matrix::new(2, 2, vec![1., 2., 3.]).is_none());

    let matrix = Matrix::new(2, 2, vec![1., 2., 3., 4.]).unwrap();

    assert_eq!(matrix.row(1), Some([3., 4.].as_slice()));
    assert_eq!(matrix.row(2), None);
    assert_eq!(matrix.get(0, 1), Some(2.));
    assert_eq!(matrix.get(0, 2), None);
    assert_eq!(Matrix::identity(2).data(), &[1., 0., 0., 1.]);
}

#[test]
fn can_get_value_kind() {
    assert_eq!(StrategyValue::from(1.).kind(), "scalar");
    assert_eq!(StrategyValue::from(vec![1.]).kind(), "vector");
    assert_eq!(StrategyValue::from(Matrix::zeros(1, 1)).kind(), "matrix");
}
