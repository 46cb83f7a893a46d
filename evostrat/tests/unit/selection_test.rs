use super::*;
use crate::helpers::example::{create_member, create_members};
use crate::strategy::StrategyParams;
use crate::utils::Float;
use std::sync::Arc;

fn get_fitness(members: &[Member<Vec<Float>>]) -> Vec<Float> {
    members.iter().map(|member| member.fitness).collect()
}

fn get_origins(members: &[Member<Vec<Float>>]) -> Vec<Float> {
    members.iter().map(|member| member.individual[0]).collect()
}

parameterized_test! {can_select_plus, (parents, offspring, expected_fitness), {
    let mu = parents.len();

    let selected = select(&Selection::Plus, create_members(parents), create_members(offspring), mu);

    assert_eq!(get_fitness(selected.as_slice()), expected_fitness);
}}

can_select_plus! {
    case01_offspring_better: (&[3., 4.], &[1., 2., 5.], vec![1., 2.]),
    case02_parents_better: (&[1., 2.], &[3., 4., 5.], vec![1., 2.]),
    case03_mixed: (&[1., 5.], &[4., 0.5, 6.], vec![0.5, 1.]),
    case04_single_parent_offspring_worse: (&[1.], &[2.], vec![1.]),
}

parameterized_test! {can_select_comma, (parents, offspring, mu, expected_fitness), {
    let selected = select(&Selection::Comma, create_members(parents), create_members(offspring), mu);

    assert_eq!(get_fitness(selected.as_slice()), expected_fitness);
}}

can_select_comma! {
    case01_ignores_better_parents: (&[0., 0.], &[3., 1., 2.], 2, vec![1., 2.]),
    case02_single: (&[5.], &[4., 6.], 1, vec![4.]),
    case03_sorted: (&[9., 9., 9.], &[5., 1., 4., 2., 3.], 3, vec![1., 2., 3.]),
}

#[test]
fn can_prefer_parent_on_tie_with_plus() {
    let parents = vec![create_member(vec![-1.], 1.), create_member(vec![-2.], 3.)];
    let offspring = vec![create_member(vec![10.], 1.), create_member(vec![20.], 2.)];

    let selected = select(&Selection::Plus, parents, offspring, 2);

    assert_eq!(get_origins(selected.as_slice()), vec![-1., 10.]);
}

#[test]
fn can_prefer_lower_index_on_tie_with_comma() {
    let offspring = create_members(&[2., 1., 1., 1.]);

    let selected = select(&Selection::Comma, vec![], offspring, 2);

    assert_eq!(get_origins(selected.as_slice()), vec![1., 2.]);
}

#[test]
fn can_move_offspring_data_wholesale() {
    let strategy = Arc::new(StrategyParams::new().with("sigma", 0.3));
    let offspring =
        vec![Member { individual: vec![7.], strategy: strategy.clone(), fitness: 0. }, create_member(vec![8.], 9.)];

    let selected = select(&Selection::Comma, vec![], offspring, 1);

    assert_eq!(selected[0].individual, vec![7.]);
    assert!(Arc::ptr_eq(&selected[0].strategy, &strategy));
}

#[test]
fn can_rank_nan_fitness_last() {
    let selected = select(&Selection::Plus, create_members(&[Float::NAN]), create_members(&[3.]), 1);

    assert_eq!(get_fitness(selected.as_slice()), vec![3.]);
}

parameterized_test! {can_parse_selection, (value, expected), {
    assert_eq!(value.parse::<Selection>().ok(), expected);
}}

can_parse_selection! {
    case01_plus: ("plus", Some(Selection::Plus)),
    case02_plus_sign: ("+", Some(Selection::Plus)),
    case03_comma: ("comma", Some(Selection::Comma)),
    case04_unknown: ("elitist", None),
}

#[test]
fn can_display_selection() {
    assert_eq!(Selection::Plus.to_string(), "plus");
    assert_eq!(Selection::Comma.to_string(), "comma");
}
