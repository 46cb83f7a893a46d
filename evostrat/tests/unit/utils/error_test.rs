use super::*;

#[test]
fn can_create_generic_error_from_strings() {
    let from_str = GenericError::from("failure");
    let from_string = GenericError::from("failure".to_string());

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.to_string(), "failure");
}

#[test]
fn can_format_evolution_errors() {
    let configuration = EvolutionError::Configuration("rho > mu".to_string());
    let evaluation = EvolutionError::from(GenericError::from("nan"));

    assert_eq!(configuration.to_string(), "configuration error: rho > mu");
    assert_eq!(evaluation.to_string(), "evaluation error: nan");
    assert!(configuration.is_configuration());
    assert!(!evaluation.is_configuration());
}
