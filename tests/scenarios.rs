//! End-to-end key sequences through a calculator session.

use zcalc::core::{parse_keys, Action, FatalError};
use zcalc::effects::{Calculator, RecordingEnv};
use zcalc::{EngineConfig, Snapshot};

fn session(keys: &str) -> (Calculator, RecordingEnv, Result<(), FatalError>) {
    let mut calculator = Calculator::new();
    let mut env = RecordingEnv::new();
    calculator.boot(&mut env);
    let result = calculator
        .run(parse_keys(keys).unwrap(), &mut env)
        .map(|_| ());
    (calculator, env, result)
}

#[test]
fn simple_addition() {
    let (calculator, env, result) = session("12+7=");
    assert!(result.is_ok());
    assert_eq!(calculator.state().current_number, "19");

    let frame = env.last_frame().unwrap();
    assert_eq!(frame.primary, "19");
    assert_eq!(frame.secondary, "12+7");
    assert!(frame.secondary_visible);
}

#[test]
fn chained_operations_fold_left_to_right() {
    let (calculator, _, _) = session("2+3×4=");
    assert_eq!(calculator.state().current_number, "20");
    assert_eq!(calculator.state().expression, "2+3×4");
}

#[test]
fn result_feeds_the_next_operation() {
    let (calculator, _, _) = session("6×7=-2=");
    assert_eq!(calculator.state().current_number, "40");
    // The expression keeps growing from the original trace.
    assert_eq!(calculator.state().expression, "6×7-2");
}

#[test]
fn digit_after_result_starts_a_new_expression() {
    let (calculator, env, _) = session("6×7=5");
    assert_eq!(calculator.state().current_number, "5");
    assert_eq!(env.last_frame().unwrap().secondary, "5");
}

#[test]
fn sixth_consecutive_operator_ends_the_run() {
    let (calculator, env, result) = session("9-1-1-1-1-1-");

    assert_eq!(
        result,
        Err(FatalError::TooManyConsecutiveOperations { count: 5 })
    );
    assert_eq!(calculator.state().current_number, "1");
    assert_eq!(calculator.state().first_number, 5.0);
    assert!(env.notifications.is_empty());
}

#[test]
fn clear_resets_the_operator_run() {
    let (calculator, _, result) = session("1+1+1+1+1+C1+1+1+1+1+");
    assert!(result.is_ok());
    assert_eq!(calculator.state().consecutive_operations, 5);
}

#[test]
fn repeated_operator_keys_count_towards_the_limit() {
    let (_, _, result) = session("1+2+3+4+5++");
    assert!(result.is_err());
}

#[test]
fn nine_digit_entry_is_refused() {
    let (calculator, env, result) = session("987654321");
    assert!(result.is_ok());
    assert_eq!(calculator.state().current_number, "98765432");
    assert_eq!(env.notifications, vec!["Number too long!".to_string()]);
}

#[test]
fn large_multiplication_resets() {
    let (calculator, env, result) = session("1000000×2=");
    assert!(result.is_ok());
    assert!(calculator.state().is_initial());
    assert_eq!(
        env.notifications,
        vec!["Numbers too large for multiplication!".to_string()]
    );

    let frame = env.last_frame().unwrap();
    assert_eq!(frame.primary, "Error");
    assert!(!frame.secondary_visible);
}

#[test]
fn division_by_zero_resets() {
    let (calculator, env, _) = session("5÷0=");
    assert!(calculator.state().is_initial());
    assert_eq!(env.notifications, vec!["Division by zero!".to_string()]);
    assert_eq!(env.last_frame().unwrap().primary, "Error");
}

#[test]
fn typing_after_error_starts_fresh() {
    let (calculator, env, _) = session("5÷0=3");
    assert_eq!(calculator.state().current_number, "3");
    assert_eq!(calculator.state().expression, "3");
    assert!(env.last_frame().unwrap().secondary_visible);
}

#[test]
fn multiple_decimal_points_are_kept() {
    let (calculator, env, _) = session("1.2.3");
    assert_eq!(calculator.state().current_number, "1.2.3");
    assert_eq!(env.last_frame().unwrap().primary, "1.2.3");
}

#[test]
fn percent_is_literal_value_over_one_hundred() {
    let (calculator, _, _) = session("50%");
    assert_eq!(calculator.state().current_number, "0.5");

    let (calculator, _, _) = session("80×50%");
    assert_eq!(calculator.state().current_number, "0.5");
    assert_eq!(calculator.state().expression, "80×500.5");
}

#[test]
fn percent_then_equals_uses_the_percent_value() {
    let (calculator, _, _) = session("80×50%=");
    assert_eq!(calculator.state().current_number, "40");
}

#[test]
fn percent_on_malformed_entry_is_silent() {
    let (calculator, env, result) = session("1.2.3%");
    assert!(result.is_ok());
    assert_eq!(calculator.state().current_number, "1.2.3");
    assert!(env.notifications.is_empty());
}

#[test]
fn backspace_walks_back_to_zero() {
    let (calculator, _, _) = session("42<<<");
    assert_eq!(calculator.state().current_number, "0");
    assert_eq!(calculator.state().expression, "0");
}

#[test]
fn backspace_on_empty_does_nothing() {
    let (calculator, env, _) = session("<");
    assert!(calculator.state().is_initial());
    assert_eq!(env.last_frame().unwrap().primary, "0");
}

#[test]
fn clear_returns_to_boot_display() {
    let (calculator, env, _) = session("12+3C");
    assert!(calculator.state().is_initial());

    let frame = env.last_frame().unwrap();
    assert_eq!(frame.primary, "0");
    assert!(!frame.secondary_visible);
}

#[test]
fn config_from_json_drives_the_session() {
    let config = EngineConfig::from_json(r#"{ "max_digits": 4 }"#).unwrap();
    let mut calculator = Calculator::with_config(config).unwrap();
    let mut env = RecordingEnv::new();

    calculator
        .run(parse_keys("123456").unwrap(), &mut env)
        .unwrap();

    assert_eq!(calculator.state().current_number, "1234");
    assert_eq!(env.notifications.len(), 2);
}

#[test]
fn session_survives_a_json_snapshot() {
    let (calculator, _, _) = session("3+4");
    let json = calculator.snapshot().to_json().unwrap();

    let mut resumed = Calculator::restore(Snapshot::from_json(&json).unwrap()).unwrap();
    let mut env = RecordingEnv::new();
    resumed.dispatch(Action::Equals, &mut env).unwrap();

    assert_eq!(resumed.state().current_number, "7");
    assert_eq!(resumed.history().len(), 4);
}
