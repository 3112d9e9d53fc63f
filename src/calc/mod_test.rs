use super::*;

fn state(total: Option<&str>, next: Option<&str>, operation: Option<Operator>) -> CalculatorState {
    CalculatorState {
        total: total.map(str::to_owned),
        next: next.map(str::to_owned),
        operation,
    }
}

fn press_all(tokens: &[&str]) -> CalculatorState {
    tokens
        .iter()
        .fold(CalculatorState::new(), |acc, token| calculate(&acc, token))
}

// =============================================================================
// worked examples
// =============================================================================

#[test]
fn clear_resets_everything() {
    let res = calculate(&state(Some("8"), Some("9"), Some(Operator::Subtract)), "AC");
    assert_eq!(res, CalculatorState::new());
}

#[test]
fn decimal_seeds_next_from_total() {
    let res = calculate(&state(Some("8"), None, None), ".");
    assert_eq!(res, state(Some("8"), Some("8."), None));
}

#[test]
fn equals_multiplies() {
    let res = calculate(&state(Some("8"), Some("2"), Some(Operator::Multiply)), "=");
    assert_eq!(res, state(Some("16"), None, None));
}

#[test]
fn equals_divides() {
    let res = calculate(&state(Some("8"), Some("2"), Some(Operator::Divide)), "=");
    assert_eq!(res, state(Some("4"), None, None));
}

#[test]
fn toggle_sign_on_total() {
    let res = calculate(&state(Some("8"), None, None), "+/-");
    assert_eq!(res, state(Some("-8"), None, None));
}

#[test]
fn toggle_sign_targets_next_when_present() {
    let res = calculate(&state(Some("8"), Some("3"), Some(Operator::Add)), "+/-");
    assert_eq!(res, state(Some("8"), Some("-3"), Some(Operator::Add)));
}

// =============================================================================
// reset
// =============================================================================

#[test]
fn repeated_clear_stays_empty() {
    let mut current = state(Some("1"), Some("2"), Some(Operator::Add));
    for _ in 0..3 {
        current = calculate(&current, "AC");
        assert_eq!(current, CalculatorState::new());
    }
}

// =============================================================================
// sign flip
// =============================================================================

#[test]
fn toggle_sign_twice_restores_value() {
    let once = calculate(&state(None, Some("42"), None), "+/-");
    assert_eq!(once.next.as_deref(), Some("-42"));
    let twice = calculate(&once, "+/-");
    assert_eq!(twice.next.as_deref(), Some("42"));
}

#[test]
fn toggle_sign_on_empty_is_noop() {
    assert_eq!(calculate(&CalculatorState::new(), "+/-"), CalculatorState::new());
}

#[test]
fn toggle_sign_keeps_trailing_dot() {
    let res = calculate(&state(None, Some("5."), None), "+/-");
    assert_eq!(res.next.as_deref(), Some("-5."));
}

// =============================================================================
// percent
// =============================================================================

#[test]
fn percent_divides_next_by_hundred() {
    let res = calculate(&state(Some("8"), Some("50"), Some(Operator::Add)), "%");
    assert_eq!(res, state(Some("8"), Some("0.5"), Some(Operator::Add)));
}

#[test]
fn percent_falls_back_to_total() {
    let res = calculate(&state(Some("250"), None, None), "%");
    assert_eq!(res, state(Some("2.5"), None, None));
}

#[test]
fn percent_on_empty_is_noop() {
    assert_eq!(calculate(&CalculatorState::new(), "%"), CalculatorState::new());
}

// =============================================================================
// decimal point
// =============================================================================

#[test]
fn decimal_on_empty_starts_with_zero() {
    let res = calculate(&CalculatorState::new(), ".");
    assert_eq!(res.next.as_deref(), Some("0."));
}

#[test]
fn decimal_after_operator_starts_with_zero() {
    let res = calculate(&state(Some("8"), None, Some(Operator::Add)), ".");
    assert_eq!(res, state(Some("8"), Some("0."), Some(Operator::Add)));
}

#[test]
fn duplicate_decimal_is_noop() {
    let before = state(None, Some("3.1"), None);
    assert_eq!(calculate(&before, "."), before);
}

#[test]
fn decimal_appends_to_next() {
    let res = calculate(&state(None, Some("12"), None), ".");
    assert_eq!(res.next.as_deref(), Some("12."));
}

#[test]
fn decimal_does_not_seed_from_fractional_total() {
    let before = state(Some("2.5"), None, None);
    assert_eq!(calculate(&before, "."), before);
}

// =============================================================================
// digits
// =============================================================================

#[test]
fn digits_concatenate() {
    let res = press_all(&["1", "2", "3"]);
    assert_eq!(res.next.as_deref(), Some("123"));
}

#[test]
fn leading_zero_is_suppressed() {
    assert_eq!(press_all(&["0", "0"]).next.as_deref(), Some("0"));
    assert_eq!(press_all(&["0", "7"]).next.as_deref(), Some("7"));
}

#[test]
fn zero_before_decimal_is_kept() {
    assert_eq!(press_all(&["0", ".", "5"]).next.as_deref(), Some("0.5"));
}

#[test]
fn negative_zero_is_replaced_keeping_sign() {
    let res = calculate(&state(None, Some("-0"), None), "4");
    assert_eq!(res.next.as_deref(), Some("-4"));
}

#[test]
fn digit_after_result_starts_fresh_entry() {
    let res = calculate(&state(Some("16"), None, None), "5");
    assert_eq!(res, state(None, Some("5"), None));
}

#[test]
fn digit_with_pending_operator_keeps_total() {
    let res = calculate(&state(Some("16"), None, Some(Operator::Subtract)), "5");
    assert_eq!(res, state(Some("16"), Some("5"), Some(Operator::Subtract)));
}

// =============================================================================
// operators
// =============================================================================

#[test]
fn first_operator_commits_next_into_total() {
    let res = press_all(&["1", "2", "+"]);
    assert_eq!(res, state(Some("12"), None, Some(Operator::Add)));
}

#[test]
fn committing_drops_trailing_dot() {
    let res = calculate(&state(None, Some("7."), None), "x");
    assert_eq!(res, state(Some("7"), None, Some(Operator::Multiply)));
}

#[test]
fn operator_can_be_changed_before_operand() {
    let res = press_all(&["9", "+", "-", "x"]);
    assert_eq!(res, state(Some("9"), None, Some(Operator::Multiply)));
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    // 2 + 3 x 4 = 20, not 14.
    let res = press_all(&["2", "+", "3", "x", "4", "="]);
    assert_eq!(res, state(Some("20"), None, None));
}

#[test]
fn chained_operator_shows_running_total() {
    let res = press_all(&["5", "-", "2", "+"]);
    assert_eq!(res, state(Some("3"), None, Some(Operator::Add)));
}

#[test]
fn operator_with_missing_total_uses_zero() {
    let res = calculate(&state(None, Some("4"), Some(Operator::Subtract)), "+");
    assert_eq!(res, state(Some("-4"), None, Some(Operator::Add)));
}

#[test]
fn operator_after_equals_continues_from_result() {
    let res = press_all(&["6", "÷", "4", "=", "x", "2", "="]);
    assert_eq!(res.total.as_deref(), Some("3"));
}

// =============================================================================
// equals
// =============================================================================

#[test]
fn equals_without_operation_is_noop() {
    let before = state(Some("3"), Some("4"), None);
    assert_eq!(calculate(&before, "="), before);
}

#[test]
fn equals_without_next_is_noop() {
    let before = state(Some("3"), None, Some(Operator::Add));
    assert_eq!(calculate(&before, "="), before);
}

#[test]
fn equals_with_modulo_operation() {
    let res = calculate(&state(Some("10"), Some("4"), Some(Operator::Modulo)), "=");
    assert_eq!(res.total.as_deref(), Some("2"));
}

#[test]
fn divide_by_zero_flows_through() {
    let res = press_all(&["1", "÷", "0", "="]);
    assert_eq!(res.total.as_deref(), Some("Infinity"));
    let res = press_all(&["0", "÷", "0", "="]);
    assert_eq!(res.total.as_deref(), Some("NaN"));
}

#[test]
fn decimal_arithmetic_uses_float_formatting() {
    let res = press_all(&[".", "1", "+", ".", "2", "="]);
    assert_eq!(res.total.as_deref(), Some("0.30000000000000004"));
}

// =============================================================================
// unrecognized tokens
// =============================================================================

#[test]
fn unknown_tokens_leave_state_unchanged() {
    let before = state(Some("8"), Some("2"), Some(Operator::Add));
    for token in ["", "foo", "12", "/", "*", "ac", "==", "%%"] {
        assert_eq!(calculate(&before, token), before, "token {token:?} should be ignored");
    }
}

#[test]
fn calculate_does_not_mutate_input() {
    let before = state(Some("8"), Some("2"), Some(Operator::Add));
    let snapshot = before.clone();
    let _ = calculate(&before, "=");
    assert_eq!(before, snapshot);
}

#[test]
fn keypad_sweep_never_mutates_input() {
    use std::collections::{HashSet, VecDeque};

    const DEPTH: usize = 4;

    let mut seen = HashSet::from([CalculatorState::new()]);
    let mut queue = VecDeque::from([(CalculatorState::new(), 0usize)]);
    while let Some((current, depth)) = queue.pop_front() {
        for token in crate::views::calculator::KEYPAD {
            let snapshot = current.clone();
            let next = calculate(&current, token);
            assert_eq!(current, snapshot, "{token:?} mutated {snapshot:?}");
            assert!(!next.display().is_empty(), "{token:?} on {snapshot:?} left an empty display");

            let json = serde_json::to_value(&next).unwrap();
            let fields = json.as_object().map(serde_json::Map::len);
            assert_eq!(fields, Some(3), "{token:?} on {snapshot:?} gave {json}");

            if depth + 1 < DEPTH && seen.insert(next.clone()) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    assert!(seen.len() > 500, "sweep only reached {} states", seen.len());
}

// =============================================================================
// display
// =============================================================================

#[test]
fn display_prefers_next_then_total_then_operation() {
    assert_eq!(state(Some("1"), Some("2"), Some(Operator::Add)).display(), "2");
    assert_eq!(state(Some("1"), None, Some(Operator::Add)).display(), "1");
    assert_eq!(state(None, None, Some(Operator::Divide)).display(), "÷");
    assert_eq!(CalculatorState::new().display(), "0");
}

#[test]
fn display_skips_empty_strings() {
    assert_eq!(state(Some("7"), Some(""), None).display(), "7");
}

#[test]
fn full_session_sequence() {
    let res = press_all(&["1", "2", "+", "3", "="]);
    assert_eq!(res.display(), "15");
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn state_serializes_with_operator_symbol() {
    let json = serde_json::to_value(state(Some("8"), None, Some(Operator::Divide))).unwrap();
    assert_eq!(json, serde_json::json!({ "total": "8", "next": null, "operation": "÷" }));
}

#[test]
fn state_deserializes_missing_fields_as_null() {
    let parsed: CalculatorState = serde_json::from_str(r#"{"next":"3"}"#).unwrap();
    assert_eq!(parsed, state(None, Some("3"), None));
}

#[test]
fn state_rejects_unknown_operator() {
    let parsed = serde_json::from_str::<CalculatorState>(r#"{"operation":"^"}"#);
    assert!(parsed.is_err());
}
