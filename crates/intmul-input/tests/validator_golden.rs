use intmul_input::{DiagnosticCode, Operand, SplitPlan, validate_operands, validate_split_plan};

#[test]
fn valid_operands_strip_one_newline_and_keep_case() {
    let pair = validate_operands("1A2b\n", "3c4D\n").expect("valid operands should pass");
    assert_eq!(pair.a(), "1A2b");
    assert_eq!(pair.b(), "3c4D");
}

#[test]
fn empty_line_fails_with_stable_message() {
    let err = validate_operands("\n", "12\n").unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::EmptyInput));
    assert_eq!(err.diagnostics[0].operand, Some(Operand::A));
    assert_eq!(err.to_string(), "operand A is empty");
}

#[test]
fn only_one_newline_is_stripped() {
    let err = validate_operands("12\n\n", "12\n").unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::LengthMismatch));
}

#[test]
fn length_mismatch_fails_with_stable_message() {
    let err = validate_operands("ab", "a").unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::LengthMismatch));
    assert_eq!(err.to_string(), "operands differ in length (2 vs 1 digits)");
}

#[test]
fn invalid_character_reports_operand_and_position() {
    let err = validate_operands("g1", "1a").unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::InvalidCharacter));
    assert_eq!(err.diagnostics[0].operand, Some(Operand::A));
    assert_eq!(err.diagnostics[0].position, Some(0));

    let err = validate_operands("12\n", "1x\n").unwrap_err();
    assert_eq!(err.diagnostics[0].operand, Some(Operand::B));
    assert_eq!(err.diagnostics[0].position, Some(1));
}

#[test]
fn carriage_return_is_not_a_digit() {
    let err = validate_operands("12\r\n", "34\r\n").unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::InvalidCharacter));
}

#[test]
fn diagnostics_serialize_with_snake_case_codes() {
    let err = validate_operands("", "12").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["diagnostics"][0]["code"], "empty_input");
    assert_eq!(json["diagnostics"][0]["operand"], "a");
    assert!(json["diagnostics"][0].get("position").is_none());
}

#[test]
fn split_plan_accepts_powers_of_two() {
    let plan = validate_split_plan(1).unwrap();
    assert_eq!((plan.depth, plan.units), (0, 0));

    let plan = validate_split_plan(4).unwrap();
    assert_eq!((plan.depth, plan.units), (2, 4 + 16));

    let plan = validate_split_plan(64).unwrap();
    assert_eq!(plan.depth, 6);
}

#[test]
fn split_plan_rejects_odd_lengths() {
    let err = validate_split_plan(3).unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::OddLength));
    assert_eq!(err.to_string(), "input is not even (3 digits)");

    let err = validate_split_plan(6).unwrap_err();
    assert_eq!(err.code(), Some(DiagnosticCode::OddLength));
    assert_eq!(err.to_string(), "input of 6 digits splits into odd halves of 3 digits");
}

#[test]
fn split_plan_counts_units_per_level() {
    let plan = SplitPlan::for_len(8).unwrap();
    assert_eq!(plan.digits, 8);
    assert_eq!((plan.depth, plan.units), (3, 4 + 16 + 64));

    assert_eq!(SplitPlan::for_len(2).unwrap().units, 4);
    assert_eq!(SplitPlan::for_len(16), validate_split_plan(16));
    assert!(SplitPlan::for_len(12).is_err());
}
