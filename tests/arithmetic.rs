#[macro_use]
mod cases;

test_case!(
    single_integer,
    input: "42",
    display: "42",
);

test_case!(
    addition,
    input: "1+2",
    display: "3",
);

test_case!(
    multiplication_before_addition,
    input: "2+3*4",
    display: "14",
);

test_case!(
    parentheses_first,
    input: "(2+3)*4",
    display: "20",
);

test_case!(
    left_associative_subtraction,
    input: "10-4-3",
    display: "3",
);

test_case!(
    left_associative_division,
    input: "64/4/2",
    display: "8",
);

test_case!(
    nested_groups,
    input: "((1+2)*(3+4))/7",
    display: "3",
);

test_case!(
    whitespace_is_ignored,
    input: "  6 *  7 ",
    display: "42",
);

test_case!(
    letters_are_dropped,
    input: "2a+b3",
    display: "5",
);
// Sanitizing leaves "2+3"

test_case!(
    unary_minus,
    input: "-5+2",
    display: "-3",
);

test_case!(
    unary_plus,
    input: "+5",
    display: "5",
);

test_case!(
    minus_positive,
    input: "5-+3",
    display: "2",
);

test_case!(
    plus_negative,
    input: "5+-3",
    display: "2",
);

test_case!(
    minus_minus_rejected,
    input: "5--3",
    error: "P001",
);

test_case!(
    plus_plus_rejected,
    input: "5++3",
    error: "P001",
);

test_case!(
    times_negative,
    input: "2*-3",
    display: "-6",
);

test_case!(
    negated_group,
    input: "-(2+3)",
    display: "-5",
);

test_case!(
    double_sign_rejected,
    input: "--5",
    error: "P001",
);

test_case!(
    one_third,
    input: "1/3",
    display: "0.33333333",
);

test_case!(
    two_thirds_rounds_up,
    input: "2/3",
    display: "0.66666667",
);

test_case!(
    float_noise_is_rounded_away,
    input: "0.1+0.2",
    display: "0.3",
);

test_case!(
    trailing_zeros_trimmed,
    input: "1.50*1",
    display: "1.5",
);

test_case!(
    leading_dot,
    input: ".5*2",
    display: "1",
);

test_case!(
    trailing_dot,
    input: "5.+1",
    display: "6",
);

test_case!(
    leading_zeros_rejected,
    input: "007",
    error: "P005",
);

test_case!(
    leading_zero_before_digit_rejected,
    input: "08",
    error: "P005",
);

test_case!(
    zero_point_five,
    input: "0.5*4",
    display: "2",
);

test_case!(
    tie_rounds_up,
    input: "1/512",
    display: "0.00195313",
);

test_case!(
    negative_tie_rounds_away_from_zero,
    input: "-1/512",
    display: "-0.00195313",
);

test_case!(
    tiny_result_rounds_to_zero,
    input: "1/1000000000",
    display: "0",
);

test_case!(
    negative_zero_displays_as_zero,
    input: "-0",
    display: "0",
);

test_case!(
    large_integer,
    input: "123456789*1000",
    display: "123456789000",
);

test_case!(
    division_by_zero,
    input: "5/0",
    error: "R001",
);

test_case!(
    division_by_zero_expression,
    input: "1/(3-3)",
    error: "R001",
);

test_case!(
    overflow,
    input: &format!("{}*{}", "9".repeat(200), "9".repeat(200)),
    error: "R002",
);

test_case!(
    unclosed_paren,
    input: "(2+3",
    error: "P002",
);

test_case!(
    stray_close_paren,
    input: "2+3)",
    error: "P001",
);

test_case!(
    trailing_operator,
    input: "7*",
    error: "P001",
);

test_case!(
    empty_group,
    input: "()",
    error: "P001",
);

test_case!(
    two_dots,
    input: "1.2.3",
    error: "P001",
);

test_case!(
    empty_input,
    input: "",
    blank,
);

test_case!(
    only_spaces,
    input: "    ",
    blank,
);

test_case!(
    only_letters,
    input: "abc",
    blank,
);

#[test]
fn deep_nesting_is_rejected() {
    let input = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    let err = cases::engine().evaluate(&input).unwrap_err();
    pretty_assertions::assert_eq!(cases::error_code(&err), Some("P004"));
}

#[test]
fn long_chain_evaluates() {
    let input = vec!["1"; 5000].join("+");
    let evaluation = cases::engine().evaluate(&input).unwrap().unwrap();
    pretty_assertions::assert_eq!(evaluation.display, "5000");
}
