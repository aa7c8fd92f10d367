use super::*;
use crate::vrplib::format_vrplib_solution;

#[test]
fn can_read_written_solution_back() {
    let solution = CanonicalSolution { slots: vec![vec![3], vec![], vec![1, 2], vec![], vec![7, 5, 4]], cost: 512.35 };

    let text = format_vrplib_solution(&solution, 2);
    let restored = read_vrplib_solution(BufReader::new(text.as_bytes())).unwrap();

    assert_eq!(restored, solution);
}

#[test]
fn can_ignore_unknown_lines() {
    let text = "Instance X-n3\nRoute #1: 1 2\n\nRoute #2:\nCost: 10.5\n";

    let solution = read_vrplib_solution(BufReader::new(text.as_bytes())).unwrap();

    assert_eq!(solution.slots, vec![vec![1, 2], vec![]]);
    assert_eq!(solution.cost, 10.5);
}

parameterized_test! {can_detect_malformed_solution, (text, expected_cause), {
    let error = read_vrplib_solution(BufReader::new(text.as_bytes())).expect_err("should fail");

    assert_eq!(error.kind, ErrorKind::MalformedSolution);
    assert!(error.cause.starts_with(expected_cause), "unexpected cause: {}", error.cause);
}}

can_detect_malformed_solution! {
    case01_no_cost: ("Route #1: 1", "cannot find cost line"),
    case02_skipped_route: ("Route #1: 1\nRoute #3: 2\nCost: 1", "expecting route #2"),
    case03_bad_number: ("Route #a: 1\nCost: 1", "expecting route #1"),
    case04_bad_node: ("Route #1: 1 b\nCost: 1", "cannot parse node id"),
    case05_bad_cost: ("Route #1: 1\nCost: x", "cannot parse cost"),
    case06_two_costs: ("Route #1: 1\nCost: 1\nCost: 2", "more than one cost line"),
    case07_no_separator: ("Route #1 1 2\nCost: 1", "cannot find visits separator"),
}
